// src/feed/mod.rs
//! Feed normalizer: raw sheet table → validated `EventRecord`s.
//!
//! Transport and shape failures abort the pass with no partial result.
//! Everything below that level (blank titles, odd dates, junk coordinates)
//! degrades per row and never fails the pass.

pub mod coords;
pub mod dates;
pub mod error;
pub mod filters;
pub mod providers;
pub mod schema;
pub mod types;

use chrono::NaiveDate;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;

use crate::feed::error::{FeedError, FeedResult};
use crate::feed::schema::{map_rows, HeaderSchema};
use crate::feed::types::{EventRecord, FeedSource};

pub use crate::feed::coords::parse_coordinates;
pub use crate::feed::dates::{parse_date_field, ParsedDates};
pub use crate::feed::filters::{
    filter_by_exact_date, filter_by_title, filter_mappable, filter_today, filter_upcoming,
    find_by_id, paginate, sort_by_date_ascending, total_pages, Page,
};

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_fetch_total", "Fetch-and-normalize passes started.");
        describe_counter!(
            "feed_fetch_errors_total",
            "Passes aborted by transport or shape errors."
        );
        describe_counter!("feed_rows_total", "Data rows received from the source.");
        describe_counter!("feed_records_total", "Records kept after the title gate.");
        describe_counter!("feed_dropped_total", "Rows dropped for a blank title.");
        describe_histogram!("feed_normalize_ms", "Row mapping time in milliseconds.");
        describe_histogram!("feed_fetch_ms", "Source fetch time in milliseconds.");
    });
}

/// Shape gate + row mapping over an already fetched table.
pub fn normalize_table(
    values: Vec<Vec<String>>,
    schema: &HeaderSchema,
    today: NaiveDate,
) -> FeedResult<Vec<EventRecord>> {
    ensure_metrics_described();

    if values.len() < 2 {
        return Err(FeedError::Shape { rows: values.len() });
    }

    let t0 = std::time::Instant::now();
    let mut rows = values;
    let data = rows.split_off(1);
    let header = rows;

    let records = map_rows(&header[0], &data, schema, today);
    let dropped = data.len() - records.len();

    histogram!("feed_normalize_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
    counter!("feed_rows_total").increment(data.len() as u64);
    counter!("feed_records_total").increment(records.len() as u64);
    counter!("feed_dropped_total").increment(dropped as u64);

    Ok(records)
}

/// Fetch once from `source` and normalize. No retry, no cache.
pub async fn load_events(
    source: &dyn FeedSource,
    schema: &HeaderSchema,
    today: NaiveDate,
) -> FeedResult<Vec<EventRecord>> {
    ensure_metrics_described();
    counter!("feed_fetch_total").increment(1);

    let result = source
        .fetch_values()
        .await
        .and_then(|values| normalize_table(values, schema, today));

    match &result {
        Ok(records) => {
            tracing::info!(
                target: "feed",
                source = source.name(),
                records = records.len(),
                schema_version = schema.version,
                "feed loaded"
            );
        }
        Err(e) => {
            tracing::warn!(
                target: "feed",
                error = %e,
                kind = e.kind().as_str(),
                source = source.name(),
                "feed load failed"
            );
            counter!("feed_fetch_errors_total", "kind" => e.kind().as_str()).increment(1);
        }
    }

    result
}
