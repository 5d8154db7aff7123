// tests/metrics.rs
//
// Installs the global recorder, so this binary holds a single test.

use chrono::NaiveDate;
use minsk_afisha::feed::normalize_table;
use minsk_afisha::feed::schema::HeaderSchema;
use minsk_afisha::metrics::Metrics;

#[test]
fn feed_series_exposed_after_normalize() {
    let m = Metrics::init().expect("install recorder");

    let values = vec![
        vec!["Название".to_string(), "Дата".to_string()],
        vec!["Концерт".to_string(), "20 мая".to_string()],
        vec![String::new(), "21 мая".to_string()],
    ];
    let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
    let out = normalize_table(values, &HeaderSchema::v1(), today).expect("normalize");
    assert_eq!(out.len(), 1);

    let text = m.handle.render();
    assert!(text.contains("feed_rows_total"), "{text}");
    assert!(text.contains("feed_records_total"), "{text}");
    assert!(text.contains("feed_dropped_total"), "{text}");
}
