//! Minsk afisha — Binary Entrypoint
//! Boots the Axum HTTP server serving the normalized events feed.

use minsk_afisha::config::FeedConfig;
use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs by default; JSON lines when AFISHA_LOG_JSON=1.
/// `try_init` leaves an already installed subscriber (e.g. the runtime's) alone.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("minsk_afisha=info,warn"));

    let json = std::env::var("AFISHA_LOG_JSON")
        .ok()
        .is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    let res = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
    if res.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = FeedConfig::load_default()?;
    tracing::info!(
        spreadsheet = %cfg.sheet.spreadsheet_id,
        range = %cfg.sheet.range,
        page_size = cfg.page_size,
        schema_version = cfg.schema.version,
        key_len = cfg.sheet.api_key.len(),
        "feed config loaded"
    );

    let router = minsk_afisha::app(&cfg)?;
    Ok(router.into())
}
