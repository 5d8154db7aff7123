// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod clock;
pub mod config;
pub mod feed;
pub mod metrics;
pub mod submission;
pub mod views;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::feed::error::{FeedError, FeedErrorKind};
pub use crate::feed::types::{Coordinates, EventRecord, FeedSource};

/// Build the full app router from configuration: feed views + `/metrics`.
///
/// Installs the global Prometheus recorder, so call it once per process.
pub fn app(cfg: &config::FeedConfig) -> anyhow::Result<axum::Router> {
    let state = AppState::from_config(cfg)?;
    let metrics = crate::metrics::Metrics::init()?;
    Ok(router(state).merge(metrics.router()))
}
