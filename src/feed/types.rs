// src/feed/types.rs
use serde::{Deserialize, Serialize};

use crate::feed::error::FeedResult;

/// One row of the source table, already split into header/cell pairs.
pub type RawRow = std::collections::HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A normalized event. Created fresh on every fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// 1-based position of the source row, counted before the title gate.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// First entry of `dates`, `YYYY-MM-DD`.
    pub date: String,
    pub dates: Vec<String>,
    pub time: String,
    pub location: String,
    pub address: String,
    pub category: String,
    pub cost: String,
    pub image_url: String,
    pub external_link: String,
    pub coordinates: Option<Coordinates>,
}

/// Where the raw table comes from. One call is one attempt; no retry.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns `values[0]` = header row, `values[1..]` = data rows.
    async fn fetch_values(&self) -> FeedResult<Vec<Vec<String>>>;
    fn name(&self) -> &'static str;
}
