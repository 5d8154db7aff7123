// src/feed/providers/fixture.rs
use async_trait::async_trait;

use crate::feed::error::FeedResult;
use crate::feed::providers::decode_values;
use crate::feed::types::FeedSource;

/// Serves a fixed `values` payload. Used by tests and local demos.
pub struct FixtureSource {
    body: String,
}

impl FixtureSource {
    pub fn from_json_str(s: &str) -> Self {
        Self {
            body: s.to_string(),
        }
    }

    /// Build the payload from rows directly.
    pub fn from_rows(rows: &[Vec<&str>]) -> Self {
        let body = serde_json::json!({ "values": rows }).to_string();
        Self { body }
    }
}

#[async_trait]
impl FeedSource for FixtureSource {
    async fn fetch_values(&self) -> FeedResult<Vec<Vec<String>>> {
        decode_values(&self.body)
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
