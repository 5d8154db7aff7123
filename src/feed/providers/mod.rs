// src/feed/providers/mod.rs
pub mod fixture;
pub mod sheets;

use serde::Deserialize;
use serde_json::Value;

use crate::feed::error::{FeedError, FeedResult};

/// Body of a `values.get` response. An empty sheet omits `values` entirely.
#[derive(Debug, Deserialize)]
struct SheetValues {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Decode a `{"values": [[...], ...]}` body into rows of cell text.
pub fn decode_values(body: &str) -> FeedResult<Vec<Vec<String>>> {
    let parsed: SheetValues =
        serde_json::from_str(body).map_err(|e| FeedError::Malformed(e.to_string()))?;
    Ok(parsed
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect())
}

fn cell_text(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
