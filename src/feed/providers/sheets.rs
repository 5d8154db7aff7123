// src/feed/providers/sheets.rs
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use metrics::histogram;
use reqwest::Url;

use crate::config::SheetConfig;
use crate::feed::error::{FeedError, FeedResult};
use crate::feed::providers::decode_values;
use crate::feed::types::FeedSource;

/// Reads the events sheet through the public spreadsheet values API.
pub struct SheetsSource {
    url: Url,
    client: reqwest::Client,
}

impl SheetsSource {
    pub fn from_config(cfg: &SheetConfig) -> Result<Self> {
        let url = values_url(cfg)?;
        Self::with_url(url, cfg.timeout_secs)
    }

    /// Point at an arbitrary URL returning a `values` payload.
    pub fn from_url(url: &str, timeout_secs: u64) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("parsing feed url {url}"))?;
        Self::with_url(url, timeout_secs)
    }

    fn with_url(url: Url, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()
            .context("building http client")?;
        Ok(Self { url, client })
    }
}

/// `{base}/{spreadsheet_id}/values/{range}?key={api_key}`
pub fn values_url(cfg: &SheetConfig) -> Result<Url> {
    if cfg.spreadsheet_id.trim().is_empty() {
        return Err(anyhow!("sheet.spreadsheet_id is empty"));
    }
    let mut url = Url::parse(&cfg.base_url)
        .with_context(|| format!("parsing sheet.base_url {}", cfg.base_url))?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("sheet.base_url cannot be a base: {}", cfg.base_url))?
        .pop_if_empty()
        .push(cfg.spreadsheet_id.trim())
        .push("values")
        .push(&cfg.range);
    if !cfg.api_key.is_empty() {
        url.query_pairs_mut().append_pair("key", &cfg.api_key);
    }
    Ok(url)
}

#[async_trait]
impl FeedSource for SheetsSource {
    async fn fetch_values(&self) -> FeedResult<Vec<Vec<String>>> {
        let t0 = std::time::Instant::now();

        // `without_url` keeps the api key out of error messages and logs.
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.without_url().to_string()))?;

        histogram!("feed_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
        decode_values(&body)
    }

    fn name(&self) -> &'static str {
        "sheets"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SheetConfig {
        SheetConfig {
            base_url: "https://sheets.googleapis.com/v4/spreadsheets/".into(),
            spreadsheet_id: "abc123".into(),
            range: "Лист1".into(),
            api_key: "k".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn url_encodes_range_and_appends_key() {
        let url = values_url(&cfg()).unwrap();
        assert!(url
            .as_str()
            .starts_with("https://sheets.googleapis.com/v4/spreadsheets/abc123/values/%D0%9B"));
        assert_eq!(url.query(), Some("key=k"));
    }

    #[test]
    fn empty_spreadsheet_id_is_rejected() {
        let mut c = cfg();
        c.spreadsheet_id = " ".into();
        assert!(values_url(&c).is_err());
    }
}
