// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::feed::schema::{Field, HeaderSchema};

pub const ENV_CONFIG_PATH: &str = "AFISHA_CONFIG_PATH";
pub const ENV_API_KEY: &str = "SHEETS_API_KEY";
pub const ENV_SPREADSHEET_ID: &str = "SHEETS_SPREADSHEET_ID";
pub const DEFAULT_CONFIG_PATH: &str = "config/feed.toml";

fn default_base_url() -> String {
    "https://sheets.googleapis.com/v4/spreadsheets".to_string()
}
fn default_range() -> String {
    "Лист1".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_page_size() -> usize {
    15
}
fn default_highlights() -> usize {
    3
}
fn default_schema_version() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SheetConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default = "default_range")]
    pub range: String,
    /// "ENV" means: read from SHEETS_API_KEY
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            spreadsheet_id: String::new(),
            range: default_range(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SchemaConfig {
    #[serde(default = "default_schema_version")]
    pub version: u32,
    /// Column-name overrides on top of the built-in header names.
    #[serde(default)]
    pub columns: BTreeMap<Field, String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            version: default_schema_version(),
            columns: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedConfig {
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_highlights")]
    pub highlights: usize,
    #[serde(default)]
    pub schema: SchemaConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            page_size: default_page_size(),
            highlights: default_highlights(),
            schema: SchemaConfig::default(),
        }
    }
}

impl FeedConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading feed config from {}", path.display()))?;
        let cfg: FeedConfig = toml::from_str(&data)
            .with_context(|| format!("parsing feed config {}", path.display()))?;
        cfg.resolved()
    }

    /// Load config using env var + fallbacks:
    /// 1) $AFISHA_CONFIG_PATH
    /// 2) config/feed.toml
    /// 3) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            return Self::load_from_file(&pb);
        }
        let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_p.exists() {
            return Self::load_from_file(&default_p);
        }
        Self::default().resolved()
    }

    /// Apply env overrides and sanitize values.
    fn resolved(mut self) -> Result<Self> {
        if self.sheet.api_key.trim().eq_ignore_ascii_case("env") {
            self.sheet.api_key = env::var(ENV_API_KEY)
                .map_err(|_| anyhow!("Missing {ENV_API_KEY} env var"))?;
        }
        if let Ok(id) = env::var(ENV_SPREADSHEET_ID) {
            if !id.trim().is_empty() {
                self.sheet.spreadsheet_id = id.trim().to_string();
            }
        }
        self.page_size = self.page_size.max(1);
        Ok(self)
    }

    pub fn header_schema(&self) -> HeaderSchema {
        HeaderSchema::with_overrides(self.schema.version, &self.schema.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: FeedConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, FeedConfig::default());
        assert_eq!(cfg.page_size, 15);
        assert_eq!(cfg.sheet.range, "Лист1");
    }

    #[test]
    fn schema_overrides_parse_by_field_name() {
        let cfg: FeedConfig = toml::from_str(
            r#"
            [schema]
            version = 2
            [schema.columns]
            title = "Мероприятие"
            image_url = "Афиша"
            "#,
        )
        .unwrap();
        let schema = cfg.header_schema();
        assert_eq!(schema.version, 2);
        assert_eq!(schema.column_for(Field::Title), Some("Мероприятие"));
        assert_eq!(schema.column_for(Field::ImageUrl), Some("Афиша"));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let cfg: FeedConfig = toml::from_str("page_size = 0").unwrap();
        assert_eq!(cfg.resolved().unwrap().page_size, 1);
    }
}
