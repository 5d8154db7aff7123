// src/feed/schema.rs
//! Column-name → field mapping for the events sheet.
//!
//! The sheet has no fixed column order, only fixed header names, so the schema
//! is a lookup table keyed by header text. Headers the table does not know are
//! ignored; columns the sheet does not have leave their field empty.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::feed::coords::parse_coordinates;
use crate::feed::dates::parse_date_field;
use crate::feed::types::{EventRecord, RawRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Date,
    Time,
    Location,
    Address,
    Category,
    Cost,
    ImageUrl,
    ExternalLink,
    Coordinates,
}

/// Intermediate string-only record; dates and coordinates are parsed once all
/// cells of the row have been assigned.
#[derive(Debug, Default)]
struct RecordDraft {
    title: String,
    description: String,
    date_text: String,
    time: String,
    location: String,
    address: String,
    category: String,
    cost: String,
    image_url: String,
    external_link: String,
    coordinates_text: String,
}

impl Field {
    fn assign(self, draft: &mut RecordDraft, value: String) {
        let slot = match self {
            Field::Title => &mut draft.title,
            Field::Description => &mut draft.description,
            Field::Date => &mut draft.date_text,
            Field::Time => &mut draft.time,
            Field::Location => &mut draft.location,
            Field::Address => &mut draft.address,
            Field::Category => &mut draft.category,
            Field::Cost => &mut draft.cost,
            Field::ImageUrl => &mut draft.image_url,
            Field::ExternalLink => &mut draft.external_link,
            Field::Coordinates => &mut draft.coordinates_text,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSchema {
    pub version: u32,
    pub columns: Vec<(String, Field)>,
}

impl Default for HeaderSchema {
    fn default() -> Self {
        Self::v1()
    }
}

impl HeaderSchema {
    /// Header names used by the published events sheet.
    pub fn v1() -> Self {
        let columns = [
            ("Название", Field::Title),
            ("Краткое описание", Field::Description),
            ("Дата", Field::Date),
            ("Время", Field::Time),
            ("Место", Field::Location),
            ("Адрес", Field::Address),
            ("Жанр", Field::Category),
            ("Стоимость", Field::Cost),
            ("Фото", Field::ImageUrl),
            ("Ссылка", Field::ExternalLink),
            ("Координаты", Field::Coordinates),
        ]
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect();
        Self {
            version: 1,
            columns,
        }
    }

    /// Replace the column name for the given fields, keeping the rest of v1.
    pub fn with_overrides(version: u32, overrides: &BTreeMap<Field, String>) -> Self {
        let mut schema = Self::v1();
        schema.version = version;
        for (name, field) in schema.columns.iter_mut() {
            if let Some(custom) = overrides.get(&*field) {
                let custom = custom.trim();
                if !custom.is_empty() {
                    *name = custom.to_string();
                }
            }
        }
        schema
    }

    pub fn column_for(&self, field: Field) -> Option<&str> {
        self.columns
            .iter()
            .find(|(_, f)| *f == field)
            .map(|(name, _)| name.as_str())
    }
}

fn header_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Pair each cell with its header. Missing trailing cells become `""`.
pub fn row_to_raw(header: &[String], row: &[String]) -> RawRow {
    header
        .iter()
        .enumerate()
        .map(|(i, h)| (header_key(h), row.get(i).cloned().unwrap_or_default()))
        .collect()
}

/// Map data rows to records, in source order.
///
/// `id` is the 1-based row position among all data rows, so ids skip over rows
/// dropped for a blank title.
pub fn map_rows(
    header: &[String],
    rows: &[Vec<String>],
    schema: &HeaderSchema,
    today: NaiveDate,
) -> Vec<EventRecord> {
    let mut out = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let id = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let raw = row_to_raw(header, row);

        let mut draft = RecordDraft::default();
        for (column, field) in &schema.columns {
            if let Some(value) = raw.get(&header_key(column)) {
                field.assign(&mut draft, value.trim().to_string());
            }
        }

        if draft.title.is_empty() {
            tracing::debug!(target: "feed", id, "row dropped: blank title");
            continue;
        }

        let parsed = parse_date_field(&draft.date_text, today);
        out.push(EventRecord {
            id,
            title: draft.title,
            description: draft.description,
            date: parsed.date,
            dates: parsed.dates,
            time: draft.time,
            location: draft.location,
            address: draft.address,
            category: draft.category,
            cost: draft.cost,
            image_url: draft.image_url,
            external_link: draft.external_link,
            coordinates: parse_coordinates(&draft.coordinates_text),
        });
    }

    out
}
