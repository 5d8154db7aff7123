// src/feed/filters.rs
//! Filtering, ordering and paging over normalized records.
//!
//! All comparisons on `date` are plain string comparisons. Zero-padded ISO
//! dates sort chronologically as strings, which is all the views need.

use chrono::NaiveDate;
use serde::Serialize;

use crate::feed::dates::iso;
use crate::feed::types::EventRecord;

/// Keep records whose `date` is today or later.
pub fn filter_upcoming(records: Vec<EventRecord>, today: NaiveDate) -> Vec<EventRecord> {
    let today = iso(today);
    records
        .into_iter()
        .filter(|r| r.date.as_str() >= today.as_str())
        .collect()
}

/// Case-insensitive substring match on `title`. An empty query keeps everything.
pub fn filter_by_title(records: Vec<EventRecord>, query: &str) -> Vec<EventRecord> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}

/// Keep records whose `date` equals `iso_date`. Empty `iso_date` is a pass-through.
pub fn filter_by_exact_date(records: Vec<EventRecord>, iso_date: &str) -> Vec<EventRecord> {
    if iso_date.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| r.date == iso_date).collect()
}

/// Keep records with any occurrence on `today_iso`.
pub fn filter_today(records: Vec<EventRecord>, today_iso: &str) -> Vec<EventRecord> {
    records
        .into_iter()
        .filter(|r| r.dates.iter().any(|d| d == today_iso))
        .collect()
}

/// Keep records that can be placed on a map.
pub fn filter_mappable(records: Vec<EventRecord>) -> Vec<EventRecord> {
    records
        .into_iter()
        .filter(|r| r.coordinates.is_some_and(|c| c.is_mappable()))
        .collect()
}

pub fn find_by_id(records: Vec<EventRecord>, id: u32) -> Option<EventRecord> {
    records.into_iter().find(|r| r.id == id)
}

/// Stable: records sharing a `date` keep their input order.
pub fn sort_by_date_ascending(mut records: Vec<EventRecord>) -> Vec<EventRecord> {
    records.sort_by(|a, b| a.date.cmp(&b.date));
    records
}

/// `ceil(count / page_size)`, never less than 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    count.div_ceil(size).max(1)
}

/// 1-based page window. Page 0 is read as page 1; a page past the end is empty.
pub fn paginate(records: Vec<EventRecord>, page_size: usize, page_number: usize) -> Vec<EventRecord> {
    let size = page_size.max(1);
    let page = page_number.max(1);
    let start = (page - 1).saturating_mul(size);
    records.into_iter().skip(start).take(size).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl Page<EventRecord> {
    pub fn slice(records: Vec<EventRecord>, page_size: usize, page_number: usize) -> Self {
        let page_size = page_size.max(1);
        let page = page_number.max(1);
        let total_items = records.len();
        Self {
            items: paginate(records, page_size, page),
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
        }
    }
}
