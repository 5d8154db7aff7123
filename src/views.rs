// src/views.rs
//! One pipeline for every page: filter → sort → (optionally) paginate.
//! Each view only says which predicate it wants.

use chrono::NaiveDate;

use crate::feed::dates::iso;
use crate::feed::filters::{
    filter_by_exact_date, filter_by_title, filter_mappable, filter_today, filter_upcoming,
    sort_by_date_ascending, Page,
};
use crate::feed::types::EventRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFilter {
    /// Events page: upcoming, title search, optional exact date.
    Listing { query: String, date: String },
    /// Landing page and plain upcoming list.
    Upcoming,
    /// Anything with an occurrence today, including multi-date events that started earlier.
    Today,
    /// Upcoming events with usable coordinates.
    Map,
}

/// Apply the view's predicate, then sort by date.
pub fn select(records: Vec<EventRecord>, filter: &ViewFilter, today: NaiveDate) -> Vec<EventRecord> {
    let filtered = match filter {
        ViewFilter::Listing { query, date } => {
            let r = filter_upcoming(records, today);
            let r = filter_by_title(r, query.trim());
            filter_by_exact_date(r, date.trim())
        }
        ViewFilter::Upcoming => filter_upcoming(records, today),
        ViewFilter::Today => filter_today(records, &iso(today)),
        ViewFilter::Map => filter_mappable(filter_upcoming(records, today)),
    };
    sort_by_date_ascending(filtered)
}

pub fn select_page(
    records: Vec<EventRecord>,
    filter: &ViewFilter,
    today: NaiveDate,
    page_size: usize,
    page_number: usize,
) -> Page<EventRecord> {
    Page::slice(select(records, filter, today), page_size, page_number)
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapMarker {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
}

/// Markers for records that already passed `ViewFilter::Map`.
pub fn map_markers(records: &[EventRecord]) -> Vec<MapMarker> {
    records
        .iter()
        .filter_map(|r| {
            let c = r.coordinates?;
            Some(MapMarker {
                id: r.id,
                title: r.title.clone(),
                date: r.date.clone(),
                time: r.time.clone(),
                location: r.location.clone(),
                lat: c.lat,
                lng: c.lng,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::Coordinates;

    fn rec(id: u32, title: &str, dates: &[&str]) -> EventRecord {
        EventRecord {
            id,
            title: title.into(),
            description: String::new(),
            date: dates[0].into(),
            dates: dates.iter().map(|d| d.to_string()).collect(),
            time: String::new(),
            location: String::new(),
            address: String::new(),
            category: String::new(),
            cost: String::new(),
            image_url: String::new(),
            external_link: String::new(),
            coordinates: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
    }

    #[test]
    fn listing_combines_upcoming_search_and_date() {
        let records = vec![
            rec(1, "Концерт органной музыки", &["2026-05-12"]),
            rec(2, "Концерт джаза", &["2026-05-01"]),
            rec(3, "Выставка", &["2026-05-12"]),
            rec(4, "Концерт хора", &["2026-05-11"]),
        ];
        let filter = ViewFilter::Listing {
            query: "концерт".into(),
            date: String::new(),
        };
        let ids: Vec<u32> = select(records.clone(), &filter, today())
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![4, 1]);

        let filter = ViewFilter::Listing {
            query: String::new(),
            date: "2026-05-12".into(),
        };
        let ids: Vec<u32> = select(records, &filter, today()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn today_view_sees_past_start_date() {
        let records = vec![rec(7, "Фестиваль", &["2026-05-08", "2026-05-10"])];
        assert_eq!(select(records, &ViewFilter::Today, today()).len(), 1);
    }

    #[test]
    fn map_view_emits_markers_only_for_mappable() {
        let mut a = rec(1, "a", &["2026-05-20"]);
        a.coordinates = Some(Coordinates { lat: 53.898, lng: 27.549 });
        let mut b = rec(2, "b", &["2026-05-20"]);
        b.coordinates = Some(Coordinates { lat: 0.0, lng: 0.0 });
        let selected = select(vec![a, b], &ViewFilter::Map, today());
        let markers = map_markers(&selected);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].lat, 53.898);
    }
}
