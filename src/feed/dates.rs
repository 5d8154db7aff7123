// src/feed/dates.rs
//! Free-text date field parsing.
//!
//! The sheet stores dates the way people type them: `"15 марта"`, or several
//! occurrences at once, `"1 января, 2 февраля"`. The year is never written, so
//! it always comes from the caller's `today`. An event on "3 января" entered in
//! late December therefore lands in the current year, not the next one.

use chrono::{Datelike, NaiveDate};

/// Genitive month names as they appear after a day number.
const MONTHS: [(&str, &str); 12] = [
    ("января", "01"),
    ("февраля", "02"),
    ("марта", "03"),
    ("апреля", "04"),
    ("мая", "05"),
    ("июня", "06"),
    ("июля", "07"),
    ("августа", "08"),
    ("сентября", "09"),
    ("октября", "10"),
    ("ноября", "11"),
    ("декабря", "12"),
];

const FALLBACK_MONTH: &str = "01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDates {
    /// Always equal to `dates[0]`.
    pub date: String,
    pub dates: Vec<String>,
}

/// Two-digit month for a month name; unknown names fall back to `"01"`.
pub fn month_number(name: &str) -> &'static str {
    let name = name.trim().to_lowercase();
    MONTHS
        .iter()
        .find(|(m, _)| *m == name)
        .map(|(_, n)| *n)
        .unwrap_or(FALLBACK_MONTH)
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a comma-separated list of `"<day> <month>"` segments into ISO dates.
///
/// `today` supplies the year for every segment and the single fallback entry
/// when nothing parses. Segments without a numeric day are skipped.
pub fn parse_date_field(text: &str, today: NaiveDate) -> ParsedDates {
    let year = today.year();
    let dates: Vec<String> = text
        .split(',')
        .filter_map(|segment| parse_segment(segment, year))
        .collect();

    if dates.is_empty() {
        let t = iso(today);
        return ParsedDates {
            date: t.clone(),
            dates: vec![t],
        };
    }

    ParsedDates {
        date: dates[0].clone(),
        dates,
    }
}

fn parse_segment(segment: &str, year: i32) -> Option<String> {
    let mut parts = segment.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    let month = parts.next().map(month_number).unwrap_or(FALLBACK_MONTH);
    Some(format!("{year:04}-{month}-{day:02}"))
}
