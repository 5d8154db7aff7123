// tests/feed_dates.rs
use chrono::NaiveDate;
use minsk_afisha::feed::parse_date_field;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn single_date_uses_reference_year() {
    let p = parse_date_field("15 марта", day(2026, 10, 18));
    assert_eq!(p.date, "2026-03-15");
    assert_eq!(p.dates, vec!["2026-03-15".to_string()]);
}

#[test]
fn multiple_dates_keep_order_and_first_is_date() {
    let p = parse_date_field("1 января, 2 февраля", day(2026, 10, 18));
    assert_eq!(
        p.dates,
        vec!["2026-01-01".to_string(), "2026-02-02".to_string()]
    );
    assert_eq!(p.date, p.dates[0]);
}

#[test]
fn empty_field_is_today() {
    let p = parse_date_field("", day(2026, 10, 18));
    assert_eq!(p.dates, vec!["2026-10-18".to_string()]);
    assert_eq!(p.date, "2026-10-18");
}

#[test]
fn unknown_month_falls_back_to_january() {
    let p = parse_date_field("9 мартобря", day(2026, 10, 18));
    assert_eq!(p.date, "2026-01-09");
}

#[test]
fn year_is_never_rolled_over() {
    // Entered on 30 Dec for an event in early January: stays in the current year.
    let p = parse_date_field("28 декабря, 3 января", day(2026, 12, 30));
    assert_eq!(
        p.dates,
        vec!["2026-12-28".to_string(), "2026-01-03".to_string()]
    );
}

#[test]
fn reference_year_is_an_input_not_the_system_clock() {
    let a = parse_date_field("20 мая", day(2031, 1, 1));
    let b = parse_date_field("20 мая", day(1999, 1, 1));
    assert_eq!(a.date, "2031-05-20");
    assert_eq!(b.date, "1999-05-20");
}

#[test]
fn day_is_zero_padded_and_spacing_tolerated() {
    let p = parse_date_field("  5   июня ,7 июля", day(2026, 1, 1));
    assert_eq!(
        p.dates,
        vec!["2026-06-05".to_string(), "2026-07-07".to_string()]
    );
}
