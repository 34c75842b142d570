use chrono::{Locale, NaiveDate, Weekday};
use rat_datepicker::format::{format_display, format_iso, parse_iso, week_start};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_iso() {
    assert_eq!(format_iso(d(2024, 2, 29)), "2024-02-29");
    assert_eq!(format_iso(d(2024, 1, 5)), "2024-01-05");

    assert_eq!(parse_iso("2024-02-29"), Some(d(2024, 2, 29)));
    assert_eq!(parse_iso("2024-01-05"), Some(d(2024, 1, 5)));

    assert_eq!(parse_iso(format_iso(d(1999, 12, 31)).as_str()), Some(d(1999, 12, 31)));
}

#[test]
fn test_iso_invalid() {
    assert_eq!(parse_iso(""), None);
    assert_eq!(parse_iso("garbage"), None);
    assert_eq!(parse_iso("2024-13-01"), None);
    assert_eq!(parse_iso("2024-02-30"), None);
    // not a leap year
    assert_eq!(parse_iso("2023-02-29"), None);
    assert_eq!(parse_iso("29.02.2024"), None);
}

#[test]
fn test_display() {
    assert_eq!(format_display(d(2024, 2, 29), Locale::en_US), "02/29/2024");
    assert_eq!(format_display(d(2024, 2, 29), Locale::de_DE), "29.02.2024");
}

#[test]
fn test_week_start() {
    assert_eq!(week_start(Locale::en_US), Weekday::Sun);
    assert_eq!(week_start(Locale::pt_BR), Weekday::Sun);
    assert_eq!(week_start(Locale::de_AT), Weekday::Mon);
    assert_eq!(week_start(Locale::fr_FR), Weekday::Mon);
    assert_eq!(week_start(Locale::en_GB), Weekday::Mon);
}
