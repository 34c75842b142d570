//!
//! Date formatting and parsing using
//! [chrono](https://docs.rs/chrono/latest/chrono/).
//!
//! The wire format is ISO `YYYY-MM-DD`, display text is localized.
//!

use chrono::{Locale, NaiveDate, Weekday};

/// Localized display text for a date.
pub fn format_display(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%x", locale).to_string()
}

/// ISO date text, `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse ISO date text.
///
/// Anything unparsable is None, this never panics.
pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Week-start convention for a locale.
///
/// chrono's locale data carries no first-weekday field, so this
/// maps the common Sunday-start locales and defaults to Monday.
pub fn week_start(locale: Locale) -> Weekday {
    #[allow(clippy::match_like_matches_macro)]
    match locale {
        Locale::en_US
        | Locale::en_CA
        | Locale::en_PH
        | Locale::es_MX
        | Locale::es_PE
        | Locale::pt_BR
        | Locale::ja_JP
        | Locale::ko_KR
        | Locale::zh_TW
        | Locale::he_IL
        | Locale::hi_IN => Weekday::Sun,
        _ => Weekday::Mon,
    }
}
