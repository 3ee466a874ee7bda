//! `DD/MM/YYYY` date parsing
//!
//! The text must match `d{1,2}/d{1,2}/d{4}` and name a real calendar day.
//! Day overflow (32/01, 31/04, 29/02 outside leap years) is caught by
//! building the date through chrono and comparing the components back.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digits.
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("date pattern compiles")
    })
}

/// Parses a `DD/MM/YYYY` date, returning `None` if the text is malformed or
/// not a real calendar date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let captures = date_pattern().captures(text)?;
    let day: u32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if date.day() != day || date.month() != month || date.year() != year {
        return None;
    }
    Some(date)
}

pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_some()
}
