// File: ./src/model/validate.rs
// Normalizes the loosely formatted field values returned by the extraction service.
use crate::model::item::{DEFAULT_DURATION_HOURS, NOT_SPECIFIED};
use chrono::{Datelike, NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

fn re_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://[^\s]+").unwrap())
}

fn re_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").unwrap())
}

fn is_sentinel(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case(NOT_SPECIFIED)
}

/// Parses a `YYYY-MM-DD` date and moves it into `target_year`.
///
/// Returns `None` when the value cannot be parsed, or when the same day does
/// not exist in the target year (Feb 29 into a common year).
pub fn validate_date(raw: &str, target_year: i32) -> Option<NaiveDate> {
    let raw = raw.trim();
    if is_sentinel(raw) {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    if date.year() == target_year {
        Some(date)
    } else {
        date.with_year(target_year)
    }
}

/// Parses a 24-hour `HH:MM` time, falling back to 12-hour with meridiem (`02:30 PM`).
pub fn validate_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if is_sentinel(raw) {
        return None;
    }
    ["%H:%M", "%I:%M %p", "%I:%M%p"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

/// Reads a duration such as `2 hours`, `1.5`, or `90 minutes` as hours.
/// Anything unparseable or non-positive yields the one hour default.
pub fn parse_duration_hours(raw: &str) -> f32 {
    let raw = raw.trim();
    if is_sentinel(raw) {
        return DEFAULT_DURATION_HOURS;
    }
    let Some(value) = re_number()
        .find(raw)
        .and_then(|m| m.as_str().parse::<f32>().ok())
    else {
        return DEFAULT_DURATION_HOURS;
    };

    let lower = raw.to_lowercase();
    let hours = if lower.contains("min") {
        value / 60.0
    } else {
        value
    };

    if hours > 0.0 {
        hours
    } else {
        DEFAULT_DURATION_HOURS
    }
}

/// First `http(s)://` link found in free text.
pub fn extract_link(text: &str) -> Option<String> {
    re_link().find(text).map(|m| m.as_str().to_string())
}

/// Normalizes a source value from the service, treating the sentinel as absent.
pub fn validate_link(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if is_sentinel(raw) {
        None
    } else {
        Some(raw.to_string())
    }
}
