// File: ./src/extract/parser.rs
// Parses the numbered-line answer of the extraction service into an EventRecord.
use crate::model::EventRecord;
use crate::model::validate::{
    extract_link, parse_duration_hours, validate_date, validate_link, validate_time,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    Time,
    Duration,
    Type,
    Description,
    Source,
}

impl Field {
    fn from_ordinal(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Date),
            2 => Some(Self::Time),
            3 => Some(Self::Duration),
            4 => Some(Self::Type),
            5 => Some(Self::Description),
            6 => Some(Self::Source),
            _ => None,
        }
    }
}

/// Splits `"3. Duration: 2 hours"` into `(Duration, "2 hours")`.
///
/// Markdown emphasis around the line (`**1. Date:** 2025-03-01`) is tolerated.
/// Lines without an ordinal prefix or without a colon are ignored.
fn split_line(line: &str) -> Option<(Field, &str)> {
    let line = line.trim().trim_start_matches(['*', '-', ' ']);
    let (ordinal, rest) = line.split_once('.')?;
    let field = Field::from_ordinal(ordinal.trim().parse().ok()?)?;
    let (_, value) = rest.split_once(':')?;
    Some((field, value.trim().trim_matches('*').trim()))
}

/// Builds a record from the service response.
///
/// Starts from the all-default record (with the link found in `raw_text`)
/// and overwrites every field the response provides.
pub fn parse_response(response: &str, raw_text: &str, target_year: i32) -> EventRecord {
    let local_link = extract_link(raw_text);
    let mut ev = EventRecord::unspecified(local_link.clone());

    for (field, value) in response.lines().filter_map(split_line) {
        match field {
            Field::Date => ev.date = validate_date(value, target_year),
            Field::Time => ev.time = validate_time(value),
            Field::Duration => ev.duration_hours = parse_duration_hours(value),
            Field::Type => ev.set_category(value),
            Field::Description => {
                if !value.is_empty() {
                    ev.description = value.to_string();
                }
            }
            Field::Source => ev.source_link = validate_link(value).or_else(|| local_link.clone()),
        }
    }

    ev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_line_matches_exact_ordinals() {
        assert_eq!(
            split_line("1. Date: 2025-02-03"),
            Some((Field::Date, "2025-02-03"))
        );
        assert_eq!(split_line("**2. Time:** 14:30"), Some((Field::Time, "14:30")));
        assert_eq!(split_line("10. Extra: nope"), None);
        assert_eq!(split_line("Here is the info:"), None);
        assert_eq!(split_line("4. Type"), None);
    }

    #[test]
    fn time_value_keeps_its_own_colon() {
        assert_eq!(split_line("2. Time: 09:15"), Some((Field::Time, "09:15")));
    }
}
