// File: ./src/model/item.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text shown (and accepted from the extraction service) for any field that has no value.
pub const NOT_SPECIFIED: &str = "Not specified";

pub const DEFAULT_DURATION_HOURS: f32 = 1.0;

fn default_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_duration() -> f32 {
    DEFAULT_DURATION_HOURS
}

fn default_description() -> String {
    NOT_SPECIFIED.to_string()
}

/// One calendar-worthy occurrence extracted from an announcement.
///
/// `None` in `date`, `time`, `category` and `source_link` is the "unspecified" state.
/// `priority_rank` is `None` only until the record has gone through a `PriorityTable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(default = "default_duration")]
    pub duration_hours: f32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority_rank: Option<u32>,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub source_link: Option<String>,
}

impl Default for EventRecord {
    fn default() -> Self {
        Self {
            id: default_id(),
            date: None,
            time: None,
            duration_hours: DEFAULT_DURATION_HOURS,
            category: None,
            priority_rank: None,
            description: default_description(),
            source_link: None,
        }
    }
}

impl EventRecord {
    /// The all-default record used when extraction yields nothing.
    /// Only the link found locally in the raw text survives.
    pub fn unspecified(source_link: Option<String>) -> Self {
        Self {
            source_link,
            ..Self::default()
        }
    }

    /// Convenience constructor used by callers that already have structured fields.
    pub fn new(description: &str, category: &str) -> Self {
        let mut ev = Self {
            description: description.to_string(),
            ..Self::default()
        };
        ev.set_category(category);
        ev
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.source_link = Some(link.to_string());
        self
    }

    /// Stores a category label in its canonical upper-case form.
    /// Empty labels and the `Not specified` sentinel clear the category.
    pub fn set_category(&mut self, raw: &str) {
        self.category = normalize_category(raw);
    }

    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// Rank used for ordering. Records that were never ranked sort last.
    pub fn effective_rank(&self) -> u32 {
        self.priority_rank.unwrap_or(u32::MAX)
    }
}

/// Upper-cases and trims a category label, mapping blanks and the sentinel to `None`.
pub fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_SPECIFIED) {
        return None;
    }
    Some(trimmed.to_uppercase())
}
