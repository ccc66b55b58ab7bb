// File: ./src/model/display.rs
use crate::model::item::{EventRecord, NOT_SPECIFIED};
use chrono::NaiveDate;

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

pub trait EventDisplay {
    fn time_label(&self) -> String;
    fn category_label(&self) -> &str;
    fn link_label(&self) -> &str;
    fn format_duration_short(&self) -> String;
    fn to_panel_entry(&self) -> String;
}

impl EventDisplay for EventRecord {
    fn time_label(&self) -> String {
        self.time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }

    fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    fn link_label(&self) -> &str {
        self.source_link.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    fn format_duration_short(&self) -> String {
        let mins = (self.duration_hours * 60.0).round() as u32;
        if mins >= 60 && mins % 60 == 0 {
            format!("[~{}h]", mins / 60)
        } else if mins >= 60 {
            format!("[~{}h{:02}m]", mins / 60, mins % 60)
        } else {
            format!("[~{}m]", mins)
        }
    }

    /// "description — link", the format used by the side panel.
    fn to_panel_entry(&self) -> String {
        format!("{} — {}", self.description, self.link_label())
    }
}
