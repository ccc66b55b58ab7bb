// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::model::display::{EventDisplay, format_date};
use crate::store::EventStore;
use crate::timeline::{Marker, TimelineAxis, TimelineRow, layout_blocks};
use chrono::NaiveDate;
use ratatui::layout::{Position, Rect};

/// Screen cell range that activates a marker when clicked.
/// Rebuilt on every draw. `markers` holds every marker drawn in the area,
/// in drawing order; repeated clicks cycle through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub row: usize,
    pub markers: Vec<usize>,
}

pub struct AppState {
    // Data
    pub store: EventStore,
    pub axis: TimelineAxis,
    pub dates: Vec<Option<NaiveDate>>,
    pub date_idx: usize,
    pub rows: Vec<TimelineRow>,

    // UI State
    pub selected_row: usize,
    pub selected_marker: usize,
    pub row_offset: usize,
    pub message: String,
    pub show_full_help: bool,
    pub hit_regions: Vec<HitRegion>,
}

impl AppState {
    pub fn new(store: EventStore, axis: TimelineAxis, start_date: Option<NaiveDate>) -> Self {
        let mut state = Self {
            store,
            axis,
            dates: Vec::new(),
            date_idx: 0,
            rows: Vec::new(),
            selected_row: 0,
            selected_marker: 0,
            row_offset: 0,
            message: String::new(),
            show_full_help: false,
            hit_regions: Vec::new(),
        };
        state.refresh_dates(start_date);
        state.message = format!("{} events loaded.", state.store.len());
        state
    }

    /// Recomputes the day list after the store changed, staying on `preferred` when it still exists.
    pub fn refresh_dates(&mut self, preferred: Option<NaiveDate>) {
        self.dates = self.store.dates();
        self.date_idx = preferred
            .and_then(|d| self.dates.iter().position(|x| *x == Some(d)))
            .unwrap_or(0);
        self.refresh_rows();
    }

    /// Rebuilds blocks and layout for the current day.
    pub fn refresh_rows(&mut self) {
        let blocks = self.store.blocks_on(self.current_date());
        self.rows = layout_blocks(&blocks, &self.axis);
        self.selected_row = self.selected_row.min(self.rows.len().saturating_sub(1));
        self.row_offset = self.row_offset.min(self.selected_row);
        self.clamp_marker();
    }

    fn clamp_marker(&mut self) {
        let count = self
            .rows
            .get(self.selected_row)
            .map(|r| r.markers.len())
            .unwrap_or(0);
        self.selected_marker = self.selected_marker.min(count.saturating_sub(1));
    }

    pub fn current_date(&self) -> Option<NaiveDate> {
        self.dates.get(self.date_idx).copied().flatten()
    }

    pub fn current_date_label(&self) -> String {
        if self.dates.is_empty() {
            return "No events".to_string();
        }
        format_date(self.current_date())
    }

    pub fn next_day(&mut self) {
        if self.date_idx + 1 < self.dates.len() {
            self.date_idx += 1;
            self.reset_selection();
        }
    }

    pub fn previous_day(&mut self) {
        if self.date_idx > 0 {
            self.date_idx -= 1;
            self.reset_selection();
        }
    }

    fn reset_selection(&mut self) {
        self.selected_row = 0;
        self.selected_marker = 0;
        self.row_offset = 0;
        self.refresh_rows();
    }

    pub fn next_row(&mut self) {
        if self.selected_row + 1 < self.rows.len() {
            self.selected_row += 1;
            self.selected_marker = 0;
        }
    }

    pub fn previous_row(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
            self.selected_marker = 0;
        }
    }

    pub fn next_marker(&mut self) {
        if let Some(row) = self.rows.get(self.selected_row)
            && self.selected_marker + 1 < row.markers.len()
        {
            self.selected_marker += 1;
        }
    }

    pub fn previous_marker(&mut self) {
        self.selected_marker = self.selected_marker.saturating_sub(1);
    }

    pub fn get_selected_marker(&self) -> Option<&Marker> {
        self.rows
            .get(self.selected_row)
            .and_then(|r| r.markers.get(self.selected_marker))
    }

    /// Footer line for the selected marker: category, time, duration and link.
    pub fn selected_detail(&self) -> Option<String> {
        let marker = self.get_selected_marker()?;
        let ev = self.store.get(&marker.event_id)?;
        Some(format!(
            "{} · {} · {} {}{} → {}",
            marker.label,
            ev.category_label(),
            ev.time_label(),
            ev.format_duration_short(),
            if marker.clamped { " (off scale)" } else { "" },
            ev.link_label()
        ))
    }

    /// Selects the marker under a screen cell, if any.
    /// Clicking a cell shared by several markers again moves to the next one.
    pub fn select_at(&mut self, column: u16, row: u16) -> bool {
        let pos = Position::new(column, row);
        let Some(hit) = self.hit_regions.iter().find(|h| h.area.contains(pos)) else {
            return false;
        };
        let Some(first) = hit.markers.first().copied() else {
            return false;
        };
        let next = if hit.row == self.selected_row {
            hit.markers
                .iter()
                .position(|m| *m == self.selected_marker)
                .map(|p| hit.markers[(p + 1) % hit.markers.len()])
                .unwrap_or(first)
        } else {
            first
        };
        self.selected_row = hit.row;
        self.selected_marker = next;
        true
    }

    /// Moves `row_offset` so the selected row fits, given each row's height.
    pub fn ensure_visible(&mut self, heights: &[u16], available: u16) {
        if heights.is_empty() {
            return;
        }
        if self.selected_row < self.row_offset {
            self.row_offset = self.selected_row;
        }
        while self.row_offset < self.selected_row {
            let used: u16 = heights[self.row_offset..=self.selected_row.min(heights.len() - 1)]
                .iter()
                .sum();
            if used <= available {
                break;
            }
            self.row_offset += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventRecord, PriorityTable};
    use chrono::NaiveTime;

    fn state() -> AppState {
        let d1 = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        let mut store = EventStore::new(PriorityTable::standard());
        store.insert(vec![
            EventRecord::new("Lecture", "CLASS").with_date(d1).with_time(t(9)),
            EventRecord::new("Seminar", "CLASS").with_date(d1).with_time(t(14)),
            EventRecord::new("Lab", "LAB").with_date(d1).with_time(t(10)),
            EventRecord::new("Gig", "MUSIC").with_date(d2).with_time(t(20)),
        ]);
        AppState::new(store, TimelineAxis::default(), None)
    }

    #[test]
    fn opens_on_first_day_and_walks_days() {
        let mut s = state();
        assert_eq!(s.current_date_label(), "2025-03-01");
        assert_eq!(s.rows.len(), 2);

        s.next_day();
        assert_eq!(s.current_date_label(), "2025-03-02");
        assert_eq!(s.rows.len(), 1);
        s.next_day();
        assert_eq!(s.date_idx, 1);
        s.previous_day();
        assert_eq!(s.date_idx, 0);
    }

    #[test]
    fn marker_selection_stays_in_row() {
        let mut s = state();
        s.next_marker();
        s.next_marker();
        assert_eq!(s.get_selected_marker().map(|m| m.index), Some(2));

        s.next_row();
        assert_eq!(s.selected_marker, 0);
        assert_eq!(s.get_selected_marker().map(|m| m.label.as_str()), Some("Event 1"));
        s.next_row();
        assert_eq!(s.selected_row, 1);
    }

    #[test]
    fn click_selects_marker_in_region() {
        let mut s = state();
        s.hit_regions.push(HitRegion {
            area: Rect::new(10, 4, 1, 1),
            row: 0,
            markers: vec![1],
        });
        assert!(!s.select_at(11, 4));
        assert!(s.select_at(10, 4));
        assert_eq!(s.selected_marker, 1);
    }

    #[test]
    fn detail_shows_duration_of_selected_event() {
        let s = state();
        assert_eq!(
            s.selected_detail().as_deref(),
            Some("Event 1 · CLASS · 09:00 [~1h] → Not specified")
        );

        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut late = EventRecord::new("Concert", "MUSIC")
            .with_date(day)
            .with_time(NaiveTime::from_hms_opt(23, 30, 0).unwrap())
            .with_link("https://gig.example.org");
        late.duration_hours = 1.5;
        let mut store = EventStore::new(PriorityTable::standard());
        store.insert(vec![late]);
        let s = AppState::new(store, TimelineAxis::default(), None);
        assert_eq!(
            s.selected_detail().as_deref(),
            Some("Event 1 · MUSIC · 23:30 [~1h30m] (off scale) → https://gig.example.org")
        );
    }

    #[test]
    fn repeated_clicks_cycle_stacked_markers() {
        let mut s = state();
        s.hit_regions.push(HitRegion {
            area: Rect::new(3, 2, 1, 1),
            row: 0,
            markers: vec![0, 1],
        });
        let mut seen = Vec::new();
        for _ in 0..3 {
            assert!(s.select_at(3, 2));
            seen.push(s.selected_marker);
        }
        assert_eq!(seen, vec![1, 0, 1]);
    }

    #[test]
    fn scrolls_to_selected_row() {
        let mut s = state();
        s.selected_row = 1;
        s.ensure_visible(&[6, 6], 8);
        assert_eq!(s.row_offset, 1);
        s.selected_row = 0;
        s.ensure_visible(&[6, 6], 8);
        assert_eq!(s.row_offset, 0);
    }

    #[test]
    fn preferred_date_is_kept() {
        let d2 = NaiveDate::from_ymd_opt(2025, 3, 2);
        let mut s = state();
        s.refresh_dates(d2);
        assert_eq!(s.current_date(), d2);
    }
}
