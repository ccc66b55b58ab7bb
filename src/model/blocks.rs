// File: ./src/model/blocks.rs
//! Partitioning of an ordered event list into display blocks.
//!
//! A block is a maximal run of consecutive records that share a day and a
//! priority rank. Blocks are derived from the sorted list every time they are
//! needed and are never stored.
use crate::model::item::{EventRecord, NOT_SPECIFIED};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub rank: u32,
    pub date: Option<NaiveDate>,
    pub events: Vec<EventRecord>,
}

impl Block {
    fn seeded_by(ev: &EventRecord) -> Self {
        Self {
            rank: ev.effective_rank(),
            date: ev.date,
            events: vec![ev.clone()],
        }
    }

    fn accepts(&self, ev: &EventRecord) -> bool {
        self.rank == ev.effective_rank() && self.date == ev.date
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Side panel heading: the category of the first member.
    pub fn heading(&self) -> String {
        self.events
            .first()
            .and_then(|ev| ev.category.clone())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }
}

/// Single pass over sorted records; a new block starts whenever the rank or the day changes.
pub fn group_into_blocks(events: &[EventRecord]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for ev in events {
        match blocks.last_mut() {
            Some(current) if current.accepts(ev) => current.events.push(ev.clone()),
            _ => blocks.push(Block::seeded_by(ev)),
        }
    }
    blocks
}

/// Blocks of a single day. `None` selects the undated records.
pub fn blocks_for_date(events: &[EventRecord], date: Option<NaiveDate>) -> Vec<Block> {
    let day: Vec<EventRecord> = events.iter().filter(|e| e.date == date).cloned().collect();
    group_into_blocks(&day)
}

/// Distinct days present in an ordered list, undated last.
pub fn distinct_dates(events: &[EventRecord]) -> Vec<Option<NaiveDate>> {
    let mut dates: Vec<Option<NaiveDate>> = Vec::new();
    for ev in events {
        if !dates.contains(&ev.date) {
            dates.push(ev.date);
        }
    }
    dates.sort_by(|a, b| match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    dates
}
