// File: src/store.rs
// In-memory event collection: always ranked and sorted.
use crate::model::blocks::distinct_dates;
use crate::model::{Block, EventRecord, PriorityTable, blocks_for_date, group_into_blocks, sort_events};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<EventRecord>,
    table: PriorityTable,
}

impl EventStore {
    pub fn new(table: PriorityTable) -> Self {
        Self {
            events: Vec::new(),
            table,
        }
    }

    // Rank with the current table, then order. Cheap enough to redo on every change.
    fn refresh(&mut self) {
        self.table.assign(&mut self.events);
        sort_events(&mut self.events);
    }

    pub fn insert(&mut self, events: Vec<EventRecord>) {
        self.events.extend(events);
        self.refresh();
    }

    pub fn replace_all(&mut self, events: Vec<EventRecord>) {
        self.events = events;
        self.refresh();
    }

    pub fn set_table(&mut self, table: PriorityTable) {
        self.table = table;
        self.refresh();
    }

    pub fn remove(&mut self, id: &str) -> Option<EventRecord> {
        let idx = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(idx))
    }

    pub fn table(&self) -> &PriorityTable {
        &self.table
    }

    /// Ranked records in chronological order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn dates(&self) -> Vec<Option<NaiveDate>> {
        distinct_dates(&self.events)
    }

    pub fn blocks(&self) -> Vec<Block> {
        group_into_blocks(&self.events)
    }

    pub fn blocks_on(&self, date: Option<NaiveDate>) -> Vec<Block> {
        blocks_for_date(&self.events, date)
    }
}
