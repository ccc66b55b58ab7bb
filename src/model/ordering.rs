// File: ./src/model/ordering.rs
// Chronological ordering within priority bands.
use crate::model::item::EventRecord;
use std::cmp::Ordering;

// Unspecified values sort after every real one, like the "Not specified"
// sentinel does after ISO strings.
fn last_if_none<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Composite key: date, then priority rank, then time of day.
pub fn compare_events(a: &EventRecord, b: &EventRecord) -> Ordering {
    last_if_none(&a.date, &b.date)
        .then_with(|| a.effective_rank().cmp(&b.effective_rank()))
        .then_with(|| last_if_none(&a.time, &b.time))
}

/// Stable in-place sort; records with equal keys keep their relative order.
pub fn sort_events(events: &mut [EventRecord]) {
    events.sort_by(compare_events);
}

pub fn is_sorted(events: &[EventRecord]) -> bool {
    events
        .windows(2)
        .all(|w| compare_events(&w[0], &w[1]) != Ordering::Greater)
}
