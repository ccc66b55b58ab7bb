// File: ./src/extract/ingest.rs
use crate::extract::sources::RawAnnouncement;
use crate::extract::{EventExtractor, extract_or_default};
use crate::model::{EventRecord, PriorityTable};

/// Extracts and ranks a batch of announcements.
///
/// A failing announcement degrades to the default record; it never aborts the batch.
/// The output keeps the input order so callers decide when to sort.
pub fn ingest<E: EventExtractor + ?Sized>(
    extractor: &E,
    announcements: &[RawAnnouncement],
    table: &PriorityTable,
) -> Vec<EventRecord> {
    let total = announcements.len();
    let mut events: Vec<EventRecord> = announcements
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            log::info!(
                "Processing event {}/{} ({})",
                idx + 1,
                total,
                raw.origin.display()
            );
            extract_or_default(extractor, &raw.text, raw.image.as_deref())
        })
        .collect();

    table.assign(&mut events);
    events
}
