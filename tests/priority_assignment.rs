// Tests for category to rank assignment.
use eventline::model::{EventRecord, KnownCategory, PriorityTable};
use std::collections::HashMap;
use strum::IntoEnumIterator;

#[test]
fn test_standard_table_order() {
    let table = PriorityTable::standard();
    assert_eq!(table.rank_for(Some("CLASS")), 0);
    assert_eq!(table.rank_for(Some("LAB")), 1);
    assert_eq!(table.rank_for(Some("TUT")), 2);
    assert_eq!(table.rank_for(Some("FACC")), 13);
    assert_eq!(table.rank_for(Some("RDV")), 14);
    assert_eq!(table.rank_for(Some("FEST")), 15);
}

#[test]
fn test_every_known_category_is_ranked() {
    let table = PriorityTable::standard();
    for (i, cat) in KnownCategory::iter().enumerate() {
        assert!(table.is_known(&cat.to_string()));
        assert_eq!(table.rank_for(Some(cat.to_string().as_str())), i as u32);
    }
}

#[test]
fn test_lookup_ignores_case_and_padding() {
    let table = PriorityTable::standard();
    assert_eq!(table.rank_for(Some(" music ")), 9);
}

#[test]
fn test_unknown_category_gets_fallback() {
    let table = PriorityTable::standard();
    assert_eq!(table.fallback_rank(), 16);
    assert_eq!(table.rank_for(Some("HACKATHON")), 16);
    assert_eq!(table.rank_for(None), 16);
    assert!(!table.is_known("HACKATHON"));
}

#[test]
fn test_assign_matches_table_for_every_record() {
    let table = PriorityTable::standard();
    let mut events = vec![
        EventRecord::new("Lecture", "CLASS"),
        EventRecord::new("Debate", "DEBSOC"),
        EventRecord::new("Jam", "MUSIC"),
        EventRecord::new("Mystery", "Not specified"),
        EventRecord::new("Hack night", "HACKATHON"),
    ];
    table.assign(&mut events);

    for ev in &events {
        assert_eq!(ev.priority_rank, Some(table.rank_for(ev.category.as_deref())));
    }
    assert_eq!(events[1].priority_rank, Some(3));
    assert_eq!(events[3].priority_rank, Some(16));
}

#[test]
fn test_assign_replaces_stale_rank() {
    let table = PriorityTable::standard();
    let mut ev = EventRecord::new("Quiz", "QC");
    ev.priority_rank = Some(99);
    let mut events = vec![ev];
    table.assign(&mut events);
    assert_eq!(events[0].priority_rank, Some(4));
}

#[test]
fn test_overrides_and_explicit_fallback() {
    let mut overrides = HashMap::new();
    overrides.insert("hackathon".to_string(), 1);
    overrides.insert("CLASS".to_string(), 20);

    let table = PriorityTable::standard().with_overrides(&overrides);
    assert_eq!(table.rank_for(Some("HACKATHON")), 1);
    assert_eq!(table.rank_for(Some("CLASS")), 20);
    assert_eq!(table.fallback_rank(), 21);

    let table = table.with_fallback(5);
    assert_eq!(table.rank_for(Some("UNLISTED")), 5);
}

#[test]
fn test_custom_table() {
    let table = PriorityTable::from_entries([("WORK", 0), ("GYM", 3)]);
    assert_eq!(table.fallback_rank(), 4);
    assert_eq!(table.entries(), vec![("WORK", 0), ("GYM", 3)]);
}
