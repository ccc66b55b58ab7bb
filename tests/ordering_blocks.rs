// Tests for the (date, rank, time) ordering and block grouping.
use chrono::{NaiveDate, NaiveTime};
use eventline::model::blocks::distinct_dates;
use eventline::model::ordering::is_sorted;
use eventline::model::{
    EventRecord, PriorityTable, blocks_for_date, group_into_blocks, sort_events,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn ranked(mut events: Vec<EventRecord>) -> Vec<EventRecord> {
    PriorityTable::standard().assign(&mut events);
    events
}

fn descriptions(events: &[EventRecord]) -> Vec<&str> {
    events.iter().map(|e| e.description.as_str()).collect()
}

#[test]
fn test_same_day_class_before_lab() {
    let mut events = ranked(vec![
        EventRecord::new("Lab session", "LAB").with_date(day(1)).with_time(at(9, 30)),
        EventRecord::new("Late lecture", "CLASS").with_date(day(1)).with_time(at(10, 0)),
        EventRecord::new("Early lecture", "CLASS").with_date(day(1)).with_time(at(9, 0)),
    ]);
    sort_events(&mut events);

    assert_eq!(
        descriptions(&events),
        vec!["Early lecture", "Late lecture", "Lab session"]
    );

    let blocks = group_into_blocks(&events);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].len(), 2);
    assert_eq!(blocks[0].rank, 0);
    assert_eq!(blocks[0].heading(), "CLASS");
    assert_eq!(blocks[1].len(), 1);
    assert_eq!(blocks[1].rank, 1);
    assert_eq!(blocks[1].heading(), "LAB");
}

#[test]
fn test_date_dominates_rank() {
    let mut events = ranked(vec![
        EventRecord::new("Fest", "FEST").with_date(day(1)).with_time(at(20, 0)),
        EventRecord::new("Lecture", "CLASS").with_date(day(2)).with_time(at(8, 0)),
    ]);
    sort_events(&mut events);
    assert_eq!(descriptions(&events), vec!["Fest", "Lecture"]);
}

#[test]
fn test_undated_and_untimed_sort_last() {
    let mut events = ranked(vec![
        EventRecord::new("Undated lecture", "CLASS"),
        EventRecord::new("Untimed lecture", "CLASS").with_date(day(4)),
        EventRecord::new("Timed lecture", "CLASS").with_date(day(4)).with_time(at(11, 0)),
    ]);
    sort_events(&mut events);
    assert_eq!(
        descriptions(&events),
        vec!["Timed lecture", "Untimed lecture", "Undated lecture"]
    );
}

#[test]
fn test_sort_is_stable_and_idempotent() {
    let mut events = ranked(vec![
        EventRecord::new("Second", "MUSIC").with_date(day(5)).with_time(at(18, 0)),
        EventRecord::new("First", "QC").with_date(day(5)).with_time(at(12, 0)),
        EventRecord::new("Tie A", "DRAMA").with_date(day(5)).with_time(at(15, 0)),
        EventRecord::new("Tie B", "DRAMA").with_date(day(5)).with_time(at(15, 0)),
    ]);
    sort_events(&mut events);
    let once = events.clone();
    sort_events(&mut events);

    assert_eq!(once, events);
    assert!(is_sorted(&events));
    assert_eq!(descriptions(&events), vec!["First", "Tie A", "Tie B", "Second"]);
}

#[test]
fn test_blocks_partition_sorted_list() {
    let mut events = ranked(vec![
        EventRecord::new("a", "CLASS").with_date(day(1)).with_time(at(9, 0)),
        EventRecord::new("b", "LAB").with_date(day(1)).with_time(at(9, 0)),
        EventRecord::new("c", "LAB").with_date(day(1)).with_time(at(13, 0)),
        EventRecord::new("d", "CLASS").with_date(day(2)).with_time(at(9, 0)),
        EventRecord::new("e", "HACKATHON").with_date(day(2)).with_time(at(17, 0)),
        EventRecord::new("f", "Not specified"),
    ]);
    sort_events(&mut events);
    let blocks = group_into_blocks(&events);

    let flattened: Vec<EventRecord> = blocks.iter().flat_map(|b| b.events.clone()).collect();
    assert_eq!(flattened, events);

    for block in &blocks {
        assert!(!block.is_empty());
        for ev in &block.events {
            assert_eq!(ev.priority_rank, Some(block.rank));
            assert_eq!(ev.date, block.date);
        }
    }
    // Adjacent blocks always differ in day or rank.
    for pair in blocks.windows(2) {
        assert!(pair[0].rank != pair[1].rank || pair[0].date != pair[1].date);
    }
    assert_eq!(blocks.len(), 5);
}

#[test]
fn test_same_rank_on_two_days_is_two_blocks() {
    let mut events = ranked(vec![
        EventRecord::new("Mon", "TUT").with_date(day(3)).with_time(at(10, 0)),
        EventRecord::new("Tue", "TUT").with_date(day(4)).with_time(at(10, 0)),
    ]);
    sort_events(&mut events);
    let blocks = group_into_blocks(&events);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].date, Some(day(3)));
    assert_eq!(blocks[1].date, Some(day(4)));
}

#[test]
fn test_unknown_categories_share_fallback_block() {
    let mut events = ranked(vec![
        EventRecord::new("x", "HACKATHON").with_date(day(6)).with_time(at(10, 0)),
        EventRecord::new("y", "PICNIC").with_date(day(6)).with_time(at(12, 0)),
    ]);
    sort_events(&mut events);
    let blocks = group_into_blocks(&events);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].rank, 16);
    // Members share a rank, the heading comes from the first one.
    assert_eq!(blocks[0].heading(), "HACKATHON");
    assert_eq!(blocks[0].events[1].category.as_deref(), Some("PICNIC"));
}

#[test]
fn test_blocks_for_one_day() {
    let mut events = ranked(vec![
        EventRecord::new("a", "CLASS").with_date(day(1)).with_time(at(9, 0)),
        EventRecord::new("b", "LAB").with_date(day(2)).with_time(at(9, 0)),
        EventRecord::new("c", "QC"),
    ]);
    sort_events(&mut events);

    let second = blocks_for_date(&events, Some(day(2)));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].events[0].description, "b");

    let undated = blocks_for_date(&events, None);
    assert_eq!(undated.len(), 1);
    assert_eq!(undated[0].heading(), "QC");

    let mut blank = vec![EventRecord::new("?", "Not specified")];
    PriorityTable::standard().assign(&mut blank);
    assert_eq!(group_into_blocks(&blank)[0].heading(), "Not specified");

    assert!(blocks_for_date(&events, Some(day(9))).is_empty());
    assert_eq!(distinct_dates(&events), vec![Some(day(1)), Some(day(2)), None]);
}

#[test]
fn test_empty_input() {
    let mut events: Vec<EventRecord> = Vec::new();
    sort_events(&mut events);
    assert!(group_into_blocks(&events).is_empty());
}
