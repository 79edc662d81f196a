//! Tests for conflict selection and the free-range sweep.

use std::collections::BTreeSet;

use meeting_core::conflict::conflicting_ranges;
use meeting_core::merger::total_minutes;
use meeting_core::{free_ranges, time_in_minutes, Event, TimeRange, END_OF_DAY, WHOLE_DAY};

const TIME_0800AM: u32 = time_in_minutes(8, 0);
const TIME_0830AM: u32 = time_in_minutes(8, 30);
const TIME_0900AM: u32 = time_in_minutes(9, 0);
const TIME_0930AM: u32 = time_in_minutes(9, 30);
const TIME_1000AM: u32 = time_in_minutes(10, 0);

fn people(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn event(name: &str, when: TimeRange, attendees: &[&str]) -> Event {
    Event::new(name, when, attendees.iter().copied())
}

#[test]
fn no_events_leave_the_whole_day() {
    let free = free_ranges(&[], &people(&["A"]), 60);
    assert_eq!(free, vec![WHOLE_DAY]);
}

#[test]
fn empty_attendee_set_never_conflicts() {
    let events = vec![event("Busy", WHOLE_DAY, &["A"])];
    let free = free_ranges(&events, &BTreeSet::new(), 30);
    assert_eq!(free, vec![WHOLE_DAY]);
}

#[test]
fn single_shared_attendee_is_enough_to_conflict() {
    let events = vec![event(
        "Offsite",
        TimeRange::from_start_duration(TIME_0900AM, 60),
        &["A", "X", "Y"],
    )];

    let conflicts = conflicting_ranges(&events, &people(&["A", "B"]));
    assert_eq!(conflicts, vec![TimeRange::from_start_duration(TIME_0900AM, 60)]);

    let unrelated = conflicting_ranges(&events, &people(&["B"]));
    assert!(unrelated.is_empty(), "B does not attend the offsite");
}

#[test]
fn conflicts_are_sorted_by_start() {
    let events = vec![
        event("Late", TimeRange::from_start_duration(TIME_1000AM, 30), &["A"]),
        event("Early", TimeRange::from_start_duration(TIME_0800AM, 30), &["A"]),
        event("Middle", TimeRange::from_start_duration(TIME_0900AM, 30), &["A"]),
    ];

    let conflicts = conflicting_ranges(&events, &people(&["A"]));
    let starts: Vec<u32> = conflicts.iter().map(TimeRange::start).collect();
    assert_eq!(starts, vec![TIME_0800AM, TIME_0900AM, TIME_1000AM]);
}

#[test]
fn event_splits_the_day() {
    let events = vec![event(
        "Event 1",
        TimeRange::from_start_duration(TIME_0830AM, 30),
        &["A"],
    )];

    let free = free_ranges(&events, &people(&["A"]), 30);
    assert_eq!(
        free,
        vec![
            TimeRange::from_start_end(0, TIME_0830AM, false),
            TimeRange::from_start_end(TIME_0900AM, END_OF_DAY, true),
        ]
    );
}

#[test]
fn overlapping_conflicts_are_absorbed() {
    // Events  :       |--A--|
    //                     |--B--|
    // Options : |--1--|         |--2--|
    let events = vec![
        event("Event 1", TimeRange::from_start_duration(TIME_0830AM, 60), &["A"]),
        event("Event 2", TimeRange::from_start_duration(TIME_0900AM, 60), &["B"]),
    ];

    let free = free_ranges(&events, &people(&["A", "B"]), 30);
    assert_eq!(
        free,
        vec![
            TimeRange::from_start_end(0, TIME_0830AM, false),
            TimeRange::from_start_end(TIME_1000AM, END_OF_DAY, true),
        ]
    );
}

#[test]
fn nested_conflicts_never_move_the_frontier_back() {
    // Events  :       |------A------|
    //                   |-B-|  |-C-|
    // Options : |--1--|             |--2--|
    let events = vec![
        event("Outer", TimeRange::from_start_duration(TIME_0830AM, 90), &["A"]),
        event("Inner 1", TimeRange::from_start_duration(TIME_0900AM, 10), &["B"]),
        event("Inner 2", TimeRange::from_start_duration(TIME_0930AM, 10), &["C"]),
    ];

    let free = free_ranges(&events, &people(&["A", "B", "C"]), 5);
    assert_eq!(
        free,
        vec![
            TimeRange::from_start_end(0, TIME_0830AM, false),
            TimeRange::from_start_end(TIME_1000AM, END_OF_DAY, true),
        ]
    );
}

#[test]
fn gaps_shorter_than_duration_are_dropped() {
    let events = vec![
        event("Event 1", TimeRange::from_start_end(0, TIME_0830AM, false), &["A"]),
        event("Event 2", TimeRange::from_start_end(TIME_0900AM, END_OF_DAY, true), &["A"]),
    ];

    assert_eq!(
        free_ranges(&events, &people(&["A"]), 30),
        vec![TimeRange::from_start_duration(TIME_0830AM, 30)],
        "exactly enough room"
    );
    assert!(
        free_ranges(&events, &people(&["A"]), 31).is_empty(),
        "one minute too long"
    );
}

#[test]
fn event_reaching_midnight_leaves_no_trailing_gap() {
    let events = vec![event(
        "Evening",
        TimeRange::from_start_end(TIME_1000AM, END_OF_DAY, true),
        &["A"],
    )];

    let free = free_ranges(&events, &people(&["A"]), 15);
    assert_eq!(free, vec![TimeRange::from_start_end(0, TIME_1000AM, false)]);
}

#[test]
fn total_minutes_sums_durations() {
    let ranges = vec![
        TimeRange::from_start_duration(0, 30),
        TimeRange::from_start_duration(100, 45),
    ];
    assert_eq!(total_minutes(&ranges), 75);
    assert_eq!(total_minutes(&[]), 0);
}

#[test]
fn zero_length_events_do_not_split_the_day() {
    let events = vec![event("Reminder", TimeRange::from_start_duration(TIME_0900AM, 0), &["A"])];
    assert_eq!(free_ranges(&events, &people(&["A"]), 30), vec![WHOLE_DAY]);
}
