//! Compute the free ranges of a day for a group of attendees.
//!
//! Conflicts are sorted by start and swept left to right with a frontier that only ever
//! moves forward. Overlapping and nested conflicts are absorbed by the frontier, so no
//! separate merge pass is needed.

use std::collections::BTreeSet;

use crate::conflict::conflicting_ranges;
use crate::event::Event;
use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Every maximal gap of at least `duration` minutes in which none of `attendees` is busy.
///
/// The result is sorted by start and stays within `[START_OF_DAY, END_OF_DAY)`. The
/// caller is responsible for rejecting durations longer than a day.
pub fn free_ranges(events: &[Event], attendees: &BTreeSet<String>, duration: u32) -> Vec<TimeRange> {
    let conflicts = conflicting_ranges(events, attendees);

    let mut free = Vec::new();
    let mut frontier = START_OF_DAY;

    for conflict in &conflicts {
        if conflict.start() >= frontier && conflict.start() - frontier >= duration {
            free.push(TimeRange::from_start_end(frontier, conflict.start(), false));
        }
        frontier = frontier.max(conflict.end());
    }

    // Trailing gap up to midnight.
    if frontier <= END_OF_DAY && END_OF_DAY - frontier >= duration {
        free.push(TimeRange::from_start_end(frontier, END_OF_DAY, true));
    }

    free
}

/// Sum of the durations of `ranges`, in minutes.
pub fn total_minutes(ranges: &[TimeRange]) -> u32 {
    ranges.iter().map(TimeRange::duration).sum()
}
