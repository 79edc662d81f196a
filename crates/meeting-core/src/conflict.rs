//! Select the events that block a given group of attendees.
//!
//! An event conflicts as soon as one of its attendees is in the group; full membership
//! is not required. Zero-length events block nothing.

use std::collections::BTreeSet;

use tracing::trace;

use crate::event::Event;
use crate::time_range::TimeRange;

/// Time ranges of every event attended by at least one of `attendees`, sorted by start.
///
/// The sort is stable, so events starting at the same minute keep their input order.
pub fn conflicting_ranges(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    if attendees.is_empty() {
        return Vec::new();
    }

    let mut conflicts: Vec<TimeRange> = events
        .iter()
        .filter(|event| event.when.duration() > 0 && event.involves_any(attendees))
        .inspect(|event| trace!(event = %event.name, when = %event.when, "Conflicting event"))
        .map(|event| event.when)
        .collect();

    conflicts.sort_by_key(TimeRange::start);
    conflicts
}
