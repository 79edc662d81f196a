//! Search for the best group of optional attendees to add to a meeting.
//!
//! Subsets of the optional attendees are tried one size at a time, smallest first. A
//! subset succeeds when the required attendees plus that subset still share at least one
//! free range. Within a size the subset with the most free minutes wins (first one
//! enumerated on ties); a successful larger size always replaces the winner of a smaller
//! one, so more attendees beats more free time.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::combinations::{self, Combinations};
use crate::event::Event;
use crate::merger::{free_ranges, total_minutes};
use crate::options::PruningPolicy;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// A successful group of optional attendees and the free ranges it leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub optional_attendees: BTreeSet<String>,
    pub ranges: Vec<TimeRange>,
    pub free_minutes: u32,
}

/// Find the best achievable set of free ranges when optional attendees are included.
///
/// Returns `None` when no non-empty group of optional attendees leaves any free range,
/// in which case the caller should fall back to the required-only result.
pub fn best_with_optional(
    events: &[Event],
    request: &MeetingRequest,
    pruning: PruningPolicy,
) -> Option<Candidate> {
    let optional: Vec<&String> = request.optional_attendees().iter().collect();
    let n = optional.len();

    let mut best: Option<Candidate> = None;
    let mut total_successes = 0usize;

    for size in 1..=n {
        let mut size_best: Option<Candidate> = None;
        let mut size_successes = 0usize;

        debug!(
            size,
            combinations = combinations::count(n, size),
            "Trying optional attendee groups"
        );

        for indices in Combinations::new(n, size) {
            let group: BTreeSet<String> = indices.iter().map(|&i| optional[i].clone()).collect();

            let mut attendees = request.required_attendees().clone();
            attendees.extend(group.iter().cloned());

            let ranges = free_ranges(events, &attendees, request.duration());
            if ranges.is_empty() {
                trace!(?group, "No shared free time");
                continue;
            }

            size_successes += 1;
            let free_minutes = total_minutes(&ranges);
            trace!(?group, free_minutes, "Group has shared free time");

            if size_best
                .as_ref()
                .is_none_or(|current| free_minutes > current.free_minutes)
            {
                size_best = Some(Candidate {
                    optional_attendees: group,
                    ranges,
                    free_minutes,
                });
            }
        }

        total_successes += size_successes;

        if let Some(candidate) = size_best {
            debug!(
                size,
                successes = size_successes,
                free_minutes = candidate.free_minutes,
                "Best group for this size"
            );
            best = Some(candidate);
        }

        let stop = match pruning {
            PruningPolicy::Cumulative => total_successes < 2,
            PruningPolicy::PerLevel => size_successes == 0,
        };
        if stop {
            debug!(size, total_successes, ?pruning, "Stopping optional attendee search");
            break;
        }
    }

    best
}
