//! Public entry point: when can this meeting happen?
//!
//! The required attendees decide feasibility. If they share any free time and the
//! request names optional attendees, the optimizer tries to fit as many of them in as
//! possible; otherwise, or if no optional attendee can be accommodated, the
//! required-only ranges are returned unchanged.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MeetingError, Result};
use crate::event::Event;
use crate::merger::{free_ranges, total_minutes};
use crate::optimizer::best_with_optional;
use crate::options::QueryOptions;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, WHOLE_DAY};

/// Outcome of a meeting query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingSlots {
    /// Candidate meeting times, sorted by start and non-overlapping.
    pub ranges: Vec<TimeRange>,
    /// Optional attendees who can join at every one of `ranges`.
    pub optional_attendees: BTreeSet<String>,
    /// Total length of `ranges`, in minutes.
    pub free_minutes: u32,
}

impl MeetingSlots {
    fn required_only(ranges: Vec<TimeRange>) -> Self {
        let free_minutes = total_minutes(&ranges);
        Self {
            ranges,
            optional_attendees: BTreeSet::new(),
            free_minutes,
        }
    }
}

/// Time ranges in which the meeting can be held, using default [`QueryOptions`].
///
/// # Errors
/// See [`find_meeting_slots`].
pub fn query(events: &[Event], request: &MeetingRequest) -> Result<Vec<TimeRange>> {
    find_meeting_slots(events, request, &QueryOptions::default()).map(|slots| slots.ranges)
}

/// Time ranges in which the meeting can be held, plus the optional attendees they suit.
///
/// A duration longer than a whole day yields an empty result without looking at the
/// events.
///
/// # Errors
/// - [`MeetingError::ZeroDuration`] if the request asks for zero minutes.
/// - [`MeetingError::TooManyOptionalAttendees`] if the optional set exceeds
///   `options.max_optional_attendees`.
/// - [`MeetingError::RangeOutOfDay`] if an event ends after midnight.
pub fn find_meeting_slots(
    events: &[Event],
    request: &MeetingRequest,
    options: &QueryOptions,
) -> Result<MeetingSlots> {
    let duration = request.duration();
    if duration > WHOLE_DAY.duration() {
        return Ok(MeetingSlots::default());
    }

    validate(events, request, options)?;

    let required = free_ranges(events, request.required_attendees(), duration);
    if required.is_empty() || request.optional_attendees().is_empty() {
        return Ok(MeetingSlots::required_only(required));
    }

    match best_with_optional(events, request, options.pruning) {
        Some(candidate) => {
            debug!(
                included = candidate.optional_attendees.len(),
                of = request.optional_attendees().len(),
                free_minutes = candidate.free_minutes,
                "Including optional attendees"
            );
            Ok(MeetingSlots {
                ranges: candidate.ranges,
                optional_attendees: candidate.optional_attendees,
                free_minutes: candidate.free_minutes,
            })
        }
        None => {
            debug!("No optional attendee fits, using required attendees only");
            Ok(MeetingSlots::required_only(required))
        }
    }
}

fn validate(events: &[Event], request: &MeetingRequest, options: &QueryOptions) -> Result<()> {
    if request.duration() == 0 {
        return Err(MeetingError::ZeroDuration);
    }

    if let Some(limit) = options.max_optional_attendees {
        let count = request.optional_attendees().len();
        if count > limit {
            return Err(MeetingError::TooManyOptionalAttendees { count, limit });
        }
    }

    if let Some(event) = events.iter().find(|event| !event.when.is_within_day()) {
        return Err(MeetingError::RangeOutOfDay {
            event: event.name.clone(),
            start: event.when.start(),
            end: event.when.end(),
        });
    }

    Ok(())
}
