//! The meeting being scheduled.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Who must attend, who would ideally attend, and for how long.
///
/// Optional attendees may be appended after construction; the query only borrows the
/// request, so the set is fixed for the duration of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    #[serde(default)]
    required_attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    /// Requested length in minutes.
    duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(required_attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_attendees: required_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    /// Append one optional attendee. Adding someone twice has no effect.
    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.insert(attendee.into());
    }

    /// Builder form of [`add_optional_attendee`](Self::add_optional_attendee).
    pub fn with_optional_attendee(mut self, attendee: impl Into<String>) -> Self {
        self.add_optional_attendee(attendee);
        self
    }

    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }

    pub fn required_attendees(&self) -> &BTreeSet<String> {
        &self.required_attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }
}
