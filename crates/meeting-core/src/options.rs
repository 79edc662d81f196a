//! Tuning knobs for a meeting query.

use serde::{Deserialize, Serialize};

/// When the optional-attendee search gives up on larger subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruningPolicy {
    /// Count successful subsets across all sizes searched so far and stop once a size
    /// finishes with fewer than two successes in total.
    #[default]
    Cumulative,
    /// Stop as soon as a size produced no successful subset. Every subset of a feasible
    /// group is feasible too, so this settles on the same group as `Cumulative` while
    /// often evaluating fewer groups.
    PerLevel,
}

/// Options for [`find_meeting_slots`](crate::query::find_meeting_slots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub pruning: PruningPolicy,
    /// Reject requests with more optional attendees than this. The search is exponential
    /// in the optional count. `None` means no limit.
    pub max_optional_attendees: Option<usize>,
}

impl QueryOptions {
    pub fn with_pruning(mut self, pruning: PruningPolicy) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_max_optional_attendees(mut self, limit: usize) -> Self {
        self.max_optional_attendees = Some(limit);
        self
    }
}
