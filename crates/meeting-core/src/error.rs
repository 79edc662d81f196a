//! Error types for meeting-core operations.

use thiserror::Error;

/// Caller contract violations rejected before any free-range computation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    /// A meeting must last at least one minute.
    #[error("Meeting duration must be at least one minute")]
    ZeroDuration,

    /// An event's time range ends after midnight.
    #[error("Event '{event}' spans {start}..{end}, outside the day [0, 1440)")]
    RangeOutOfDay { event: String, start: u32, end: u32 },

    /// A range whose end precedes its start.
    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidRange { start: u32, end: u32 },

    /// More optional attendees than the configured search cap allows.
    #[error("{count} optional attendees exceed the limit of {limit}")]
    TooManyOptionalAttendees { count: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, MeetingError>;
