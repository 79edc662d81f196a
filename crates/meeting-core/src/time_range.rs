//! Minute-of-day intervals.
//!
//! A [`TimeRange`] is stored half-open as `[start, end)` in minutes since midnight.
//! The "inclusive" construction mode exists so a caller can say "until the last minute
//! of the day" without knowing the exclusive encoding: an inclusive end is bumped by one
//! minute, saturating at [`END_OF_DAY`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MeetingError;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive end of the day (midnight).
pub const END_OF_DAY: u32 = 24 * 60;

/// The full day, `[0, 1440)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: END_OF_DAY,
};

/// Convert a wall-clock time to minutes since midnight.
pub const fn time_in_minutes(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

/// An immutable interval of minutes within a day.
///
/// Equality and ordering use `(start, end)`, so two ranges built through different
/// constructors compare equal when they cover the same minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RangeSpan", into = "RangeSpan")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// A range starting at `start` and lasting `duration` minutes.
    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        Self {
            start,
            end: start.saturating_add(duration),
        }
    }

    /// A range from `start` to `end`.
    ///
    /// With `inclusive` set, the minute `end` is part of the range. An inclusive end at or
    /// past the last minute of the day yields a range reaching [`END_OF_DAY`].
    /// An `end` before `start` produces an empty range at `start`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Self {
        let end = if inclusive && end < END_OF_DAY {
            end + 1
        } else {
            end
        };
        Self {
            start,
            end: end.max(start),
        }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end.
    pub const fn end(&self) -> u32 {
        self.end
    }

    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the range runs up to midnight.
    pub const fn reaches_end_of_day(&self) -> bool {
        self.end >= END_OF_DAY
    }

    /// Whether the range lies within `[START_OF_DAY, END_OF_DAY]`.
    pub const fn is_within_day(&self) -> bool {
        self.end <= END_OF_DAY
    }

    /// `start <= minute < end`.
    pub const fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two ranges share a point: one of them contains the other's start.
    ///
    /// Ranges that merely touch (`a.end == b.start`) do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains_minute(other.start) || other.contains_minute(self.start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Wire shape of a [`TimeRange`]: explicit start and exclusive end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RangeSpan {
    start: u32,
    end: u32,
}

impl TryFrom<RangeSpan> for TimeRange {
    type Error = MeetingError;

    fn try_from(span: RangeSpan) -> Result<Self, Self::Error> {
        if span.end < span.start {
            return Err(MeetingError::InvalidRange {
                start: span.start,
                end: span.end,
            });
        }
        Ok(TimeRange::from_start_end(span.start, span.end, false))
    }
}

impl From<TimeRange> for RangeSpan {
    fn from(range: TimeRange) -> Self {
        RangeSpan {
            start: range.start,
            end: range.end,
        }
    }
}
