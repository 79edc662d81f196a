//! # meeting-core
//!
//! Find the times of day at which a meeting can be held.
//!
//! Given the day's events and a [`MeetingRequest`], the engine computes every free range
//! long enough for the meeting in which all required attendees are available, then tries
//! to fit in as many optional attendees as it can without losing all options.
//!
//! ```rust
//! use meeting_core::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new("Standup", TimeRange::from_start_duration(510, 30), ["ana"])];
//! let request = MeetingRequest::new(["ana"], 30);
//!
//! let ranges = query(&events, &request).unwrap();
//! assert_eq!(ranges.len(), 2);
//! assert_eq!(ranges[0].to_string(), "00:00-08:30");
//! assert_eq!(ranges[1].to_string(), "09:00-24:00");
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Minute-of-day intervals and day constants
//! - [`event`] — Named busy blocks with attendees
//! - [`request`] — Required/optional attendees and duration
//! - [`conflict`] — Select the events that block a group of attendees
//! - [`merger`] — Sweep conflicts into free ranges
//! - [`combinations`] — Lexicographic k-subset generator
//! - [`optimizer`] — Optional attendee subset search
//! - [`options`] — Query options (pruning policy, attendee cap)
//! - [`query`] — Public entry point
//! - [`error`] — Error types

pub mod combinations;
pub mod conflict;
pub mod error;
pub mod event;
pub mod merger;
pub mod optimizer;
pub mod options;
pub mod query;
pub mod request;
pub mod time_range;

pub use error::MeetingError;
pub use event::Event;
pub use merger::free_ranges;
pub use optimizer::{best_with_optional, Candidate};
pub use options::{PruningPolicy, QueryOptions};
pub use query::{find_meeting_slots, query, MeetingSlots};
pub use request::MeetingRequest;
pub use time_range::{time_in_minutes, TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
