//! # meeting-engine
//!
//! Deterministic meeting-availability queries over a single day.
//!
//! Given the events already on attendees' calendars and a meeting request
//! (mandatory attendees, optional attendees, duration), the engine returns every
//! free range of the day long enough for the meeting. Optional attendees are
//! accommodated whenever at least one slot fits everybody.
//!
//! ```rust
//! use meeting_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_end(600, 660, false).unwrap(),
//!     ["A"],
//! )];
//! let request = MeetingRequest::new(["A"], 30);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(slots[0], TimeRange::from_start_end(0, 600, false).unwrap());
//! assert_eq!(slots[1], TimeRange::from_start_end(660, 1440, true).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — minute-of-day intervals and day constants
//! - [`event`] — `Event` and `MeetingRequest` inputs
//! - [`availability`] — the query algorithm
//! - [`wire`] — JSON query documents for front ends
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod event;
pub mod time_range;
pub mod wire;

pub use availability::{find_meeting_times, AvailabilityEngine};
pub use error::MeetingError;
pub use event::{Event, MeetingRequest};
pub use time_range::{Minute, TimeRange, END_OF_DAY, START_OF_DAY};
