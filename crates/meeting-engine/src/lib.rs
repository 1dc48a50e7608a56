//! # meeting-engine
//!
//! Find every window of a single day in which a meeting can be held.
//!
//! Callers hand over the day's events (each a [`TimeRange`] plus the people
//! attending) and a [`MeetingRequest`] naming mandatory and optional attendees
//! and a duration. The engine returns the windows where every mandatory
//! attendee is free, narrowed to windows that also suit every optional attendee
//! whenever at least one such window exists.
//!
//! The day is modelled as minute offsets `[0, 1440)`. There is no notion of
//! dates, timezones or recurrence.
//!
//! ```rust
//! use meeting_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_duration(540, 60).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30).unwrap();
//!
//! let windows = find_meeting_times(&events, &request);
//! assert_eq!(
//!     windows,
//!     vec![
//!         TimeRange::from_start_end(0, 540, false).unwrap(),
//!         TimeRange::from_start_end(600, 1440, false).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange` and day constants
//! - [`event`] — attendee-tagged calendar events
//! - [`request`] — the meeting being scheduled
//! - [`busy`] — busy intervals of an attendee group
//! - [`freebusy`] — free windows from busy intervals
//! - [`query`] — the meeting query with optional-attendee accommodation
//! - [`error`] — Error types

pub mod busy;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod query;
pub mod range;
pub mod request;

pub use busy::collect_busy_times;
pub use error::ScheduleError;
pub use event::Event;
pub use freebusy::{find_first_free_window, find_free_windows};
pub use query::{find_meeting_times, window_intersections, MeetingQuery};
pub use range::{TimeRange, DAY_MINUTES, END_OF_DAY, START_OF_DAY};
pub use request::MeetingRequest;
