//! Error types for meeting-engine construction and validation.

use thiserror::Error;

/// Errors raised when building a [`TimeRange`](crate::TimeRange) or
/// [`MeetingRequest`](crate::MeetingRequest) from out-of-contract values.
///
/// The scheduling query itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Range start must not be negative: {0}")]
    NegativeStart(i32),

    #[error("Duration must not be negative: {0}")]
    NegativeDuration(i32),

    /// The range would run past minute 1440 of the day.
    #[error("Range [{start}, {end}) ends past the end of the day")]
    PastEndOfDay { start: i32, end: i32 },

    #[error("Range end {end} comes before start {start}")]
    InvertedBounds { start: i32, end: i32 },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
