//! Half-open minute ranges within a single day.
//!
//! A [`TimeRange`] covers `[start, start + duration)` where both ends are
//! minute offsets from midnight. Ranges are validated on construction and never
//! mutated afterwards; every derived range is built fresh.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// First minute of the day.
pub const START_OF_DAY: i32 = 0;

/// Last minute of the day (23:59), inclusive.
pub const END_OF_DAY: i32 = 1439;

/// Number of minutes in the modelled day.
pub const DAY_MINUTES: i32 = 1440;

/// Convert a wall-clock `hours:minutes` pair into a minute offset.
pub fn minutes_of_day(hours: i32, minutes: i32) -> i32 {
    hours * 60 + minutes
}

/// An immutable half-open interval of day-minutes.
///
/// Equality compares start and duration. The derived ordering sorts by start
/// first and breaks ties on duration, so sorting a `Vec<TimeRange>` orders it
/// by start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: i32,
    duration: i32,
}

/// Unvalidated wire shape; converted through [`TimeRange::from_start_duration`].
#[derive(Deserialize)]
struct RawRange {
    start: i32,
    duration: i32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = ScheduleError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::from_start_duration(raw.start, raw.duration)
    }
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        duration: DAY_MINUTES,
    };

    /// Build a range from a start minute and a length in minutes.
    ///
    /// Rejects a negative start or duration and any range ending after
    /// minute 1440.
    pub fn from_start_duration(start: i32, duration: i32) -> Result<Self> {
        if start < 0 {
            return Err(ScheduleError::NegativeStart(start));
        }
        if duration < 0 {
            return Err(ScheduleError::NegativeDuration(duration));
        }
        match start.checked_add(duration) {
            Some(end) if end <= DAY_MINUTES => Ok(Self { start, duration }),
            _ => Err(ScheduleError::PastEndOfDay {
                start,
                end: start.saturating_add(duration),
            }),
        }
    }

    /// Build a range from two endpoints.
    ///
    /// With `inclusive` set, `end` is the last minute covered by the range, so
    /// the exclusive bound becomes `end + 1`. `from_start_end(0, END_OF_DAY, true)`
    /// is [`TimeRange::WHOLE_DAY`].
    pub fn from_start_end(start: i32, end: i32, inclusive: bool) -> Result<Self> {
        if start < 0 {
            return Err(ScheduleError::NegativeStart(start));
        }
        let end = if inclusive { end.saturating_add(1) } else { end };
        if end < start {
            return Err(ScheduleError::InvertedBounds { start, end });
        }
        Self::from_start_duration(start, end - start)
    }

    /// Build `[start, end)` from bounds already known to lie within the day.
    pub(crate) fn between(start: i32, end: i32) -> Self {
        debug_assert!(
            (START_OF_DAY..=end).contains(&start) && end <= DAY_MINUTES,
            "bounds [{start}, {end}) outside the day"
        );
        Self {
            start,
            duration: end - start,
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Exclusive end minute.
    pub fn end(&self) -> i32 {
        self.start + self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.duration == 0
    }

    /// True if `minute` falls inside `[start, end)`.
    pub fn contains_minute(&self, minute: i32) -> bool {
        self.start <= minute && minute < self.end()
    }

    /// True if the two ranges share at least one minute.
    ///
    /// Adjacent ranges (`a.end() == b.start()`) do not overlap, and an empty
    /// range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.contains_minute(other.start) || other.contains_minute(self.start)
    }

    /// True if `other` lies entirely within this range.
    ///
    /// An empty `other` counts as contained when its start lies within
    /// `[start, end]`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if other.is_empty() {
            return self.start <= other.start && other.start <= self.end();
        }
        self.start <= other.start && other.end() <= self.end()
    }

    /// The intersection `[max(start), min(end))`, or `None` when the ranges
    /// do not overlap.
    pub fn overlap(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::between(
            self.start.max(other.start),
            self.end().min(other.end()),
        ))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range: [{}, {})", self.start, self.end())
    }
}

/// Comparator ordering ranges by ascending start. Use with a stable sort to
/// keep equal starts in input order.
pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start)
}

/// Comparator ordering ranges by ascending end.
pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end().cmp(&b.end())
}
