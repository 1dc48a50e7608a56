//! Find meeting times that work for a request's attendees.
//!
//! Mandatory attendees always constrain the result. Optional attendees are
//! accommodated all-or-nothing: either every returned window also suits every
//! optional attendee, or optional attendees are ignored for the query.

use std::collections::BTreeSet;

use crate::busy::collect_busy_times;
use crate::event::Event;
use crate::freebusy::find_free_windows;
use crate::range::{TimeRange, DAY_MINUTES};
use crate::request::MeetingRequest;

/// Stateless entry point for meeting queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingQuery;

impl MeetingQuery {
    pub fn new() -> Self {
        Self
    }

    /// Same as [`find_meeting_times`].
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        find_meeting_times(events, request)
    }
}

/// Return every window of the day in which the request's meeting can be held.
///
/// Windows are sorted by start, never overlap, and are each at least
/// `request.duration()` minutes long. An empty result means no slot exists.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let duration = request.duration();

    if duration > DAY_MINUTES {
        tracing::debug!(duration, "requested duration exceeds the day");
        return Vec::new();
    }

    if events.is_empty() || request.attendees().is_empty() {
        tracing::debug!(
            events = events.len(),
            attendees = request.attendees().len(),
            "nothing constrains the day"
        );
        return vec![TimeRange::WHOLE_DAY];
    }

    let mandatory = free_windows_for(request.attendees(), events, duration);

    if request.optional_attendees().is_empty() {
        tracing::debug!(windows = mandatory.len(), "no optional attendees");
        return mandatory;
    }

    let optional = free_windows_for(request.optional_attendees(), events, duration);

    if mandatory.is_empty() {
        tracing::debug!(
            windows = optional.len(),
            "no mandatory windows, reporting optional availability"
        );
        return optional;
    }

    let accommodating = window_intersections(&mandatory, &optional, duration);
    if accommodating.is_empty() {
        tracing::debug!(
            windows = mandatory.len(),
            "optional attendees cannot be accommodated, dropping them"
        );
        mandatory
    } else {
        tracing::debug!(
            windows = accommodating.len(),
            "optional attendees accommodated"
        );
        accommodating
    }
}

/// Pairwise intersections of two window lists that are at least `duration`
/// minutes long.
///
/// When both inputs are sorted and internally non-overlapping, so is the
/// output.
pub fn window_intersections(
    windows_a: &[TimeRange],
    windows_b: &[TimeRange],
    duration: i32,
) -> Vec<TimeRange> {
    let mut intersections = Vec::new();

    for a in windows_a {
        for b in windows_b {
            if let Some(shared) = a.overlap(b) {
                if shared.duration() >= duration {
                    intersections.push(shared);
                }
            }
        }
    }

    intersections
}

fn free_windows_for(group: &BTreeSet<String>, events: &[Event], duration: i32) -> Vec<TimeRange> {
    let busy = collect_busy_times(group, events);
    find_free_windows(&busy, duration)
}
