//! Collect the busy intervals of an attendee group.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::range::TimeRange;

/// Return the time ranges of every event attended by at least one member of
/// `group`, de-duplicated and sorted by start. Zero-length events occupy no
/// minutes and are skipped.
///
/// Overlapping and adjacent ranges are left as-is; merging them is the job of
/// [`find_free_windows`](crate::freebusy::find_free_windows).
pub fn collect_busy_times(group: &BTreeSet<String>, events: &[Event]) -> Vec<TimeRange> {
    // BTreeSet gives set semantics and start-ordered iteration in one step.
    let busy: BTreeSet<TimeRange> = events
        .iter()
        .filter(|event| event.involves_any(group))
        .map(Event::when)
        .filter(|when| !when.is_empty())
        .collect();

    tracing::trace!(
        group_size = group.len(),
        events = events.len(),
        busy = busy.len(),
        "collected busy times"
    );

    busy.into_iter().collect()
}
