//! Compute free windows from a sorted list of busy intervals.
//!
//! A single sweep over the busy intervals tracks how far into the day the busy
//! region extends. Overlapping, adjacent and nested intervals fold into that
//! region; gaps past it become free windows.

use crate::range::{TimeRange, DAY_MINUTES, START_OF_DAY};

/// Find the free windows of the day that are at least `duration` minutes long.
///
/// `busy` must be sorted by start (as returned by
/// [`collect_busy_times`](crate::busy::collect_busy_times)); it may contain
/// overlapping or nested intervals. Returns maximal windows sorted by start.
pub fn find_free_windows(busy: &[TimeRange], duration: i32) -> Vec<TimeRange> {
    debug_assert!(
        busy.windows(2).all(|pair| pair[0].start() <= pair[1].start()),
        "busy intervals must be sorted by start"
    );

    let mut windows = Vec::new();
    let mut cursor = START_OF_DAY;

    for interval in busy {
        if interval.start() <= cursor {
            // Overlaps, touches or sits inside the busy region already swept.
            cursor = cursor.max(interval.end());
            continue;
        }

        if interval.start() - cursor >= duration {
            windows.push(TimeRange::between(cursor, interval.start()));
        }
        cursor = interval.end();
    }

    // Trailing window after the last busy interval.
    if cursor < DAY_MINUTES && DAY_MINUTES - cursor >= duration {
        windows.push(TimeRange::between(cursor, DAY_MINUTES));
    }

    tracing::trace!(
        busy = busy.len(),
        duration,
        free = windows.len(),
        "computed free windows"
    );

    windows
}

/// Find the first free window of at least `duration` minutes, if any.
///
/// Delegates to [`find_free_windows`].
pub fn find_first_free_window(busy: &[TimeRange], duration: i32) -> Option<TimeRange> {
    find_free_windows(busy, duration).into_iter().next()
}
