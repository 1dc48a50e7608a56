//! Calendar events: a titled time range plus the people attending it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// A single event on the day's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Human-readable label; never consulted by the scheduler.
    title: String,
    when: TimeRange,
    /// Attendee identifiers. Kept ordered so serialized output is stable.
    #[serde(default)]
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True if at least one member of `group` attends this event.
    pub fn involves_any(&self, group: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(group)
    }
}
