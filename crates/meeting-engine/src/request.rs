//! The meeting a caller wants to schedule.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Desired meeting length plus who must, and who would like to, attend.
///
/// `duration` may exceed a day; such requests simply have no answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct MeetingRequest {
    duration: i32,
    attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
}

#[derive(Deserialize)]
struct RawRequest {
    duration: i32,
    #[serde(default)]
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
}

impl TryFrom<RawRequest> for MeetingRequest {
    type Error = ScheduleError;

    fn try_from(raw: RawRequest) -> Result<Self> {
        let request = MeetingRequest::new(raw.attendees, raw.duration)?;
        Ok(raw
            .optional_attendees
            .into_iter()
            .fold(request, |request, name| request.add_optional_attendee(name)))
    }
}

impl MeetingRequest {
    /// Create a request for `duration` minutes with the given mandatory
    /// attendees and no optional ones.
    pub fn new<I, S>(attendees: I, duration: i32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if duration < 0 {
            return Err(ScheduleError::NegativeDuration(duration));
        }
        Ok(Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        })
    }

    pub fn add_optional_attendee(mut self, attendee: impl Into<String>) -> Self {
        self.optional_attendees.insert(attendee.into());
        self
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Mandatory attendees.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }
}
