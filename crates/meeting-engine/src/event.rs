//! Scheduled events and meeting requests — the engine's inputs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A previously scheduled event and the people it keeps busy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name. Not used when computing availability.
    #[serde(default)]
    title: String,
    when: TimeRange,
    #[serde(default)]
    attendees: HashSet<String>,
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

    pub fn time_range(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    /// True when at least one of `people` attends this event.
    pub fn involves_any(&self, people: &HashSet<String>) -> bool {
        // Iterate the smaller set; membership is O(1) on the other.
        if self.attendees.len() <= people.len() {
            self.attendees.iter().any(|a| people.contains(a))
        } else {
            people.iter().any(|p| self.attendees.contains(p))
        }
    }
}

/// A query for meeting slots: who must come, who would ideally come, and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    #[serde(default)]
    attendees: HashSet<String>,
    #[serde(default)]
    optional_attendees: HashSet<String>,
    /// Required length in minutes. Non-positive or longer-than-a-day values are
    /// accepted and simply constrain the result arithmetically.
    duration: i64,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
            duration,
        }
    }

    /// Returns a copy of this request with `optional` added as optional attendees.
    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional.into_iter().map(Into::into));
        self
    }

    pub fn mandatory_attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &HashSet<String> {
        &self.optional_attendees
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Mandatory ∪ optional.
    pub fn all_attendees(&self) -> HashSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}
