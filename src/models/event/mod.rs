// Event module
// Time-blocked event belonging to a single planner day

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::time_of_day::TimeOfDay;

/// Opaque event identifier, assigned once when the event is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true when the half-open ranges `[s1, e1)` and `[s2, e2)` share
/// at least one minute. Ranges that only touch at an endpoint do not overlap.
pub fn intervals_overlap(s1: TimeOfDay, e1: TimeOfDay, s2: TimeOfDay, e2: TimeOfDay) -> bool {
    s1 < e2 && s2 < e1
}

/// A stored planner event.
///
/// Field names serialize in camelCase (`startTime`, `endTime`) so payloads
/// stay readable by the browser build of the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Attach an identifier to a draft
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            start_time: draft.start_time,
            end_time: draft.end_time,
            description: draft.description,
        }
    }

    /// The editable fields of this event
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description.clone(),
        }
    }

    /// Check whether this event occupies any part of `[start, end)`
    pub fn overlaps(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        intervals_overlap(self.start_time, self.end_time, start, end)
    }

    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Length of the event in minutes
    pub fn duration_minutes(&self) -> u32 {
        self.end_time
            .minutes_since_midnight()
            .saturating_sub(self.start_time.minutes_since_midnight())
    }
}

/// User-supplied fields for creating or replacing an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub description: String,
}

impl EventDraft {
    /// Create a draft with an empty description
    ///
    /// # Examples
    /// ```
    /// use day_planner::models::event::EventDraft;
    ///
    /// let draft = EventDraft::new("Standup", "09:00".parse().unwrap(), "09:15".parse().unwrap())
    ///     .with_description("Daily sync");
    /// assert_eq!(draft.description, "Daily sync");
    /// ```
    pub fn new(name: impl Into<String>, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Named optional fields for a partial edit.
///
/// Unset fields keep the current value of the event being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub description: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.description.is_none()
    }

    /// Produce the complete replacement record for `event`
    pub fn apply_to(&self, event: &Event) -> EventDraft {
        EventDraft {
            name: self.name.clone().unwrap_or_else(|| event.name.clone()),
            start_time: self.start_time.unwrap_or(event.start_time),
            end_time: self.end_time.unwrap_or(event.end_time),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| event.description.clone()),
        }
    }
}
