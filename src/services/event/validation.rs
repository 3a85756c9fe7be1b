use super::error::EventStoreError;
use super::EventStore;
use crate::models::event::{Event, EventDraft, EventId};
use crate::models::time_of_day::TimeOfDay;
use crate::services::storage::KeyValueStore;

/// Field rules applied to every draft before it is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventRules {
    pub require_description: bool,
}

/// Accept `[start, end)` only when it spans at least one minute.
pub fn validate_range(start: TimeOfDay, end: TimeOfDay) -> Result<(), EventStoreError> {
    if start < end {
        Ok(())
    } else {
        Err(EventStoreError::InvalidRange { start, end })
    }
}

pub(crate) fn validate_draft(draft: &EventDraft, rules: EventRules) -> Result<(), EventStoreError> {
    if draft.name.trim().is_empty() {
        return Err(EventStoreError::EmptyName);
    }

    if rules.require_description && draft.description.trim().is_empty() {
        return Err(EventStoreError::MissingDescription);
    }

    validate_range(draft.start_time, draft.end_time)
}

impl<'a, S: KeyValueStore + ?Sized> EventStore<'a, S> {
    /// First event, other than `exclude`, that intersects `[start, end)`.
    pub fn find_conflict(
        &self,
        start: TimeOfDay,
        end: TimeOfDay,
        exclude: Option<&EventId>,
    ) -> Option<&Event> {
        self.events
            .iter()
            .filter(|event| Some(&event.id) != exclude)
            .find(|event| event.overlaps(start, end))
    }

    /// Whether any event other than `exclude` intersects `[start, end)`.
    pub fn overlaps(&self, start: TimeOfDay, end: TimeOfDay, exclude: Option<&EventId>) -> bool {
        self.find_conflict(start, end, exclude).is_some()
    }

    /// Run field, range and overlap checks for a candidate draft.
    pub(crate) fn check_candidate(
        &self,
        draft: &EventDraft,
        exclude: Option<&EventId>,
    ) -> Result<(), EventStoreError> {
        validate_draft(draft, self.rules)?;

        match self.find_conflict(draft.start_time, draft.end_time, exclude) {
            Some(existing) => Err(EventStoreError::OverlapConflict {
                id: existing.id.clone(),
                name: existing.name.clone(),
                start: existing.start_time,
                end: existing.end_time,
            }),
            None => Ok(()),
        }
    }
}
