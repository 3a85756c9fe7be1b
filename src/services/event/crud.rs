use log::info;

use super::error::EventStoreError;
use super::{persistence, EventStore};
use crate::models::event::{Event, EventDraft, EventId, EventPatch};
use crate::services::storage::KeyValueStore;

impl<'a, S: KeyValueStore + ?Sized> EventStore<'a, S> {
    /// Validate and append a new event, then persist the day.
    pub fn add(&mut self, draft: EventDraft) -> Result<Event, EventStoreError> {
        self.check_candidate(&draft, None)?;

        let event = Event::from_draft(EventId::generate(), draft);
        self.events.push(event.clone());

        if let Err(e) = self.save() {
            self.events.pop();
            return Err(e.into());
        }

        info!(
            "Added event {} '{}' {}-{} on {}",
            event.id, event.name, event.start_time, event.end_time, self.date_key
        );
        Ok(event)
    }

    /// Replace every editable field of an existing event.
    ///
    /// The event keeps its ID and its position in the list, and is not
    /// checked for overlap against itself.
    pub fn update(&mut self, id: &EventId, draft: EventDraft) -> Result<Event, EventStoreError> {
        let position = self
            .position(id)
            .ok_or_else(|| EventStoreError::NotFound(id.clone()))?;
        self.check_candidate(&draft, Some(id))?;

        let updated = Event::from_draft(id.clone(), draft);
        let previous = std::mem::replace(&mut self.events[position], updated.clone());

        if let Err(e) = self.save() {
            self.events[position] = previous;
            return Err(e.into());
        }

        info!("Updated event {} on {}", id, self.date_key);
        Ok(updated)
    }

    /// Update only the fields set in `patch`.
    pub fn apply_patch(&mut self, id: &EventId, patch: &EventPatch) -> Result<Event, EventStoreError> {
        let draft = self
            .get(id)
            .map(|event| patch.apply_to(event))
            .ok_or_else(|| EventStoreError::NotFound(id.clone()))?;

        self.update(id, draft)
    }

    /// Delete an event by ID, returning it.
    pub fn remove(&mut self, id: &EventId) -> Result<Event, EventStoreError> {
        let position = self
            .position(id)
            .ok_or_else(|| EventStoreError::NotFound(id.clone()))?;
        let removed = self.events.remove(position);

        if let Err(e) = self.save() {
            self.events.insert(position, removed);
            return Err(e.into());
        }

        info!("Removed event {} from {}", id, self.date_key);
        Ok(removed)
    }

    /// Write the current list to storage under this day's key.
    pub fn persist(&mut self) -> Result<(), EventStoreError> {
        self.save().map_err(EventStoreError::from)
    }

    fn save(&mut self) -> anyhow::Result<()> {
        persistence::persist(&mut *self.storage, &self.date_key, &self.events)
    }
}
