use super::EventStore;
use crate::models::event::{Event, EventId};
use crate::services::storage::KeyValueStore;

impl<'a, S: KeyValueStore + ?Sized> EventStore<'a, S> {
    /// All events for the day in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an event by ID.
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub(crate) fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| &event.id == id)
    }

    /// Events whose name or description contains `keyword`, ignoring case.
    /// An empty keyword matches everything. Order is preserved.
    pub fn search(&self, keyword: &str) -> Vec<&Event> {
        let needle = keyword.to_lowercase();
        self.events
            .iter()
            .filter(|event| event.matches_lowercase(&needle))
            .collect()
    }
}
