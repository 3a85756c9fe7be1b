//! Per-day event store.
//! Holds the events of one selected day, enforces the no-overlap rule on
//! every mutation, and writes the day back through the storage port.

use log::warn;

use crate::models::date_key::DateKey;
use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::storage::KeyValueStore;

pub mod crud;
pub mod error;
pub mod persistence;
pub mod queries;
pub mod validation;

pub use error::EventStoreError;
pub use validation::{validate_range, EventRules};

impl From<&Settings> for EventRules {
    fn from(settings: &Settings) -> Self {
        Self {
            require_description: settings.require_description,
        }
    }
}

/// Events of a single day, kept in sync with a key-value store.
pub struct EventStore<'a, S: KeyValueStore + ?Sized> {
    pub(crate) storage: &'a mut S,
    pub(crate) date_key: DateKey,
    pub(crate) events: Vec<Event>,
    pub(crate) rules: EventRules,
}

impl<'a, S: KeyValueStore + ?Sized> EventStore<'a, S> {
    /// Load the events stored for `date_key`.
    ///
    /// Nothing is written until the first successful mutation, so a day whose
    /// stored payload could not be read keeps that payload until then.
    pub fn open(storage: &'a mut S, date_key: DateKey) -> Result<Self, EventStoreError> {
        let events = persistence::load(&*storage, &date_key)?;

        let inverted = events
            .iter()
            .filter(|event| event.start_time >= event.end_time)
            .count();
        if inverted > 0 {
            warn!(
                "{} stored events on {} end before they start",
                inverted, date_key
            );
        }

        Ok(Self {
            storage,
            date_key,
            events,
            rules: EventRules::default(),
        })
    }

    /// Apply field rules to subsequent mutations
    pub fn with_rules(mut self, rules: EventRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn date_key(&self) -> DateKey {
        self.date_key
    }

    pub fn rules(&self) -> EventRules {
        self.rules
    }
}
