//! Reading and writing a day's events through the storage port.
//!
//! Payloads are JSON arrays of event records. An unreadable payload is
//! treated as an empty day and left in place; only `persist` ever writes.

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::models::date_key::DateKey;
use crate::models::event::Event;
use crate::services::storage::KeyValueStore;

pub fn serialize_events(events: &[Event]) -> serde_json::Result<String> {
    serde_json::to_string(events)
}

pub fn deserialize_events(payload: &str) -> serde_json::Result<Vec<Event>> {
    serde_json::from_str(payload)
}

/// Load the events stored for `date_key`.
///
/// Absent or malformed payloads yield an empty list. Errors reading from
/// the store itself are returned.
pub fn load<S: KeyValueStore + ?Sized>(storage: &S, date_key: &DateKey) -> Result<Vec<Event>> {
    let key = date_key.to_string();

    let Some(payload) = storage.get(&key)? else {
        debug!("No events stored for {}", key);
        return Ok(Vec::new());
    };

    match deserialize_events(&payload) {
        Ok(events) => {
            debug!("Loaded {} events for {}", events.len(), key);
            Ok(events)
        }
        Err(e) => {
            warn!("Ignoring unreadable events stored for {}: {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Overwrite the stored events for `date_key` with `events`.
pub fn persist<S: KeyValueStore + ?Sized>(
    storage: &mut S,
    date_key: &DateKey,
    events: &[Event],
) -> Result<()> {
    let key = date_key.to_string();
    let payload = serialize_events(events)
        .with_context(|| format!("Failed to serialize events for {}", key))?;

    storage.set(&key, &payload)?;
    debug!("Persisted {} events for {}", events.len(), key);
    Ok(())
}
