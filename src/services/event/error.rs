use thiserror::Error;

use crate::models::event::EventId;
use crate::models::time_of_day::TimeOfDay;

/// Reasons an event store operation is rejected.
///
/// Every variant leaves the day's events exactly as they were.
#[derive(Error, Debug)]
pub enum EventStoreError {
    #[error("End time {end} must be after start time {start}")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },

    #[error("Overlaps existing event '{name}' ({start}-{end})")]
    OverlapConflict {
        id: EventId,
        name: String,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    #[error("Event {0} not found")]
    NotFound(EventId),

    #[error("Event name cannot be empty")]
    EmptyName,

    #[error("Event description is required")]
    MissingDescription,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
