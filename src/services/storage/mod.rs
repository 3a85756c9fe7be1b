//! Key-value persistence port for planner days.
//!
//! The event store only ever reads and overwrites whole payloads keyed by
//! date, so any medium offering `get`/`set` on strings can back it.

use anyhow::Result;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Synchronous string key-value mapping.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
