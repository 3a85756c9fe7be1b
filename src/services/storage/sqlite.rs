use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::KeyValueStore;
use crate::services::database::Database;

/// Day entries kept in the `day_entries` table, one row per date key.
pub struct SqliteStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteStore<'a> {
    /// Wrap a database whose schema has already been initialized
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All stored date keys, oldest first
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .db
            .connection()
            .prepare("SELECT date_key FROM day_entries ORDER BY date_key ASC")?;

        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row(
                "SELECT payload FROM day_entries WHERE date_key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read day entry {}", key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO day_entries (date_key, payload, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(date_key) DO UPDATE SET
                    payload = excluded.payload,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .with_context(|| format!("Failed to write day entry {}", key))?;

        Ok(())
    }
}
