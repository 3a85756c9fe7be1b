use std::collections::HashMap;

use anyhow::Result;

use super::KeyValueStore;

/// In-process store, used by tests and by callers that persist elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("2024-01-01").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("2024-01-01", "[]").unwrap();
        store.set("2024-01-01", "[1]").unwrap();

        assert_eq!(store.get("2024-01-01").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }
}
