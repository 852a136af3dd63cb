//! In-memory store.

use std::collections::HashMap;

use super::{KeyValueStore, Result};

/// Volatile key-value store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
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

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("currentUser").unwrap(), None);

        store.set("currentUser", "{}").unwrap();
        assert_eq!(store.get("currentUser").unwrap().as_deref(), Some("{}"));

        store.set("currentUser", "{\"points\":50}").unwrap();
        assert_eq!(store.get("currentUser").unwrap().as_deref(), Some("{\"points\":50}"));
        assert_eq!(store.len(), 1);

        store.remove("currentUser").unwrap();
        store.remove("currentUser").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_borrowed_store_writes_through() {
        fn write_one<S: KeyValueStore>(mut store: S) {
            store.set("k", "v").unwrap();
        }

        let mut store = MemoryStore::new();
        write_one(&mut store);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
