//! In-process storage backend.

use std::collections::HashMap;

use super::{KeyValueStore, Result, StorageError};

/// A [`KeyValueStore`] backed by a plain `HashMap`.
///
/// Values live only as long as the store itself. A store built with
/// [`MemoryStore::read_only`] rejects every write with
/// [`StorageError::Full`], which stands in for an exhausted quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    /// Create an empty, writable store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses all writes.
    pub fn read_only() -> Self {
        Self {
            slots: HashMap::new(),
            reject_writes: true,
        }
    }

    /// Create a store pre-populated with one slot.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots,
            reject_writes: false,
        }
    }

    /// Check if no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes {
            return Err(StorageError::Full(key.to_string()));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.reject_writes {
            return Err(StorageError::Full(key.to_string()));
        }
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_slot() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nothing").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_and_overwrite() {
        let mut store = MemoryStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.slots.len(), 1);
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let mut store = MemoryStore::read_only();
        let result = store.set("k", "v");
        assert!(matches!(result, Err(StorageError::Full(_))));
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_with_slot() {
        let store = MemoryStore::with_slot("k", "v");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
