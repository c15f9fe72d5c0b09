//! Committed column visibility with best-effort persistence.

use tracing::{debug, info, warn};

use crate::storage::KeyValueStore;
use crate::table::ColumnRegistry;

use super::VisibilityMap;

/// Storage slot used when the settings do not name one.
pub const DEFAULT_STORAGE_KEY: &str = "customer-table.column-visibility";

/// Owner of the committed visibility map.
///
/// The map is loaded once when the store is opened and written back on every
/// [`commit`](Self::commit). Storage problems never reach the caller: a bad
/// slot loads as an empty map and a failed write leaves the in-memory map in
/// charge for the rest of the session.
pub struct VisibilityStore<S: KeyValueStore> {
    storage: S,
    key: String,
    committed: VisibilityMap,
}

impl<S: KeyValueStore> VisibilityStore<S> {
    /// Open the store and load the committed map from `key`.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let committed = load(&storage, &key);
        info!(key = %key, entries = committed.len(), "Loaded column visibility");
        Self {
            storage,
            key,
            committed,
        }
    }

    /// The committed map, overrides only.
    pub fn committed(&self) -> &VisibilityMap {
        &self.committed
    }

    /// The committed map with an explicit entry for every registered column.
    pub fn resolved(&self, registry: &ColumnRegistry) -> VisibilityMap {
        self.committed.resolve(registry)
    }

    /// Whether a column is currently rendered.
    pub fn is_visible(&self, id: &str) -> bool {
        self.committed.is_visible(id)
    }

    /// Replace the committed map and write it to storage.
    pub fn commit(&mut self, map: VisibilityMap) {
        self.committed = map;
        self.persist();
    }

    /// The storage slot key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let content = match serde_json::to_string(&self.committed) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to serialize column visibility: {}", e);
                return;
            }
        };

        match self.storage.set(&self.key, &content) {
            Ok(()) => debug!(key = %self.key, "Saved column visibility"),
            Err(e) => warn!(key = %self.key, "Failed to save column visibility: {}", e),
        }
    }
}

/// Read the visibility map from a storage slot.
///
/// Returns an empty map when the slot is empty, unreadable, not JSON, or
/// holds something other than a JSON object.
pub fn load<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> VisibilityMap {
    let content = match storage.get(key) {
        Ok(Some(c)) => c,
        Ok(None) => return VisibilityMap::new(),
        Err(e) => {
            warn!(key = %key, "Failed to read column visibility: {}", e);
            return VisibilityMap::new();
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            debug!(key = %key, "Ignoring malformed column visibility: {}", e);
            return VisibilityMap::new();
        }
    };

    VisibilityMap::from_json_value(&value).unwrap_or_else(|| {
        debug!(key = %key, "Ignoring column visibility that is not an object");
        VisibilityMap::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    const KEY: &str = DEFAULT_STORAGE_KEY;

    #[test]
    fn test_open_empty_storage() {
        let store = VisibilityStore::open(MemoryStore::new(), KEY);
        assert!(store.committed().is_empty());
        assert!(store.is_visible("email"));
    }

    #[test]
    fn test_open_reads_existing_slot() {
        let storage = MemoryStore::with_slot(KEY, r#"{"phone": false}"#);
        let store = VisibilityStore::open(storage, KEY);
        assert!(!store.is_visible("phone"));
        assert!(store.is_visible("email"));
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        for content in ["not-json", "[true, false]", "42", "null", "\"text\""] {
            let storage = MemoryStore::with_slot(KEY, content);
            assert!(load(&storage, KEY).is_empty(), "content: {}", content);
        }
    }

    #[test]
    fn test_commit_writes_slot() {
        let mut store = VisibilityStore::open(MemoryStore::new(), KEY);
        let map: VisibilityMap = [("email", true), ("phone", false)].into_iter().collect();
        store.commit(map.clone());

        assert_eq!(store.committed(), &map);
        let written = store.storage().get(KEY).unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, serde_json::json!({"email": true, "phone": false}));
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = VisibilityStore::open(MemoryStore::read_only(), KEY);
        let map: VisibilityMap = [("city", false)].into_iter().collect();
        store.commit(map.clone());

        assert_eq!(store.committed(), &map);
        assert!(!store.is_visible("city"));
        assert_eq!(store.storage().get(KEY).unwrap(), None);
    }

    #[test]
    fn test_round_trip_through_files() {
        let dir = TempDir::new().unwrap();
        let map: VisibilityMap = [("email", true), ("state", false)].into_iter().collect();

        let mut store = VisibilityStore::open(FileStore::with_dir(dir.path()), KEY);
        store.commit(map.clone());
        drop(store);

        let reopened = VisibilityStore::open(FileStore::with_dir(dir.path()), KEY);
        assert_eq!(reopened.committed(), &map);
    }

    #[test]
    fn test_resolved_uses_registry() {
        let storage = MemoryStore::with_slot(KEY, r#"{"phone": false}"#);
        let store = VisibilityStore::open(storage, KEY);
        let resolved = store.resolved(&ColumnRegistry::customers());
        assert_eq!(resolved.len(), 7);
        assert_eq!(resolved.get("phone"), Some(false));
        assert_eq!(resolved.get("city"), Some(true));
    }
}
