//! File-backed storage: one JSON file per slot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::{KeyValueStore, Result, StorageError};

/// A [`KeyValueStore`] that keeps each slot in its own file under a base directory.
///
/// Slot keys are sanitized before being used as file names, so any string is a
/// valid key.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding the slot files.
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the platform's local data directory.
    ///
    /// - Linux: `~/.local/share/custable/storage/`
    /// - macOS: `~/Library/Application Support/custable/storage/`
    /// - Windows: `C:\Users\<User>\AppData\Local\custable\storage\`
    pub fn new() -> Result<Self> {
        let base_dir = dirs::data_local_dir()
            .ok_or(StorageError::NoDataDir)?
            .join("custable")
            .join("storage");
        Ok(Self { base_dir })
    }

    /// Create a store rooted at a specific directory.
    pub fn with_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory holding the slot files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path of the file backing `key`.
    fn slot_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        self.base_dir.join(format!("{}.json", safe_key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                trace!("Read slot {:?} from {:?}", key, path);
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, value)?;
        debug!("Wrote slot {:?} to {:?}", key, path);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed slot {:?}", key);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::with_dir(dir.path());
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::with_dir(dir.path());
        store.set("prefs", r#"{"email":true}"#).unwrap();

        let reopened = FileStore::with_dir(dir.path());
        assert_eq!(
            reopened.get("prefs").unwrap().as_deref(),
            Some(r#"{"email":true}"#)
        );
    }

    #[test]
    fn test_set_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::with_dir(&nested);
        store.set("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_key_is_sanitized() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::with_dir(dir.path());
        let path = store.slot_path("table/visibility:v1");
        assert_eq!(path.file_name().unwrap(), "table_visibility_v1.json");
        assert_eq!(path.parent().unwrap(), dir.path());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::with_dir(dir.path());
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_default_location() {
        if let Ok(store) = FileStore::new() {
            assert!(store.base_dir().ends_with("custable/storage"));
        }
    }
}
