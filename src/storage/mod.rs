//! Durable local key/value storage.
//!
//! Preferences are kept in named slots, each holding a single string value.
//! The [`KeyValueStore`] trait is the seam between the visibility store and
//! wherever the bytes actually land: a directory of JSON files in normal use,
//! or an in-process map in tests.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur while reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No local data directory is available on this platform.
    #[error("could not determine local data directory")]
    NoDataDir,

    /// The slot could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused the write (quota exhausted or read-only).
    #[error("storage is full, could not write '{0}'")]
    Full(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-valued key/value store that survives process restarts.
pub trait KeyValueStore {
    /// Read the value held in `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value held in `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Empty the slot. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
