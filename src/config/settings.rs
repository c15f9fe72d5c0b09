//! Application settings configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Features, Result};
use crate::table::{DEFAULT_ROW_COUNT, PAGE_SIZE_OPTIONS};
use crate::visibility::DEFAULT_STORAGE_KEY;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows per page on startup.
    pub page_size: usize,
    /// Number of synthetic customers to generate.
    pub row_count: usize,
    /// Storage slot holding the column visibility preferences.
    pub storage_key: String,
    /// Directory for the storage slots; the local data directory if unset.
    pub storage_dir: Option<PathBuf>,
    /// Initial state of the feature switches.
    pub features: Features,
}

impl Settings {
    /// Check that every setting holds a usable value.
    pub fn validate(&self) -> Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            return Err(ConfigError::ValidationError(format!(
                "page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, self.page_size
            )));
        }

        if self.row_count == 0 {
            return Err(ConfigError::ValidationError(
                "row_count must be greater than zero".to_string(),
            ));
        }

        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage_key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE_OPTIONS[0],
            row_count: DEFAULT_ROW_COUNT,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: None,
            features: Features::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.row_count, 105);
        assert_eq!(settings.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_bad_page_size() {
        let settings = Settings {
            page_size: 25,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_zero_rows() {
        let settings = Settings {
            row_count: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_storage_key() {
        let settings = Settings {
            storage_key: "  ".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("storage_key cannot be empty"));
    }
}
