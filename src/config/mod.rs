//! Configuration management for custable.
//!
//! This module handles loading and saving the TOML settings file and the
//! feature switches it seeds.

mod features;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use features::{Feature, Features};
pub use settings::Settings;

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no configuration directory.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration directory could not be created.
    #[error("failed to create config directory: {0}")]
    CreateDirError(std::io::Error),

    /// The configuration file exists but could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(std::io::Error),

    /// The configuration file could not be written.
    #[error("failed to write config file: {0}")]
    WriteError(std::io::Error),

    /// The configuration file is not valid TOML for [`Config`].
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A setting holds an unusable value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The on-disk configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Application settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Default location of the config file.
    ///
    /// - Linux: `~/.config/custable/config.toml`
    /// - macOS: `~/Library/Application Support/custable/config.toml`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\custable\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("custable").join("config.toml"))
    }

    /// Load the config from its default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load and validate the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.settings.validate()?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.settings.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;
        debug!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.page_size = 50;
        config.settings.features.row_menu = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\npage_size = 20\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.page_size, 20);
        assert_eq!(config.settings.row_count, Settings::default().row_count);
        assert!(config.settings.features.pagination);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\npage_size = 15\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_default_path_structure() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with("custable/config.toml"));
        }
    }
}
