//! Centralized error types for custable.
//!
//! Subsystem errors are aggregated here so the binary can report them with a
//! readable message. Column visibility operations never produce errors; only
//! startup (configuration, storage location, terminal setup) can fail.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Storage location or access errors.
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// IO errors (file system, terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Pass --config to choose a file."
                        .to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create configuration directory. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check it is readable.".to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Storage(e) => match e {
                StorageError::NoDataDir => {
                    "Could not find a local data directory. Pass --storage-dir to choose one."
                        .to_string()
                }
                StorageError::Io(_) => {
                    "Could not access preference storage. Check file permissions.".to_string()
                }
                StorageError::Full(_) => "Preference storage is full.".to_string(),
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }

    /// Check if this error prevents the application from starting.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::Storage(StorageError::NoDataDir) | AppError::Terminal(_)
        )
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
