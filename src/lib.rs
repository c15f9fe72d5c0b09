//! custable - a terminal demo of a configurable customer data table.
//!
//! The interesting part is column visibility: users hide and show columns in
//! an "Edit columns" panel, changes are staged until saved, and the saved
//! choice survives restarts through a small key/value [`storage`] layer.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod storage;
pub mod table;
pub mod ui;
pub mod visibility;

pub use app::{App, AppState};
pub use error::{AppError, Result};
