//! File logging for the TUI.
//!
//! The terminal belongs to ratatui, so every `tracing` event goes to a daily
//! rolling file instead of stderr. What ends up there, by level:
//!
//! - `warn`: storage slots that could not be read or written, config files
//!   that failed to load and were replaced by defaults
//! - `info`: startup and shutdown, the committed visibility that was loaded,
//!   bulk actions, quit requests
//! - `debug`: visibility commits, editor sessions opening and closing,
//!   feature switches, row menu choices
//! - `trace`: every key the table sees and every staged toggle
//!
//! `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=custable=debug`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset: our own info events, warnings from
/// dependencies.
const DEFAULT_FILTER: &str = "custable=info,warn";

/// Prefix of the daily log files; the appender adds the date.
const LOG_FILE_PREFIX: &str = "custable.log";

/// Install the global subscriber writing to [`log_directory`].
///
/// Fails when no local data directory exists, when it cannot be created, or
/// when a subscriber is already installed. The caller keeps running without
/// logs in that case.
pub fn init() -> anyhow::Result<()> {
    let base = dirs::data_local_dir().context("no local data directory")?;
    let dir = logs_under(&base);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("could not create {}", dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter())
        .try_init()
        .context("a tracing subscriber is already installed")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %dir.display(),
        "custable started"
    );
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn logs_under(base: &Path) -> PathBuf {
    base.join("custable").join("logs")
}

/// Directory holding the log files, if the platform has a local data dir.
pub fn log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| logs_under(&base))
}

/// Record a clean shutdown.
pub fn shutdown() {
    tracing::info!("custable stopped");
}
