//! Event handling for the application.
//!
//! Terminal input is polled by [`EventHandler`] and turned into [`Event`]s
//! that the app's update function consumes.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{get_context_hints, KeyContext};

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The tick interval elapsed without input.
    Tick,
    /// The application should exit.
    Quit,
}
