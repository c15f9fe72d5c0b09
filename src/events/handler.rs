//! Terminal event polling.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};

use super::Event;

/// The tick rate for the event loop in milliseconds.
const TICK_RATE_MS: u64 = 100;

/// Polls crossterm and turns what it reports into [`Event`]s.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(TICK_RATE_MS)
    }

    /// Create a handler that ticks every `tick_rate_ms` milliseconds.
    pub fn with_tick_rate(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait for the next event.
    ///
    /// Returns [`Event::Tick`] when the tick interval passes without input.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        Ok(translate(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a raw terminal event to an application event.
///
/// Only key presses are forwarded; release and repeat reports from terminals
/// with enhanced keyboard support become ticks. Ctrl-C always means quit.
fn translate(raw: CrosstermEvent) -> Event {
    match raw {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Press => Event::Tick,
        CrosstermEvent::Key(key)
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Event::Quit
        }
        CrosstermEvent::Key(key) => Event::Key(key),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        _ => Event::Tick,
    }
}
