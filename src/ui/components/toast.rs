//! Transient feedback messages.
//!
//! Toasts report the outcome of demo actions (bulk actions, row menu
//! choices, feature switches) and disappear after a few seconds.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// Maximum number of toasts kept at once.
const MAX_TOASTS: usize = 3;

/// The kind of a toast, which determines its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
}

impl ToastKind {
    /// Prefix symbol.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "i",
            ToastKind::Success => "✓",
            ToastKind::Warning => "!",
        }
    }

    /// Display color.
    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            ToastKind::Info => t.accent,
            ToastKind::Success => t.success,
            ToastKind::Warning => t.warning,
        }
    }

    fn lifetime(&self) -> Duration {
        match self {
            ToastKind::Warning => Duration::from_secs(5),
            _ => Duration::from_secs(3),
        }
    }
}

/// A single message with an expiry.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
    lifetime: Duration,
}

impl Toast {
    /// Create a toast with the default lifetime for its kind.
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            lifetime: kind.lifetime(),
        }
    }

    /// Override the lifetime.
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Check if the toast should be removed.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.lifetime
    }
}

/// The queue of live toasts, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, dropping the oldest beyond the limit.
    pub fn push(&mut self, toast: Toast) {
        self.queue.push_back(toast);
        while self.queue.len() > MAX_TOASTS {
            self.queue.pop_front();
        }
    }

    /// Add an info toast.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Info));
    }

    /// Add a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Success));
    }

    /// Add a warning toast.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Warning));
    }

    /// Drop expired toasts; call once per tick.
    pub fn tick(&mut self) {
        self.queue.retain(|t| !t.is_expired());
    }

    /// The newest toast, if any.
    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Render the newest toast on a single line.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(toast) = self.latest() else {
            return;
        };
        let style = Style::default().fg(toast.kind.color());
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", toast.kind.icon()),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(toast.message.clone(), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetimes() {
        assert_eq!(Toast::new("x", ToastKind::Info).lifetime, Duration::from_secs(3));
        assert_eq!(Toast::new("x", ToastKind::Warning).lifetime, Duration::from_secs(5));
    }

    #[test]
    fn test_push_caps_queue() {
        let mut toasts = Toasts::new();
        toasts.info("1");
        toasts.success("2");
        toasts.warning("3");
        toasts.info("4");
        assert_eq!(toasts.len(), 3);
        assert_eq!(toasts.latest().unwrap().message, "4");
    }

    #[test]
    fn test_tick_removes_expired() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::new("gone", ToastKind::Info).with_lifetime(Duration::from_millis(1)));
        toasts.info("stays");
        std::thread::sleep(Duration::from_millis(5));
        toasts.tick();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().unwrap().message, "stays");
    }
}
