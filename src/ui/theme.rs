//! Theme and styling configuration.

use std::sync::OnceLock;

use ratatui::style::Color;

/// Color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text.
    pub fg: Color,
    /// Secondary text, disabled controls.
    pub muted: Color,
    /// Table header background.
    pub header_bg: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Borders of the focused panel.
    pub border_focused: Color,
    /// Cursor row background.
    pub highlight_bg: Color,
    /// Key names and primary buttons.
    pub accent: Color,
    /// Checked boxes and enabled switches.
    pub success: Color,
    /// Unsaved-change markers.
    pub warning: Color,
    /// Destructive actions.
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            muted: Color::DarkGray,
            header_bg: Color::Rgb(0xf5, 0xf5, 0xf5),
            border: Color::Gray,
            border_focused: Color::Cyan,
            highlight_bg: Color::Rgb(0x30, 0x30, 0x30),
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// The active theme.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
