//! Top toolbar: row count caption and bulk-action buttons.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// How a toolbar button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled, for the primary action.
    Contained,
    /// Outlined, for secondary actions.
    Outlined,
}

/// A toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub variant: ButtonVariant,
}

impl Button {
    const fn contained(label: &'static str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Contained,
        }
    }

    const fn outlined(label: &'static str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Outlined,
        }
    }
}

/// Buttons shown for the current selection state.
///
/// With rows selected the toolbar offers the bulk actions; otherwise it shows
/// the placeholder page actions.
pub fn toolbar_buttons(has_selection: bool) -> Vec<Button> {
    if has_selection {
        vec![
            Button::contained("Delete selected"),
            Button::outlined("Archive selected"),
        ]
    } else {
        vec![
            Button::contained("Primary button"),
            Button::outlined("Secondary button"),
            Button::outlined("Secondary button"),
            Button::outlined("Secondary button"),
            Button::outlined("i"),
        ]
    }
}

/// Render the caption followed by the buttons, if enabled.
pub fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    caption: &str,
    has_selection: bool,
    show_buttons: bool,
) {
    let t = theme();
    let mut spans = vec![Span::styled(
        caption.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if show_buttons {
        for button in toolbar_buttons(has_selection) {
            spans.push(Span::raw("  "));
            let span = match button.variant {
                ButtonVariant::Contained => Span::styled(
                    format!(" {} ", button.label),
                    Style::default().fg(t.fg).bg(t.accent),
                ),
                ButtonVariant::Outlined => Span::styled(
                    format!("[{}]", button.label),
                    Style::default().fg(t.accent),
                ),
            };
            spans.push(span);
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_buttons() {
        let buttons = toolbar_buttons(false);
        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].label, "Primary button");
        assert_eq!(buttons[0].variant, ButtonVariant::Contained);
        assert_eq!(buttons[4].label, "i");
    }

    #[test]
    fn test_bulk_buttons() {
        let labels: Vec<&str> = toolbar_buttons(true).iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Delete selected", "Archive selected"]);
    }
}
