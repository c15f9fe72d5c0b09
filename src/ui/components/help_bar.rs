//! Contextual help bar component.
//!
//! Displays the key hints for the current input context on one line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Render the hint line for `context`.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext) {
    let spans = hint_spans(get_context_hints(context));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Split hint text into spans, styling bracketed keys with the accent color.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let key_style = Style::default().fg(t.accent);
    let text_style = Style::default().fg(t.muted);

    let mut spans = Vec::new();
    let mut rest = hints;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), text_style));
        }
        spans.push(Span::styled(rest[open..=close].to_string(), key_style));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }
    spans
}
