//! Per-row overflow menu.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::ui::theme::theme;

/// An entry of the overflow menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMenuItem {
    ViewDetails,
    Edit,
    Duplicate,
    Delete,
}

impl RowMenuItem {
    /// Menu entries in display order.
    pub const ALL: [RowMenuItem; 4] = [
        RowMenuItem::ViewDetails,
        RowMenuItem::Edit,
        RowMenuItem::Duplicate,
        RowMenuItem::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RowMenuItem::ViewDetails => "View details",
            RowMenuItem::Edit => "Edit",
            RowMenuItem::Duplicate => "Duplicate",
            RowMenuItem::Delete => "Delete",
        }
    }
}

/// Actions that can be returned from the row menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMenuAction {
    /// An entry was chosen for the given row.
    Choose(RowMenuItem, usize),
    /// The menu was closed.
    Close,
}

/// The overflow menu popup.
#[derive(Debug, Default)]
pub struct RowMenu {
    /// Row the menu was opened for, while open.
    row: Option<usize>,
    cursor: usize,
    list_state: ListState,
}

impl RowMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the menu for a row.
    pub fn open(&mut self, row: usize) {
        self.row = Some(row);
        self.cursor = 0;
        self.list_state.select(Some(0));
    }

    pub fn close(&mut self) {
        self.row = None;
    }

    pub fn is_open(&self) -> bool {
        self.row.is_some()
    }

    /// Row the menu belongs to.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<RowMenuAction> {
        let row = self.row?;
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                if self.cursor + 1 < RowMenuItem::ALL.len() {
                    self.cursor += 1;
                }
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            (KeyCode::Enter, _) => {
                self.close();
                return Some(RowMenuAction::Choose(RowMenuItem::ALL[self.cursor], row));
            }
            (KeyCode::Esc, _)
            | (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('m'), KeyModifiers::NONE) => {
                self.close();
                return Some(RowMenuAction::Close);
            }
            _ => {}
        }
        self.list_state.select(Some(self.cursor));
        None
    }

    /// Render the menu near the right edge of `area`, at height `anchor_y`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, anchor_y: u16) {
        if !self.is_open() {
            return;
        }
        let t = theme();

        let width = 18.min(area.width);
        let height = (RowMenuItem::ALL.len() as u16 + 2).min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let max_y = area.y + area.height.saturating_sub(height);
        let y = anchor_y.clamp(area.y, max_y);
        let popup = Rect::new(x, y, width, height);
        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = RowMenuItem::ALL
            .iter()
            .map(|item| {
                let style = if *item == RowMenuItem::Delete {
                    Style::default().fg(t.danger)
                } else {
                    Style::default().fg(t.fg)
                };
                ListItem::new(Line::styled(item.label(), style))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(t.border_focused)),
            )
            .highlight_style(
                Style::default()
                    .bg(t.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_stateful_widget(list, popup, &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_closed_menu_ignores_input() {
        let mut menu = RowMenu::new();
        assert_eq!(menu.handle_input(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_choose_first_item() {
        let mut menu = RowMenu::new();
        menu.open(12);
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter)),
            Some(RowMenuAction::Choose(RowMenuItem::ViewDetails, 12))
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_to_delete() {
        let mut menu = RowMenu::new();
        menu.open(0);
        for _ in 0..10 {
            menu.handle_input(key(KeyCode::Down));
        }
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter)),
            Some(RowMenuAction::Choose(RowMenuItem::Delete, 0))
        );
    }

    #[test]
    fn test_escape_closes() {
        let mut menu = RowMenu::new();
        menu.open(3);
        assert_eq!(menu.handle_input(key(KeyCode::Esc)), Some(RowMenuAction::Close));
        assert_eq!(menu.row(), None);
    }

    #[test]
    fn test_reopen_resets_cursor() {
        let mut menu = RowMenu::new();
        menu.open(1);
        menu.handle_input(key(KeyCode::Down));
        menu.close();
        menu.open(2);
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter)),
            Some(RowMenuAction::Choose(RowMenuItem::ViewDetails, 2))
        );
    }
}
