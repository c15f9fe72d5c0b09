//! "Edit columns" panel.
//!
//! A popup list of every registered column with a checkbox bound to the
//! editor's staged map. The save hint is only live while there are unsaved
//! changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::table::ColumnRegistry;
use crate::ui::theme::theme;
use crate::visibility::{ColumnEditor, VisibilityStore};

/// Actions that can be returned from the column picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPickerAction {
    /// The user asked to save; only emitted when there are staged changes.
    Save,
    /// The panel was dismissed without saving.
    Cancel,
}

/// The column picker panel.
#[derive(Debug, Default)]
pub struct ColumnPicker {
    editor: ColumnEditor,
    cursor: usize,
    list_state: ListState,
}

impl ColumnPicker {
    /// Create a closed picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel on a fresh copy of the committed visibility.
    pub fn open<S: KeyValueStore>(
        &mut self,
        store: &VisibilityStore<S>,
        registry: &ColumnRegistry,
    ) {
        self.editor.open(store, registry);
        self.cursor = 0;
        self.list_state.select(Some(0));
    }

    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        self.editor.is_open()
    }

    /// The underlying editor state.
    pub fn editor(&self) -> &ColumnEditor {
        &self.editor
    }

    /// Index of the focused column.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Commit the staged changes and close. Returns false if nothing changed.
    pub fn save<S: KeyValueStore>(&mut self, store: &mut VisibilityStore<S>) -> bool {
        self.editor.save(store)
    }

    /// Close without committing.
    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns an action when the panel wants to close.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        registry: &ColumnRegistry,
    ) -> Option<ColumnPickerAction> {
        if !self.is_open() {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.move_down(registry.len());
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.move_up();
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                self.list_state.select(Some(0));
            }
            (KeyCode::End, _) => {
                self.cursor = registry.len().saturating_sub(1);
                self.list_state.select(Some(self.cursor));
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => {
                if let Some(column) = registry.at(self.cursor) {
                    self.editor.toggle(&column.id);
                }
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) => {
                self.editor.show_all(registry);
            }
            (KeyCode::Enter, _) => {
                if self.editor.is_dirty() {
                    return Some(ColumnPickerAction::Save);
                }
            }
            (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.cancel();
                return Some(ColumnPickerAction::Cancel);
            }
            _ => {}
        }
        None
    }

    /// Render the panel centered in `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, registry: &ColumnRegistry) {
        let Some(staged) = self.editor.staged() else {
            return;
        };
        let t = theme();

        let width = 44.min(area.width);
        let height = (registry.len() as u16 + 5).min(area.height);
        let panel = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .title(" Edit columns ")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_focused));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(inner);

        let items: Vec<ListItem> = registry
            .iter()
            .map(|column| {
                let visible = staged.is_visible(&column.id);
                let (checkbox, style) = if visible {
                    ("[x]", Style::default().fg(t.success))
                } else {
                    ("[ ]", Style::default().fg(t.muted))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(checkbox, style),
                    Span::raw(" "),
                    Span::raw(column.label.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(t.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let dirty = self.editor.is_dirty();
        let save_style = if dirty {
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.muted)
        };
        let status = if dirty {
            Span::styled("● unsaved", Style::default().fg(t.warning))
        } else {
            Span::styled("no changes", Style::default().fg(t.muted))
        };
        let footer = Line::from(vec![
            Span::styled("[enter] Save", save_style),
            Span::raw("  "),
            Span::styled("[esc] Cancel", Style::default().fg(t.fg)),
            Span::raw("  "),
            status,
        ]);
        frame.render_widget(Paragraph::new(footer), chunks[1]);
    }
}
