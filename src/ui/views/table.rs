//! Customer table view.
//!
//! Renders the synthetic customers with the committed column visibility and
//! the currently enabled features, and turns table key presses into
//! [`TableAction`]s for the app.

use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tracing::trace;

use crate::config::Features;
use crate::table::{
    ColumnDef, ColumnRegistry, Customer, Pagination, RowSelection, PAGE_SIZE_OPTIONS,
};
use crate::ui::components::render_toolbar;
use crate::ui::theme::theme;
use crate::visibility::VisibilityMap;

/// Bulk operations offered when rows are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Delete,
    Archive,
}

impl BulkAction {
    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkAction::Delete => "Deleted",
            BulkAction::Archive => "Archived",
        }
    }
}

/// Actions that can be returned from the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Open the column editor.
    OpenColumnEditor,
    /// Open the overflow menu for a row.
    OpenRowMenu(usize),
    /// Activate the hover-revealed action of a row.
    Activate(usize),
    /// Run a bulk action on the given rows.
    Bulk(BulkAction, Vec<usize>),
}

/// The customer table.
pub struct CustomerTableView {
    customers: Vec<Customer>,
    registry: ColumnRegistry,
    /// Committed column visibility, as last handed to the view.
    visibility: VisibilityMap,
    pagination: Pagination,
    selection: RowSelection,
    /// Cursor position within the visible rows.
    cursor: usize,
    table_state: TableState,
    /// Screen row of the cursor at the last render.
    cursor_y: u16,
}

impl CustomerTableView {
    /// Create a table over `customers`.
    pub fn new(customers: Vec<Customer>, registry: ColumnRegistry, page_size: usize) -> Self {
        let pagination = Pagination::new(customers.len(), page_size);
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            customers,
            registry,
            visibility: VisibilityMap::new(),
            pagination,
            selection: RowSelection::new(),
            cursor: 0,
            table_state,
            cursor_y: 0,
        }
    }

    /// Apply a committed visibility map.
    pub fn set_column_visibility(&mut self, visibility: VisibilityMap) {
        self.visibility = visibility;
    }

    pub fn column_visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// Registered columns that are currently visible, in display order.
    pub fn visible_columns(&self) -> Vec<&ColumnDef> {
        self.registry
            .iter()
            .filter(|c| self.visibility.is_visible(&c.id))
            .collect()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    pub fn customer(&self, row: usize) -> Option<&Customer> {
        self.customers.get(row)
    }

    /// Screen row of the cursor at the last render.
    pub fn cursor_y(&self) -> u16 {
        self.cursor_y
    }

    /// Rows currently on screen: the current page, or everything when
    /// pagination is switched off.
    pub fn visible_range(&self, features: &Features) -> Range<usize> {
        if self.pagination.is_visible(features.pagination) {
            self.pagination.range()
        } else {
            0..self.customers.len()
        }
    }

    /// Absolute index of the row under the cursor.
    pub fn cursor_row(&self, features: &Features) -> Option<usize> {
        let range = self.visible_range(features);
        let row = range.start + self.cursor;
        range.contains(&row).then_some(row)
    }

    /// Keep the cursor inside the visible rows after a paging or feature change.
    pub fn clamp_cursor(&mut self, features: &Features) {
        let len = self.visible_range(features).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.table_state.select(Some(self.cursor));
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.table_state = TableState::default();
        self.table_state.select(Some(0));
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent, features: &Features) -> Option<TableAction> {
        let paginated = self.pagination.is_visible(features.pagination);
        trace!(?key, "Table key");

        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                if self.cursor + 1 < self.visible_range(features).len() {
                    self.cursor += 1;
                    self.table_state.select(Some(self.cursor));
                }
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                self.table_state.select(Some(self.cursor));
            }
            (KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::Right, _) if paginated => {
                if self.pagination.next_page() {
                    self.reset_cursor();
                }
            }
            (KeyCode::Char('p'), KeyModifiers::NONE) | (KeyCode::Left, _) if paginated => {
                if self.pagination.prev_page() {
                    self.reset_cursor();
                }
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) if paginated => {
                self.pagination.first_page();
                self.reset_cursor();
            }
            (KeyCode::Char('G'), _) if paginated => {
                self.pagination.last_page();
                self.reset_cursor();
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) if paginated => {
                self.pagination.cycle_page_size();
                self.reset_cursor();
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) if features.row_checkboxes => {
                if let Some(row) = self.cursor_row(features) {
                    self.selection.toggle(row);
                }
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) if features.row_checkboxes => {
                let range = self.visible_range(features);
                self.selection.toggle_page(range);
            }
            (KeyCode::Char('c'), KeyModifiers::NONE) if features.edit_columns => {
                return Some(TableAction::OpenColumnEditor);
            }
            (KeyCode::Char('m'), KeyModifiers::NONE) if features.row_menu => {
                return self.cursor_row(features).map(TableAction::OpenRowMenu);
            }
            (KeyCode::Enter, _) if features.hover_action => {
                return self.cursor_row(features).map(TableAction::Activate);
            }
            (KeyCode::Char('d'), KeyModifiers::NONE) if features.bulk_actions => {
                return self.take_bulk(BulkAction::Delete);
            }
            (KeyCode::Char('x'), KeyModifiers::NONE) if features.bulk_actions => {
                return self.take_bulk(BulkAction::Archive);
            }
            _ => {}
        }
        None
    }

    fn take_bulk(&mut self, action: BulkAction) -> Option<TableAction> {
        if self.selection.is_empty() {
            return None;
        }
        let rows: Vec<usize> = self.selection.rows().collect();
        self.selection.clear();
        Some(TableAction::Bulk(action, rows))
    }

    /// Render the toolbar, table and pagination controls.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, features: &Features) {
        let paginated = self.pagination.is_visible(features.pagination);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(if paginated { 1 } else { 0 }),
            ])
            .split(area);

        self.render_toolbar(frame, chunks[0], features, paginated);
        self.render_table(frame, chunks[1], features);
        if paginated {
            self.render_pagination(frame, chunks[2]);
        }
    }

    fn render_toolbar(&self, frame: &mut Frame, area: Rect, features: &Features, paginated: bool) {
        let total = self.customers.len();
        let page_rows = if paginated {
            self.pagination.page_size()
        } else {
            total
        };
        let caption = self.selection.caption(total, page_rows);
        let label = if paginated {
            self.pagination.label()
        } else {
            String::new()
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(label.len() as u16)])
            .split(area);

        render_toolbar(
            frame,
            chunks[0],
            &caption,
            !self.selection.is_empty(),
            features.bulk_actions,
        );

        if paginated {
            let label = Paragraph::new(label)
                .style(Style::default().fg(theme().muted))
                .alignment(Alignment::Right);
            frame.render_widget(label, chunks[1]);
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, features: &Features) {
        let t = theme();
        let range = self.visible_range(features);
        let cursor_row = self.cursor_row(features);
        let columns = self.visible_columns();

        let mut header_cells: Vec<Cell> = Vec::new();
        let mut widths: Vec<Constraint> = Vec::new();
        if features.row_checkboxes {
            let marker = if self.selection.is_page_selected(range.clone()) {
                "[x]"
            } else if range.clone().any(|r| self.selection.is_selected(r)) {
                "[-]"
            } else {
                "[ ]"
            };
            header_cells.push(Cell::from(marker));
            widths.push(Constraint::Length(3));
        }
        for column in &columns {
            header_cells.push(Cell::from(column.label.clone()));
            widths.push(Constraint::Length(column.width));
        }
        if features.hover_action {
            header_cells.push(Cell::from(""));
            widths.push(Constraint::Length(6));
        }
        if features.row_menu {
            header_cells.push(Cell::from(""));
            widths.push(Constraint::Length(1));
        }

        let rows: Vec<Row> = self.customers[range.clone()]
            .iter()
            .enumerate()
            .map(|(offset, customer)| {
                let row_index = range.start + offset;
                let mut cells: Vec<Cell> = Vec::new();
                if features.row_checkboxes {
                    let selected = self.selection.is_selected(row_index);
                    cells.push(if selected {
                        Cell::from("[x]").style(Style::default().fg(t.success))
                    } else {
                        Cell::from("[ ]")
                    });
                }
                for column in &columns {
                    cells.push(Cell::from(customer.cell(&column.id).unwrap_or("").to_string()));
                }
                if features.hover_action {
                    if cursor_row == Some(row_index) {
                        cells.push(Cell::from("[Open]").style(Style::default().fg(t.accent)));
                    } else {
                        cells.push(Cell::from(""));
                    }
                }
                if features.row_menu {
                    cells.push(Cell::from("⋮"));
                }
                Row::new(cells)
            })
            .collect();

        let header =
            Row::new(header_cells).style(Style::default().fg(Color::Black).bg(t.header_bg));

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(t.border)),
            )
            .highlight_style(
                Style::default()
                    .bg(t.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(table, area, &mut self.table_state);

        // Top border + header, then the rows scrolled by the table state
        let visible_offset = self.cursor.saturating_sub(self.table_state.offset()) as u16;
        self.cursor_y = area.y + 2 + visible_offset;
    }

    fn render_pagination(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let has_prev = self.pagination.page_index() > 0;
        let has_next = self.pagination.page_index() + 1 < self.pagination.page_count();
        let arrow = |enabled: bool, symbol: &'static str| {
            let color = if enabled { t.fg } else { t.muted };
            Span::styled(symbol, Style::default().fg(color))
        };

        let options = PAGE_SIZE_OPTIONS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("/");

        let line = Line::from(vec![
            Span::styled("Rows per page: ", Style::default().fg(t.muted)),
            Span::styled(
                self.pagination.page_size().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", options), Style::default().fg(t.muted)),
            Span::raw("   "),
            Span::raw(self.pagination.label()),
            Span::raw("   "),
            arrow(has_prev, "‹"),
            Span::raw(" "),
            arrow(has_next, "›"),
        ]);

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }
}
