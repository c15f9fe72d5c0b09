//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: [`App::update`]
//! consumes events, [`App::view`] draws the current state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info, trace};

use crate::config::{Feature, Features, Settings};
use crate::events::{Event, KeyContext};
use crate::storage::KeyValueStore;
use crate::table::{generate_customers, ColumnRegistry};
use crate::ui::theme::theme;
use crate::ui::{
    render_context_help, ColumnPicker, ColumnPickerAction, CustomerTableView, RowMenu,
    RowMenuAction, RowMenuItem, TableAction, Toasts,
};
use crate::visibility::VisibilityStore;

/// Which part of the UI has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Browsing the table.
    #[default]
    Table,
    /// The column editor is open.
    ColumnEditor,
    /// A row's overflow menu is open.
    RowMenu,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App<S: KeyValueStore> {
    state: AppState,
    should_quit: bool,
    features: Features,
    table_view: CustomerTableView,
    visibility: VisibilityStore<S>,
    column_picker: ColumnPicker,
    row_menu: RowMenu,
    toasts: Toasts,
}

impl<S: KeyValueStore> App<S> {
    /// Create the application, loading column visibility from `storage`.
    pub fn new(settings: &Settings, storage: S) -> Self {
        debug!(rows = settings.row_count, "Creating application instance");

        let visibility = VisibilityStore::open(storage, settings.storage_key.clone());
        let mut table_view = CustomerTableView::new(
            generate_customers(settings.row_count),
            ColumnRegistry::customers(),
            settings.page_size,
        );
        table_view.set_column_visibility(visibility.committed().clone());

        Self {
            state: AppState::Table,
            should_quit: false,
            features: settings.features,
            table_view,
            visibility,
            column_picker: ColumnPicker::new(),
            row_menu: RowMenu::new(),
            toasts: Toasts::new(),
        }
    }

    /// Which part of the UI currently has focus.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Check if the main loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current feature switches.
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// The customer table and its paging and selection state.
    pub fn table_view(&self) -> &CustomerTableView {
        &self.table_view
    }

    /// The committed column visibility.
    pub fn visibility(&self) -> &VisibilityStore<S> {
        &self.visibility
    }

    /// The "Edit columns" panel.
    pub fn column_picker(&self) -> &ColumnPicker {
        &self.column_picker
    }

    /// Pending notifications.
    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Give back the visibility storage, consuming the app.
    pub fn into_storage(self) -> S {
        self.visibility.into_storage()
    }

    /// Handle an incoming event and update state.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Tick => self.toasts.tick(),
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resized");
            }
            Event::Quit => self.quit(),
        }
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.state = AppState::Exiting;
        self.should_quit = true;
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.state {
            AppState::Table => self.handle_table_key(key),
            AppState::ColumnEditor => {
                let registry = self.table_view.registry().clone();
                match self.column_picker.handle_input(key, &registry) {
                    Some(ColumnPickerAction::Save) => self.save_columns(),
                    Some(ColumnPickerAction::Cancel) => {
                        self.state = AppState::Table;
                    }
                    None => {}
                }
            }
            AppState::RowMenu => match self.row_menu.handle_input(key) {
                Some(RowMenuAction::Choose(item, row)) => {
                    self.state = AppState::Table;
                    self.row_menu_chosen(item, row);
                }
                Some(RowMenuAction::Close) => {
                    self.state = AppState::Table;
                }
                None => {}
            },
            AppState::Exiting => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        if let (KeyCode::Char(digit), KeyModifiers::NONE) = (key.code, key.modifiers) {
            if let Some(feature) = Feature::from_digit(digit) {
                self.toggle_feature(feature);
                return;
            }
        }
        if let (KeyCode::Char('q'), KeyModifiers::NONE) = (key.code, key.modifiers) {
            self.quit();
            return;
        }

        let features = self.features;
        match self.table_view.handle_input(key, &features) {
            Some(TableAction::OpenColumnEditor) => {
                self.column_picker
                    .open(&self.visibility, self.table_view.registry());
                self.state = AppState::ColumnEditor;
            }
            Some(TableAction::OpenRowMenu(row)) => {
                self.row_menu.open(row);
                self.state = AppState::RowMenu;
            }
            Some(TableAction::Activate(row)) => {
                if let Some(customer) = self.table_view.customer(row) {
                    self.toasts.info(format!("Opened {}", customer.full_name()));
                }
            }
            Some(TableAction::Bulk(action, rows)) => {
                info!(count = rows.len(), ?action, "Bulk action");
                self.toasts
                    .success(format!("{} {} customers", action.past_tense(), rows.len()));
            }
            None => {}
        }
    }

    fn toggle_feature(&mut self, feature: Feature) {
        let enabled = self.features.toggle(feature);
        debug!(?feature, enabled, "Feature switched");
        if feature == Feature::RowCheckboxes && !enabled {
            self.table_view.clear_selection();
        }
        self.table_view.clamp_cursor(&self.features);
        let state = if enabled { "on" } else { "off" };
        self.toasts.info(format!("{} {}", feature.label(), state));
    }

    fn save_columns(&mut self) {
        if self.column_picker.save(&mut self.visibility) {
            self.table_view
                .set_column_visibility(self.visibility.committed().clone());
            self.toasts.success("Column preferences saved");
        }
        self.state = AppState::Table;
    }

    fn row_menu_chosen(&mut self, item: RowMenuItem, row: usize) {
        let Some(customer) = self.table_view.customer(row) else {
            return;
        };
        let name = customer.full_name();
        debug!(?item, row, "Row menu item chosen");
        match item {
            RowMenuItem::Delete => self.toasts.warning(format!("Delete: {}", name)),
            _ => self.toasts.info(format!("{}: {}", item.label(), name)),
        }
    }

    /// Render the current state.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Feature switches
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Toasts
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let title = Paragraph::new(Line::styled(
            "Customers",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, chunks[0]);
        self.render_switches(frame, chunks[1]);

        let features = self.features;
        self.table_view.render(frame, chunks[2], &features);
        self.toasts.render(frame, chunks[3]);
        render_context_help(frame, chunks[4], self.key_context());

        match self.state {
            AppState::ColumnEditor => {
                let registry = self.table_view.registry().clone();
                self.column_picker.render(frame, chunks[2], &registry);
            }
            AppState::RowMenu => {
                let anchor = self.table_view.cursor_y();
                self.row_menu.render(frame, chunks[2], anchor);
            }
            AppState::Table | AppState::Exiting => {}
        }
    }

    fn key_context(&self) -> KeyContext {
        match self.state {
            AppState::ColumnEditor => KeyContext::ColumnEditor,
            AppState::RowMenu => KeyContext::RowMenu,
            AppState::Table | AppState::Exiting => KeyContext::Table,
        }
    }

    fn render_switches(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut spans = Vec::new();
        for (i, feature) in Feature::ALL.iter().enumerate() {
            let enabled = self.features.is_enabled(*feature);
            let (mark, color) = if enabled {
                ("●", t.success)
            } else {
                ("○", t.muted)
            };
            spans.push(Span::styled(format!("[{}]", i + 1), Style::default().fg(t.accent)));
            spans.push(Span::styled(format!(" {} ", mark), Style::default().fg(color)));
            spans.push(Span::raw(feature.label()));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::visibility::DEFAULT_STORAGE_KEY;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_app() -> App<MemoryStore> {
        App::new(&Settings::default(), MemoryStore::new())
    }

    fn screen_text(app: &mut App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_app_new() {
        let app = test_app();
        assert_eq!(app.state(), AppState::Table);
        assert!(!app.should_quit());
        assert_eq!(app.table_view().pagination().total(), 105);
    }

    #[test]
    fn test_loads_committed_visibility() {
        let storage = MemoryStore::with_slot(DEFAULT_STORAGE_KEY, r#"{"phone": false}"#);
        let app = App::new(&Settings::default(), storage);
        assert!(!app.table_view().column_visibility().is_visible("phone"));
        assert_eq!(app.table_view().visible_columns().len(), 6);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());
        assert_eq!(app.state(), AppState::Exiting);

        let mut app = test_app();
        app.update(key(KeyCode::Char('c')));
        app.update(Event::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_edit_columns_save_flow() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('c')));
        assert_eq!(app.state(), AppState::ColumnEditor);

        // Hide "phone" (fourth column)
        for _ in 0..3 {
            app.update(key(KeyCode::Char('j')));
        }
        app.update(key(KeyCode::Char(' ')));
        assert!(app.column_picker().editor().is_dirty());
        assert!(app.visibility().committed().is_empty());

        app.update(key(KeyCode::Enter));
        assert_eq!(app.state(), AppState::Table);
        assert!(!app.visibility().is_visible("phone"));
        assert!(!app.table_view().column_visibility().is_visible("phone"));
        assert_eq!(app.visibility().committed().len(), 7);

        let stored = app.into_storage().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed["phone"], serde_json::json!(false));
    }

    #[test]
    fn test_edit_columns_cancel_flow() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('c')));
        app.update(key(KeyCode::Char(' ')));
        app.update(key(KeyCode::Esc));

        assert_eq!(app.state(), AppState::Table);
        assert!(app.visibility().committed().is_empty());
        assert!(app.table_view().column_visibility().is_empty());
    }

    #[test]
    fn test_save_without_changes_keeps_editor_open() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('c')));
        app.update(key(KeyCode::Enter));
        assert_eq!(app.state(), AppState::ColumnEditor);
    }

    #[test]
    fn test_edit_columns_feature_off() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('4')));
        assert!(!app.features().edit_columns);
        app.update(key(KeyCode::Char('c')));
        assert_eq!(app.state(), AppState::Table);
    }

    #[test]
    fn test_row_menu_flow() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('m')));
        assert_eq!(app.state(), AppState::RowMenu);
        app.update(key(KeyCode::Enter));
        assert_eq!(app.state(), AppState::Table);
        assert_eq!(
            app.toasts().latest().unwrap().message,
            "View details: John Doe"
        );
    }

    #[test]
    fn test_bulk_delete_reports() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('a')));
        assert_eq!(app.table_view().selection().count(), 10);
        app.update(key(KeyCode::Char('d')));
        assert!(app.table_view().selection().is_empty());
        assert_eq!(app.toasts().latest().unwrap().message, "Deleted 10 customers");
    }

    #[test]
    fn test_disabling_checkboxes_clears_selection() {
        let mut app = test_app();
        app.update(key(KeyCode::Char(' ')));
        assert_eq!(app.table_view().selection().count(), 1);
        app.update(key(KeyCode::Char('3')));
        assert!(app.table_view().selection().is_empty());
    }

    #[test]
    fn test_hover_action() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('j')));
        app.update(key(KeyCode::Enter));
        assert_eq!(app.toasts().latest().unwrap().message, "Opened Jane Smith");
    }

    #[test]
    fn test_render_table_and_editor() {
        let mut app = test_app();
        let text = screen_text(&mut app);
        assert!(text.contains("Customers"));
        assert!(text.contains("Pagination"));
        assert!(text.contains("1-10 of 105"));

        app.update(key(KeyCode::Char('c')));
        let text = screen_text(&mut app);
        assert!(text.contains("no changes"));
        assert!(text.contains("[enter] Save"));
    }
}
