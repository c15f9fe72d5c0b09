//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the customer table view and
//! the popups and bars drawn around it.

mod components;
pub mod theme;
mod views;

pub use components::{
    render_context_help, toolbar_buttons, Button, ButtonVariant, ColumnPicker,
    ColumnPickerAction, RowMenu, RowMenuAction, RowMenuItem, Toast, ToastKind, Toasts,
};
pub use views::{BulkAction, CustomerTableView, TableAction};
