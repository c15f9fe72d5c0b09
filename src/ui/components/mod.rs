//! Reusable UI components.

mod column_picker;
mod help_bar;
mod row_menu;
mod toast;
mod toolbar;

pub use column_picker::{ColumnPicker, ColumnPickerAction};
pub use help_bar::render_context_help;
pub use row_menu::{RowMenu, RowMenuAction, RowMenuItem};
pub use toast::{Toast, ToastKind, Toasts};
pub use toolbar::{render_toolbar, toolbar_buttons, Button, ButtonVariant};
