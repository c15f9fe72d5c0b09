//! Column visibility: the committed preferences and the staged editor.
//!
//! The [`VisibilityStore`] owns the committed map and persists it on every
//! commit. A [`ColumnEditor`] session works on a resolved copy and only
//! touches the store when the user saves.

mod editor;
mod map;
mod store;

pub use editor::ColumnEditor;
pub use map::VisibilityMap;
pub use store::{load as load_visibility, VisibilityStore, DEFAULT_STORAGE_KEY};
