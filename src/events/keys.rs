//! Key hints per input context.

/// Which part of the UI currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The customer table.
    Table,
    /// The column visibility editor.
    ColumnEditor,
    /// The per-row overflow menu.
    RowMenu,
}

/// Short key hints for the footer, with keys in brackets.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Table => {
            "[j/k] move  [n/p] page  [s] page size  [space] select  [a] select page  \
             [c] columns  [m] menu  [1-6] features  [q] quit"
        }
        KeyContext::ColumnEditor => {
            "[j/k] move  [space] toggle  [a] show all  [enter] save  [esc] cancel"
        }
        KeyContext::RowMenu => "[j/k] move  [enter] choose  [esc] close",
    }
}
