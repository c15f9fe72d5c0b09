//! Application views (screens).

mod table;

pub use table::{BulkAction, CustomerTableView, TableAction};
