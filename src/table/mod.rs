//! Table model: column definitions, demo data, paging and row selection.
//!
//! Nothing here knows about rendering; the UI layer reads these types and
//! draws them.

mod columns;
mod customers;
mod pagination;
mod selection;

pub use columns::{ColumnDef, ColumnRegistry};
pub use customers::{generate_customers, Customer, DEFAULT_ROW_COUNT};
pub use pagination::{Pagination, MIN_ROWS_FOR_PAGINATION, PAGE_SIZE_OPTIONS};
pub use selection::RowSelection;
