//! Row selection for bulk actions.

use std::collections::BTreeSet;
use std::ops::Range;

/// The set of selected row indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    rows: BTreeSet<usize>,
}

impl RowSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Flip the selection state of a row.
    pub fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
    }

    /// Select every row in `page`, or clear them if all are already selected.
    pub fn toggle_page(&mut self, page: Range<usize>) {
        if self.is_page_selected(page.clone()) {
            for row in page {
                self.rows.remove(&row);
            }
        } else {
            self.rows.extend(page);
        }
    }

    /// Check if every row of a non-empty page is selected.
    pub fn is_page_selected(&self, page: Range<usize>) -> bool {
        !page.is_empty() && page.into_iter().all(|row| self.rows.contains(&row))
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of selected rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected row indices in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Toolbar caption, e.g. `3 of 10 Customers selected` or `105 Customers`.
    pub fn caption(&self, total: usize, page_size: usize) -> String {
        if self.rows.is_empty() {
            format!("{} Customers", total)
        } else {
            format!(
                "{} of {} Customers selected",
                self.rows.len(),
                page_size.min(total)
            )
        }
    }
}
