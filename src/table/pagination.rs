//! Page-based navigation over the table rows.

use std::ops::Range;

/// Page sizes offered by the page size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Below this many rows the pagination controls are not rendered.
pub const MIN_ROWS_FOR_PAGINATION: usize = 10;

/// Paging state for a table of `total` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    /// Create pagination starting on the first page.
    ///
    /// A page size outside [`PAGE_SIZE_OPTIONS`] falls back to the smallest option.
    pub fn new(total: usize, page_size: usize) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            PAGE_SIZE_OPTIONS[0]
        };
        Self {
            page_index: 0,
            page_size,
            total,
        }
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of rows.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages; an empty table still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Row indices shown on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// Advance one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page_index + 1 < self.page_count() {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page_index > 0 {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) {
        self.page_index = self.page_count() - 1;
    }

    /// Change the page size and return to the first page.
    ///
    /// Sizes outside [`PAGE_SIZE_OPTIONS`] are ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page_index = 0;
        true
    }

    /// Switch to the next page size option, wrapping around.
    pub fn cycle_page_size(&mut self) {
        let pos = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&s| s == self.page_size)
            .unwrap_or(0);
        let next = PAGE_SIZE_OPTIONS[(pos + 1) % PAGE_SIZE_OPTIONS.len()];
        self.set_page_size(next);
    }

    /// Label such as `1-10 of 105`.
    pub fn label(&self) -> String {
        let range = self.range();
        if range.is_empty() {
            return format!("0-0 of {}", self.total);
        }
        format!("{}-{} of {}", range.start + 1, range.end, self.total)
    }

    /// Whether the pagination controls should be drawn.
    pub fn is_visible(&self, enabled: bool) -> bool {
        enabled && self.total >= MIN_ROWS_FOR_PAGINATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let p = Pagination::new(105, 10);
        assert_eq!(p.page_index(), 0);
        assert_eq!(p.page_count(), 11);
        assert_eq!(p.range(), 0..10);
        assert_eq!(p.label(), "1-10 of 105");
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        let p = Pagination::new(105, 7);
        assert_eq!(p.page_size(), 10);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut p = Pagination::new(25, 10);
        assert!(!p.prev_page());
        assert!(p.next_page());
        assert!(p.next_page());
        assert!(!p.next_page());
        assert_eq!(p.range(), 20..25);
        assert_eq!(p.label(), "21-25 of 25");

        p.first_page();
        assert_eq!(p.page_index(), 0);
        p.last_page();
        assert_eq!(p.page_index(), 2);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut p = Pagination::new(105, 10);
        p.next_page();
        assert!(p.set_page_size(50));
        assert_eq!(p.page_index(), 0);
        assert_eq!(p.page_count(), 3);
        assert!(!p.set_page_size(15));
        assert_eq!(p.page_size(), 50);
    }

    #[test]
    fn test_cycle_page_size_wraps() {
        let mut p = Pagination::new(105, 10);
        p.cycle_page_size();
        assert_eq!(p.page_size(), 20);
        p.cycle_page_size();
        p.cycle_page_size();
        assert_eq!(p.page_size(), 100);
        p.cycle_page_size();
        assert_eq!(p.page_size(), 10);
    }

    #[test]
    fn test_empty_table() {
        let mut p = Pagination::new(0, 10);
        assert_eq!(p.page_count(), 1);
        assert_eq!(p.range(), 0..0);
        assert_eq!(p.label(), "0-0 of 0");
        p.last_page();
        assert_eq!(p.page_index(), 0);
    }

    #[test]
    fn test_visibility() {
        assert!(Pagination::new(105, 10).is_visible(true));
        assert!(!Pagination::new(105, 10).is_visible(false));
        assert!(!Pagination::new(9, 10).is_visible(true));
        assert!(Pagination::new(10, 10).is_visible(true));
    }
}
