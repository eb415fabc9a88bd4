//! List pagination.

use serde::{Deserialize, Serialize};

/// Pagination state for a fetched list.
///
/// Only the raw figures are stored; page counts and navigation flags are
/// derived on demand so they cannot drift from the stored totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-indexed.
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total items across all pages, as reported by the backend.
    pub total: i64,
}

impl Pagination {
    /// Create pagination at page 1 with no items yet.
    pub fn new(per_page: i64) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total: 0,
        }
    }

    /// Total number of pages (at least 1).
    pub fn total_pages(&self) -> i64 {
        if self.total == 0 {
            1
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Move to a page, clamped to the valid range.
    pub fn set_page(&mut self, page: i64) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Record a new total and clamp the current page into range.
    pub fn set_total(&mut self, total: i64) {
        self.total = total.max(0);
        self.page = self.page.clamp(1, self.total_pages());
    }

    /// Jump back to the first page (filters changed).
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(12)
    }
}
