//! Paginated result sets.

use serde::Serialize;

/// Fixed number of rows per listing page.
pub const PAGE_SIZE: u32 = 10;

/// One page of a filtered listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    /// Rows on the requested page
    pub items: Vec<T>,

    /// Rows matching the filter across all pages
    pub total_count: u64,

    /// Requested page, starting at 1
    pub page: u32,
}

impl<T> Page<T> {
    /// Number of pages needed for `total_count` rows.
    pub fn total_pages(&self) -> u32 {
        self.total_count.div_ceil(u64::from(PAGE_SIZE)) as u32
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Row offset of a 1-based page.
pub(crate) fn offset(page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(PAGE_SIZE)
}
