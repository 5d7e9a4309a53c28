//! Grid pagination
//!
//! Pages are 1-based. A grid with no visible recipes still has page 1, which
//! renders the empty state.

use crate::error::CatalogError;

/// Cards per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Current page of the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current: usize,
}

impl Pagination {
    /// Start on page 1; a zero page size is bumped to 1
    #[inline]
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages needed for `item_count` items
    #[inline]
    #[must_use]
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size)
    }

    /// Jump to `page`
    ///
    /// # Errors
    /// - `CatalogError::PageOutOfRange` if `page` is not in `1..=total_pages`
    ///   (page 1 is always accepted)
    pub fn go_to(&mut self, page: usize, item_count: usize) -> Result<(), CatalogError> {
        let total = self.total_pages(item_count);
        if page == 0 || page > total.max(1) {
            return Err(CatalogError::PageOutOfRange { page, total });
        }
        self.current = page;
        Ok(())
    }

    #[inline]
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Pull the current page back inside the valid range after the item
    /// count shrank
    #[inline]
    pub fn clamp(&mut self, item_count: usize) {
        self.current = self.current.min(self.total_pages(item_count).max(1));
    }

    /// Whether the "previous" button is enabled
    #[inline]
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether the "next" button is enabled
    #[inline]
    #[must_use]
    pub fn has_next(&self, item_count: usize) -> bool {
        self.current < self.total_pages(item_count)
    }

    /// Index range of the current page within `item_count` items
    #[must_use]
    pub fn range(&self, item_count: usize) -> std::ops::Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(item_count);
        let end = (start + self.page_size).min(item_count);
        start..end
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let pages = Pagination::default();
        assert_eq!(pages.total_pages(0), 0);
        assert_eq!(pages.total_pages(6), 1);
        assert_eq!(pages.total_pages(7), 2);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut pages = Pagination::default();
        assert!(pages.go_to(2, 13).is_ok());
        assert_eq!(pages.current(), 2);
        assert_eq!(
            pages.go_to(4, 13),
            Err(CatalogError::PageOutOfRange { page: 4, total: 3 })
        );
        assert!(pages.go_to(0, 13).is_err());
        assert_eq!(pages.current(), 2);
    }

    #[test]
    fn empty_grid_keeps_page_one() {
        let mut pages = Pagination::default();
        assert!(pages.go_to(1, 0).is_ok());
        assert!(pages.go_to(2, 0).is_err());
        assert!(!pages.has_previous());
        assert!(!pages.has_next(0));
        assert_eq!(pages.range(0), 0..0);
    }

    #[test]
    fn range_and_buttons() {
        let mut pages = Pagination::new(6);
        assert_eq!(pages.range(8), 0..6);
        assert!(pages.has_next(8));

        pages.go_to(2, 8).unwrap();
        assert_eq!(pages.range(8), 6..8);
        assert!(pages.has_previous());
        assert!(!pages.has_next(8));
    }

    #[test]
    fn clamp_after_shrink() {
        let mut pages = Pagination::new(2);
        pages.go_to(3, 6).unwrap();
        pages.clamp(3);
        assert_eq!(pages.current(), 2);
        pages.clamp(0);
        assert_eq!(pages.current(), 1);
    }

    #[test]
    fn zero_page_size_is_bumped() {
        assert_eq!(Pagination::new(0).page_size(), 1);
    }
}
