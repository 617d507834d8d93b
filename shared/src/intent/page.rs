//! Client-side pagination
//!
//! The full filtered list is fetched once and sliced here. Pages start at 1.

use serde::Serialize;

/// Page size used by the menu and reservation screens
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One slice of a list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    /// Items on this page
    pub data: &'a [T],
    /// Current page (from 1)
    pub page: usize,
    /// Page size
    pub limit: usize,
    /// Total item count
    pub total: usize,
    /// Total pages (0 for an empty list)
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Current page of a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// `page_size` of 0 is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    /// Everything on one page
    pub fn unbounded() -> Self {
        Self {
            page_size: usize::MAX,
            current: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Back to the first page (filter changed)
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Jump to a page, clamped into `[1, last]`
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current = self.clamp(page, len);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.current.saturating_add(1), len);
    }

    pub fn prev(&mut self, len: usize) {
        self.go_to(self.current.saturating_sub(1), len);
    }

    fn clamp(&self, page: usize, len: usize) -> usize {
        page.clamp(1, self.total_pages(len).max(1))
    }

    /// Slice the current page out of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        let page = self.clamp(self.current, items.len());
        let start = (page - 1).saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());

        Page {
            data: &items[start..end],
            page,
            limit: self.page_size,
            total: items.len(),
            total_pages: self.total_pages(items.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<u32> {
        (1..=12).collect()
    }

    #[test]
    fn twelve_items_page_size_five() {
        let items = items();
        let mut pager = Pager::new(5);

        assert_eq!(pager.slice(&items).data, &[1, 2, 3, 4, 5]);
        assert_eq!(pager.total_pages(items.len()), 3);

        pager.go_to(3, items.len());
        assert_eq!(pager.slice(&items).data, &[11, 12]);
    }

    #[test]
    fn page_beyond_last_clamps() {
        let items = items();
        let mut pager = Pager::new(5);
        pager.go_to(9, items.len());
        assert_eq!(pager.current(), 3);
        assert_eq!(pager.slice(&items).data, &[11, 12]);

        pager.go_to(0, items.len());
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn shrinking_list_clamps_current_page_on_slice() {
        let mut pager = Pager::new(5);
        pager.go_to(3, 12);
        let shorter: Vec<u32> = (1..=6).collect();
        let page = pager.slice(&shorter);
        assert_eq!(page.page, 2);
        assert_eq!(page.data, &[6]);
    }

    #[test]
    fn next_and_prev_stay_in_range() {
        let mut pager = Pager::new(5);
        pager.prev(12);
        assert_eq!(pager.current(), 1);
        pager.next(12);
        pager.next(12);
        pager.next(12);
        assert_eq!(pager.current(), 3);
        let items = items();
        let page = pager.slice(&items);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn empty_list() {
        let pager = Pager::new(5);
        let empty: Vec<u32> = Vec::new();
        let page = pager.slice(&empty);
        assert!(page.data.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn unbounded_holds_everything() {
        let pager = Pager::unbounded();
        let items = items();
        let page = pager.slice(&items);
        assert_eq!(page.data.len(), 12);
        assert_eq!(page.total_pages, 1);
    }
}
