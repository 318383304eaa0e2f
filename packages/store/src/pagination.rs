//! Incremental "load more" reveal over an already-filtered list.

use std::ops::Range;

/// Recipes revealed per "load more" click.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Reveals `items` one page at a time.
///
/// `displayed` never exceeds `items.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationView<T> {
    items: Vec<T>,
    page_size: usize,
    displayed: usize,
}

impl<T> Default for PaginationView<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> PaginationView<T> {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            displayed: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the filtered set and show its first page.
    pub fn set_items(&mut self, items: Vec<T>) -> Range<usize> {
        self.items = items;
        self.reset();
        self.reveal_next()
    }

    /// Hide everything revealed so far.
    pub fn reset(&mut self) {
        self.displayed = 0;
    }

    /// Reveal up to one more page, returning the newly revealed positions.
    /// The range is shorter than a page at the end and empty once exhausted.
    pub fn reveal_next(&mut self) -> Range<usize> {
        let start = self.displayed;
        let end = start.saturating_add(self.page_size).min(self.items.len());
        self.displayed = end;
        start..end
    }

    pub fn has_more(&self) -> bool {
        self.displayed < self.items.len()
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Everything revealed so far.
    pub fn visible(&self) -> &[T] {
        &self.items[..self.displayed]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_full_page_then_remainder() {
        let mut view = PaginationView::new(6);
        let first = view.set_items((0..10).collect());

        assert_eq!(first, 0..6);
        assert_eq!(view.visible(), &[0, 1, 2, 3, 4, 5]);
        assert!(view.has_more());

        let second = view.reveal_next();
        assert_eq!(second, 6..10);
        assert_eq!(view.displayed(), 10);
        assert!(!view.has_more());
    }

    #[test]
    fn test_reveal_past_end_is_empty() {
        let mut view = PaginationView::new(6);
        view.set_items(vec!['a', 'b']);

        assert!(!view.has_more());
        assert!(view.reveal_next().is_empty());
        assert_eq!(view.displayed(), 2);
    }

    #[test]
    fn test_reset_hides_everything() {
        let mut view = PaginationView::new(3);
        view.set_items((0..7).collect());
        view.reveal_next();
        assert_eq!(view.displayed(), 6);

        view.reset();
        assert_eq!(view.displayed(), 0);
        assert!(view.visible().is_empty());
        assert!(view.has_more());
    }

    #[test]
    fn test_new_items_restart_from_first_page() {
        let mut view = PaginationView::new(2);
        view.set_items((0..5).collect());
        view.reveal_next();
        assert_eq!(view.displayed(), 4);

        view.set_items(vec![10, 11, 12]);
        assert_eq!(view.visible(), &[10, 11]);
        assert!(view.has_more());
    }

    #[test]
    fn test_empty_set_has_nothing_more() {
        let mut view: PaginationView<u8> = PaginationView::default();
        assert_eq!(view.page_size(), DEFAULT_PAGE_SIZE);
        assert!(view.set_items(Vec::new()).is_empty());
        assert!(!view.has_more());
        assert!(view.is_empty());
    }

    #[test]
    fn test_zero_page_size_is_normalized() {
        let mut view = PaginationView::new(0);
        view.set_items(vec![1, 2]);
        assert_eq!(view.page_size(), 1);
        assert_eq!(view.displayed(), 1);
    }

    #[test]
    fn test_huge_page_size_saturates() {
        let mut view = PaginationView::new(usize::MAX);
        assert_eq!(view.set_items(vec![1, 2, 3]), 0..3);

        assert!(view.reveal_next().is_empty());
        assert_eq!(view.displayed(), 3);
        assert!(!view.has_more());
    }
}
