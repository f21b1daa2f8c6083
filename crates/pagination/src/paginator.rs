use crate::error::PaginationError;
use crate::state::{PaginationConfig, PaginationState};
use std::num::NonZeroUsize;

/// Windowed view over an in-memory ordered sequence.
///
/// Only the current page and the page size are stored. Total pages, the
/// visible slice and the display indices are derived on every read, so they can
/// never drift from the backing sequence.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    current_page: usize,
    page_size: NonZeroUsize,
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>, config: PaginationConfig) -> Result<Self, PaginationError> {
        config.validate()?;
        let page_size = NonZeroUsize::new(config.initial_page_size)
            .ok_or(PaginationError::InvalidPageSize(config.initial_page_size))?;
        let current_page = usize::try_from(config.initial_page)
            .map_err(|_| PaginationError::InvalidInitialPage(config.initial_page))?;

        Ok(Self {
            items,
            current_page,
            page_size,
        })
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    /// The current page, healed on read.
    ///
    /// A stored page past the last one (the sequence shrank) reads as the last
    /// page. With an empty sequence there is no last page, and the stored value
    /// is reported unchanged.
    pub fn current_page(&self) -> usize {
        let total_pages = self.total_pages();
        if total_pages > 0 && self.current_page > total_pages {
            total_pages
        } else {
            self.current_page
        }
    }

    /// The items on the current page.
    pub fn items(&self) -> &[T] {
        let end = self.window_end();
        let start = self.window_start().min(end);
        &self.items[start..end]
    }

    /// 1-based position of the first item on the page.
    pub fn start_index(&self) -> usize {
        self.window_start().saturating_add(1)
    }

    /// Count of items up to and including the last one on the page.
    pub fn end_index(&self) -> usize {
        self.window_end()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page() > 1
    }

    /// Moves to `page`, clamped into `[1, max(total_pages, 1)]`.
    pub fn go_to_page(&mut self, page: i64) {
        let target = if page < 1 {
            1
        } else {
            usize::try_from(page).unwrap_or(usize::MAX)
        };
        self.current_page = target.min(self.total_pages().max(1));
    }

    pub fn go_to_next(&mut self) {
        self.go_to_page(to_page_number(self.current_page()).saturating_add(1));
    }

    pub fn go_to_previous(&mut self) {
        self.go_to_page(to_page_number(self.current_page()).saturating_sub(1));
    }

    pub fn go_to_first(&mut self) {
        self.go_to_page(1);
    }

    pub fn go_to_last(&mut self) {
        self.go_to_page(to_page_number(self.total_pages()));
    }

    /// Changes the page size and returns to the first page.
    ///
    /// A size of 0 is rejected and leaves the paginator untouched.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), PaginationError> {
        self.page_size = NonZeroUsize::new(size).ok_or(PaginationError::InvalidPageSize(size))?;
        self.current_page = 1;
        Ok(())
    }

    /// Replaces the backing sequence, keeping the current page where it is still
    /// valid and healing it onto the last page otherwise.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = self.current_page();
    }

    /// The whole backing sequence, regardless of paging.
    pub fn all_items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn state(&self) -> PaginationState {
        PaginationState {
            current_page: self.current_page(),
            page_size: self.page_size(),
            total_pages: self.total_pages(),
            total_items: self.total_items(),
            start_index: self.start_index(),
            end_index: self.end_index(),
            has_next_page: self.has_next_page(),
            has_previous_page: self.has_previous_page(),
        }
    }

    /// 0-based offset of the page's first item. May lie past the end of an
    /// empty sequence when a stale page is kept.
    fn window_start(&self) -> usize {
        self.current_page()
            .saturating_sub(1)
            .saturating_mul(self.page_size.get())
    }

    fn window_end(&self) -> usize {
        self.window_start()
            .saturating_add(self.page_size.get())
            .min(self.items.len())
    }
}

fn to_page_number(page: usize) -> i64 {
    i64::try_from(page).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paginator(len: usize, page_size: usize) -> Paginator<usize> {
        Paginator::new((1..=len).collect(), PaginationConfig::with_page_size(page_size)).unwrap()
    }

    #[test]
    fn test_starts_on_configured_page() {
        let pager = Paginator::new((1..=25).collect::<Vec<_>>(), PaginationConfig::new(10, 2)).unwrap();
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.page_size(), 10);
        assert_eq!(pager.total_pages(), 3);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = Paginator::new(vec![1, 2, 3], PaginationConfig::new(0, 1)).unwrap_err();
        assert_eq!(err, PaginationError::InvalidPageSize(0));

        let err = Paginator::new(vec![1, 2, 3], PaginationConfig::new(10, 0)).unwrap_err();
        assert_eq!(err, PaginationError::InvalidInitialPage(0));
    }

    #[test]
    fn test_go_to_page_clamps_both_ends() {
        let mut pager = paginator(25, 10);

        pager.go_to_page(99);
        assert_eq!(pager.current_page(), 3);

        pager.go_to_page(-5);
        assert_eq!(pager.current_page(), 1);

        pager.go_to_page(i64::MAX);
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_second_page_window() {
        let mut pager = paginator(25, 10);
        pager.go_to_page(2);

        assert_eq!(pager.items().len(), 10);
        assert_eq!(pager.items().first(), Some(&11));
        assert_eq!(pager.start_index(), 11);
        assert_eq!(pager.end_index(), 20);
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut pager = paginator(25, 10);
        pager.go_to_last();

        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.items(), &[21, 22, 23, 24, 25]);
        assert_eq!(pager.start_index(), 21);
        assert_eq!(pager.end_index(), 25);
        assert!(!pager.has_next_page());
        assert!(pager.has_previous_page());
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut pager = paginator(25, 10);

        pager.go_to_previous();
        assert_eq!(pager.current_page(), 1);

        pager.go_to_next();
        pager.go_to_next();
        pager.go_to_next();
        assert_eq!(pager.current_page(), 3);

        pager.go_to_first();
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_set_page_size_resets_to_first_page() {
        let mut pager = paginator(25, 10);
        pager.go_to_page(3);

        pager.set_page_size(5).unwrap();

        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 5);
        assert_eq!(pager.items(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_set_page_size_rejects_zero() {
        let mut pager = paginator(25, 10);
        pager.go_to_page(2);

        assert_eq!(pager.set_page_size(0), Err(PaginationError::InvalidPageSize(0)));
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.page_size(), 10);
    }

    #[test]
    fn test_shrinking_sequence_heals_current_page() {
        let mut pager = paginator(25, 10);
        pager.go_to_page(3);

        pager.set_items((1..=5).collect());

        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.items(), &[1, 2, 3, 4, 5]);
        assert_eq!(pager.start_index(), 1);
        assert_eq!(pager.end_index(), 5);
    }

    #[test]
    fn test_emptied_sequence_keeps_stale_page() {
        let mut pager = paginator(25, 10);
        pager.go_to_page(3);

        pager.set_items(Vec::new());

        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.current_page(), 3);
        assert!(pager.items().is_empty());
        assert_eq!(pager.end_index(), 0);

        // Growing back keeps the stale page where it is still valid.
        pager.set_items((1..=30).collect());
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.items().first(), Some(&21));
    }

    #[test]
    fn test_go_to_page_on_empty_sequence_lands_on_first() {
        let mut pager = paginator(0, 10);
        pager.go_to_page(4);

        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 0);
        assert!(!pager.has_next_page());
        assert!(!pager.has_previous_page());
    }

    #[test]
    fn test_state_snapshot() {
        let mut pager = paginator(25, 10);
        pager.go_to_page(2);

        let state = pager.state();
        assert_eq!(
            state,
            PaginationState {
                current_page: 2,
                page_size: 10,
                total_pages: 3,
                total_items: 25,
                start_index: 11,
                end_index: 20,
                has_next_page: true,
                has_previous_page: true,
            }
        );
    }

    proptest! {
        #[test]
        fn go_to_page_is_idempotent(len in 0usize..200, size in 1usize..50, page in any::<i64>()) {
            let mut once = paginator(len, size);
            once.go_to_page(page);

            let mut twice = paginator(len, size);
            twice.go_to_page(page);
            let landed = twice.current_page();
            twice.go_to_page(i64::try_from(landed).unwrap());

            prop_assert_eq!(once.state(), twice.state());
        }

        #[test]
        fn current_page_stays_in_bounds(len in 1usize..200, size in 1usize..50, page in any::<i64>()) {
            let mut pager = paginator(len, size);
            pager.go_to_page(page);

            prop_assert!(pager.current_page() >= 1);
            prop_assert!(pager.current_page() <= pager.total_pages().max(1));
            prop_assert!(pager.start_index() - 1 <= pager.end_index());
            prop_assert!(pager.end_index() <= pager.total_items());
        }

        #[test]
        fn set_page_size_always_returns_to_first(len in 0usize..200, page in any::<i64>(), size in 1usize..50) {
            let mut pager = paginator(len, 7);
            pager.go_to_page(page);
            pager.set_page_size(size).unwrap();

            prop_assert_eq!(pager.current_page(), 1);
        }
    }
}
