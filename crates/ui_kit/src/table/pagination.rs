//! Stateless pagination math: page counts, the visible page window, and range labels.

use serde::{Deserialize, Serialize};

/// Maximum number of page buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Server-computed paging numbers, shaped like a paginated API response.
///
/// When supplied, these override every locally derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// 1-based current page.
    pub current_page: usize,
    /// Last page number (equals the page count).
    pub last_page: usize,
    /// Page size.
    pub per_page: usize,
    /// Total number of items across all pages.
    pub total: usize,
}

/// Resolved paging numbers for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based current page.
    pub current_page: usize,
    /// Number of pages; zero when there are no items.
    pub total_pages: usize,
    /// Page size, never below one.
    pub per_page: usize,
    /// Total number of items.
    pub total_items: usize,
}

impl PageState {
    /// Derives paging numbers from local inputs.
    pub fn local(total_items: usize, items_per_page: usize, current_page: usize) -> Self {
        let per_page = items_per_page.max(1);
        Self {
            current_page,
            total_pages: total_items.div_ceil(per_page),
            per_page,
            total_items,
        }
    }

    /// Takes paging numbers verbatim from server metadata.
    pub fn from_meta(meta: &PaginationMeta) -> Self {
        Self {
            current_page: meta.current_page,
            total_pages: meta.last_page,
            per_page: meta.per_page.max(1),
            total_items: meta.total,
        }
    }

    /// Metadata wins whenever it is present.
    pub fn resolve(
        total_items: usize,
        items_per_page: usize,
        current_page: usize,
        meta: Option<&PaginationMeta>,
    ) -> Self {
        match meta {
            Some(meta) => Self::from_meta(meta),
            None => Self::local(total_items, items_per_page, current_page),
        }
    }

    /// Returns `true` when there is nothing to page through.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Zero-based index of the first item on the current page.
    pub fn start_index(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Page numbers to render as buttons.
    ///
    /// Shows every page up to [`MAX_VISIBLE_PAGES`]; beyond that, a window starting two pages
    /// before the current one, cut at the last page, then pulled back so it stays full.
    pub fn page_window(&self) -> Vec<usize> {
        if self.total_pages <= MAX_VISIBLE_PAGES {
            return (1..=self.total_pages).collect();
        }
        let start = self.current_page.saturating_sub(2).max(1);
        let end = start.saturating_add(MAX_VISIBLE_PAGES - 1).min(self.total_pages);
        let start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        (start..=end).collect()
    }

    /// 1-based inclusive item range shown on the current page, `None` when there are no items.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.total_items == 0 {
            return None;
        }
        let start = self.start_index();
        Some((
            start.saturating_add(1),
            start.saturating_add(self.per_page).min(self.total_items),
        ))
    }

    /// Range label such as `"21-40 of 47"`.
    pub fn range_label(&self) -> String {
        let (first, last) = self.item_range().unwrap_or((0, 0));
        format!("{first}-{last} of {}", self.total_items)
    }

    /// Returns `true` when `page` is a legal navigation target right now.
    pub fn can_go_to(&self, page: usize, loading: bool) -> bool {
        !loading && page >= 1 && page <= self.total_pages
    }

    /// Filters a navigation request; `None` means the callback must not fire.
    pub fn page_request(&self, page: usize, loading: bool) -> Option<usize> {
        self.can_go_to(page, loading).then_some(page)
    }

    /// Returns `true` when a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` when a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Page-change requests leave through this guard.
pub fn request_page(
    state: &PageState,
    page: usize,
    loading: bool,
    on_page_change: impl FnOnce(usize),
) -> bool {
    match state.page_request(page, loading) {
        Some(page) => {
            on_page_change(page);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn local_scenario_matches_expected_labels() {
        let state = PageState::local(47, 20, 2);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.range_label(), "21-40 of 47");
        assert_eq!(state.page_window(), vec![1, 2, 3]);
    }

    #[test]
    fn server_metadata_overrides_local_inputs() {
        let meta = PaginationMeta {
            current_page: 2,
            last_page: 3,
            per_page: 20,
            total: 47,
        };
        let state = PageState::resolve(100, 10, 1, Some(&meta));
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.range_label(), "21-40 of 47");
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn zero_items_yield_zero_pages() {
        let state = PageState::local(0, 20, 1);
        assert!(state.is_empty());
        assert_eq!(state.page_window(), Vec::<usize>::new());
        assert_eq!(state.item_range(), None);
        assert_eq!(state.range_label(), "0-0 of 0");
    }

    #[test]
    fn zero_page_size_is_clamped_to_one() {
        let state = PageState::local(3, 0, 1);
        assert_eq!(state.per_page, 1);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn window_has_min_of_pages_and_five_and_contains_current_page() {
        for total_items in 0..=120 {
            for per_page in 1..=12 {
                let total_pages = PageState::local(total_items, per_page, 1).total_pages;
                for current in 1..=total_pages.max(1) {
                    let state = PageState::local(total_items, per_page, current);
                    let window = state.page_window();
                    assert_eq!(window.len(), total_pages.min(MAX_VISIBLE_PAGES));
                    assert!(window.windows(2).all(|pair| pair[1] == pair[0] + 1));
                    if total_pages >= MAX_VISIBLE_PAGES {
                        assert!(window.contains(&current));
                    }
                }
            }
        }
    }

    #[test]
    fn window_clamps_near_both_edges() {
        assert_eq!(PageState::local(100, 10, 1).page_window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(PageState::local(100, 10, 5).page_window(), vec![3, 4, 5, 6, 7]);
        assert_eq!(PageState::local(100, 10, 9).page_window(), vec![6, 7, 8, 9, 10]);
        assert_eq!(PageState::local(100, 10, 10).page_window(), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn out_of_range_and_loading_requests_never_fire() {
        let state = PageState::local(47, 20, 2);
        let fired = RefCell::new(Vec::new());

        assert!(!request_page(&state, 0, false, |page| fired.borrow_mut().push(page)));
        assert!(!request_page(&state, 4, false, |page| fired.borrow_mut().push(page)));
        assert!(!request_page(&state, 3, true, |page| fired.borrow_mut().push(page)));
        assert!(fired.borrow().is_empty());

        assert!(request_page(&state, 3, false, |page| fired.borrow_mut().push(page)));
        assert_eq!(*fired.borrow(), vec![3]);
    }

    #[test]
    fn last_page_range_is_cut_at_total() {
        let state = PageState::local(47, 20, 3);
        assert_eq!(state.item_range(), Some((41, 47)));
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn meta_deserializes_from_server_payload() {
        let meta: PaginationMeta = serde_json::from_str(
            r#"{"current_page":2,"last_page":3,"per_page":20,"total":47}"#,
        )
        .expect("meta");
        assert_eq!(PageState::from_meta(&meta).range_label(), "21-40 of 47");
    }

    #[test]
    fn extreme_server_metadata_saturates_instead_of_overflowing() {
        let meta: PaginationMeta = serde_json::from_str(&format!(
            r#"{{"current_page":{max},"last_page":{max},"per_page":50,"total":100}}"#,
            max = usize::MAX
        ))
        .expect("meta");
        let state = PageState::from_meta(&meta);

        assert_eq!(state.start_index(), usize::MAX);
        assert_eq!(state.item_range(), Some((usize::MAX, 100)));
        assert_eq!(
            state.page_window(),
            vec![usize::MAX - 4, usize::MAX - 3, usize::MAX - 2, usize::MAX - 1, usize::MAX]
        );
        assert!(!state.has_next());
    }
}
