//! Composes sorting, pagination, and row identity into the rows one render pass displays.

use super::model::{row_key, Column, RowKey, RowKeyFn, TableRow};
use super::pagination::{PageState, PaginationMeta};
use super::sort::{sort_rows, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the paging numbers come from.
pub enum PagingSource {
    /// The table holds every row and slices the current page itself.
    Local,
    /// The caller passes one page of rows plus a total item count.
    Caller,
    /// The caller passes one page of rows plus server metadata.
    Server,
}

/// Pagination-related props as received by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingInputs {
    /// Page size for local computation.
    pub items_per_page: usize,
    /// 1-based current page for local computation.
    pub current_page: usize,
    /// Total item count supplied by the caller.
    pub total_items: Option<usize>,
    /// Server metadata; overrides everything else.
    pub meta: Option<PaginationMeta>,
    /// Whether pagination controls are shown.
    pub show_pagination: bool,
}

impl Default for PagingInputs {
    fn default() -> Self {
        Self {
            items_per_page: 20,
            current_page: 1,
            total_items: None,
            meta: None,
            show_pagination: true,
        }
    }
}

impl PagingInputs {
    /// Paging source implied by which inputs are present.
    pub fn source(&self) -> PagingSource {
        if self.meta.is_some() {
            PagingSource::Server
        } else if self.total_items.is_some() {
            PagingSource::Caller
        } else {
            PagingSource::Local
        }
    }

    /// Paging numbers for `row_count` rows on hand.
    pub fn page_state(&self, row_count: usize) -> PageState {
        PageState::resolve(
            self.total_items.unwrap_or(row_count),
            self.items_per_page,
            self.current_page,
            self.meta.as_ref(),
        )
    }
}

/// Rows and paging numbers for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFrame<T> {
    /// Displayed rows with their keys, in display order.
    pub rows: Vec<(RowKey, T)>,
    /// Resolved paging numbers.
    pub page: PageState,
    /// Paging source that produced `page`.
    pub source: PagingSource,
}

/// Sorts, optionally slices, and keys `rows`.
///
/// Keys are assigned after sorting and slicing, so the default index keys refer to positions in
/// the displayed collection.
pub fn frame_rows<T>(
    rows: &[T],
    columns: &[Column<T>],
    sort: &SortState,
    paging: &PagingInputs,
    key_fn: Option<&RowKeyFn<T>>,
) -> TableFrame<T>
where
    T: TableRow + Clone,
{
    let source = paging.source();
    let page = paging.page_state(rows.len());
    let sorted = sort_rows(rows, columns, sort);

    let visible = if source == PagingSource::Local && paging.show_pagination {
        let start = page.start_index().min(sorted.len());
        let end = start.saturating_add(page.per_page).min(sorted.len());
        &sorted[start..end]
    } else {
        &sorted[..]
    };

    let rows = visible
        .iter()
        .enumerate()
        .map(|(index, row)| (row_key(key_fn, row, index), row.clone()))
        .collect();

    TableFrame { rows, page, source }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the body of either layout shape shows.
pub enum BodyState {
    /// Skeleton placeholders only.
    Loading {
        /// Number of placeholders.
        placeholders: usize,
    },
    /// The empty-state placeholder, exactly once.
    Empty,
    /// Real rows.
    Rows,
}

impl BodyState {
    /// Loading wins over data; an empty, idle table shows the empty state.
    pub fn resolve(loading: bool, row_count: usize, items_per_page: usize) -> Self {
        if loading {
            Self::Loading {
                placeholders: items_per_page.max(1),
            }
        } else if row_count == 0 {
            Self::Empty
        } else {
            Self::Rows
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::table::sort::SortOrder;

    fn rows(count: i64) -> Vec<Value> {
        (1..=count).map(|id| json!({ "id": id, "rank": count - id })).collect()
    }

    fn ids(frame: &TableFrame<Value>) -> Vec<i64> {
        frame
            .rows
            .iter()
            .map(|(_, row)| row["id"].as_i64().unwrap_or(-1))
            .collect()
    }

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::field("Id", "id").sortable(),
            Column::field("Rank", "rank").sortable(),
        ]
    }

    #[test]
    fn local_source_slices_the_current_page_after_sorting() {
        let paging = PagingInputs {
            items_per_page: 20,
            current_page: 2,
            ..PagingInputs::default()
        };
        let frame = frame_rows(
            &rows(47),
            &columns(),
            &SortState::by("rank", SortOrder::Asc),
            &paging,
            None,
        );
        assert_eq!(frame.source, PagingSource::Local);
        assert_eq!(frame.page.total_pages, 3);
        assert_eq!(frame.page.range_label(), "21-40 of 47");
        assert_eq!(frame.rows.len(), 20);
        assert_eq!(ids(&frame).first(), Some(&27));
        assert_eq!(frame.rows[0].0, RowKey::Index(0));
    }

    #[test]
    fn caller_and_server_sources_take_rows_as_one_page() {
        let caller = PagingInputs {
            total_items: Some(100),
            items_per_page: 10,
            ..PagingInputs::default()
        };
        let frame = frame_rows(&rows(10), &columns(), &SortState::default(), &caller, None);
        assert_eq!(frame.source, PagingSource::Caller);
        assert_eq!(frame.rows.len(), 10);
        assert_eq!(frame.page.total_pages, 10);

        let server = PagingInputs {
            total_items: Some(100),
            items_per_page: 10,
            meta: Some(PaginationMeta {
                current_page: 2,
                last_page: 3,
                per_page: 20,
                total: 47,
            }),
            ..PagingInputs::default()
        };
        let frame = frame_rows(&rows(20), &columns(), &SortState::default(), &server, None);
        assert_eq!(frame.source, PagingSource::Server);
        assert_eq!(frame.rows.len(), 20);
        assert_eq!(frame.page.total_pages, 3);
        assert_eq!(frame.page.range_label(), "21-40 of 47");
    }

    #[test]
    fn hidden_pagination_shows_every_local_row() {
        let paging = PagingInputs {
            items_per_page: 5,
            show_pagination: false,
            ..PagingInputs::default()
        };
        let frame = frame_rows(&rows(12), &columns(), &SortState::default(), &paging, None);
        assert_eq!(frame.rows.len(), 12);
    }

    #[test]
    fn page_past_the_end_shows_no_rows() {
        let paging = PagingInputs {
            items_per_page: 5,
            current_page: 9,
            ..PagingInputs::default()
        };
        let frame = frame_rows(&rows(12), &columns(), &SortState::default(), &paging, None);
        assert!(frame.rows.is_empty());
    }

    #[test]
    fn huge_page_numbers_slice_without_overflow() {
        let paging = PagingInputs {
            items_per_page: usize::MAX,
            current_page: usize::MAX,
            ..PagingInputs::default()
        };
        let frame = frame_rows(&rows(12), &columns(), &SortState::default(), &paging, None);
        assert!(frame.rows.is_empty());

        let first_page = PagingInputs {
            items_per_page: usize::MAX,
            ..PagingInputs::default()
        };
        let frame = frame_rows(&rows(12), &columns(), &SortState::default(), &first_page, None);
        assert_eq!(frame.rows.len(), 12);
    }

    #[test]
    fn refreshed_rows_are_reordered_by_the_existing_sort() {
        let sort = SortState::by("id", SortOrder::Desc);
        let paging = PagingInputs::default();
        let first = frame_rows(&rows(3), &columns(), &sort, &paging, None);
        assert_eq!(ids(&first), vec![3, 2, 1]);

        let refreshed = frame_rows(&rows(5), &columns(), &sort, &paging, None);
        assert_eq!(ids(&refreshed), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn custom_keys_follow_rows_through_reordering() {
        let key_fn: RowKeyFn<Value> =
            Rc::new(|row, _| RowKey::Number(row["id"].as_i64().unwrap_or_default()));
        let frame = frame_rows(
            &rows(3),
            &columns(),
            &SortState::by("id", SortOrder::Desc),
            &PagingInputs::default(),
            Some(&key_fn),
        );
        let keys = frame.rows.iter().map(|(key, _)| key.clone()).collect::<Vec<_>>();
        assert_eq!(keys, vec![RowKey::Number(3), RowKey::Number(2), RowKey::Number(1)]);
    }

    #[test]
    fn body_state_prefers_loading_then_empty() {
        assert_eq!(
            BodyState::resolve(true, 4, 20),
            BodyState::Loading { placeholders: 20 }
        );
        assert_eq!(BodyState::resolve(false, 0, 20), BodyState::Empty);
        assert_eq!(BodyState::resolve(false, 3, 20), BodyState::Rows);
    }
}
