//! Generic data table.
//!
//! The pipeline is headless up to the last step: [`sort_rows`] orders the caller's rows,
//! [`frame_rows`] slices and keys them against a [`PageState`], and only then do the table and
//! card shapes render. Every stage before rendering is a plain function with its own tests.
//!
//! # Row keys
//!
//! Without `get_row_key`, rows are keyed by their position in the displayed page. Expansion
//! state then follows positions, not records, across sorting and paging. Pass a key function
//! derived from row identity whenever rows can move.

mod expansion;
mod frame;
mod layout;
mod model;
mod pager;
mod pagination;
mod sort;

use std::rc::Rc;

use leptos::*;

pub use expansion::{ExpansionSet, RowActivation};
pub use frame::{frame_rows, BodyState, PagingInputs, PagingSource, TableFrame};
pub use model::{
    row_key, CellRenderer, CellValue, Column, ColumnAlign, ColumnValue, RowKey, RowKeyFn,
    TableRow,
};
pub use pager::{summary_label, Pagination};
pub use pagination::{request_page, PageState, PaginationMeta, MAX_VISIBLE_PAGES};
pub use sort::{collate, resolve_sort_field, sort_rows, SortOrder, SortState};

use self::layout::{mounted_shapes, shape_view, TableView};
use crate::primitives::{bool_token, merge_layout_class, tracked, EmptyStateCard};
use crate::settings::use_ui_kit_settings;

/// Initial sort. A key without an order starts ascending.
fn initial_sort(key: Option<String>, order: Option<SortOrder>) -> SortState {
    let order = order.or_else(|| key.as_ref().map(|_| SortOrder::Asc));
    SortState::new(key, order)
}

#[component]
/// Sortable, paginated table with optional expandable rows and a card layout for narrow
/// viewports.
///
/// Unless `use_card_layout` is set, the table and card shapes are both mounted and the
/// stylesheet from [`crate::register_styles`] shows one of them per breakpoint, so sort and
/// expansion state never reset on resize.
///
/// Rows are sliced to the current page locally only when neither `total_items` nor
/// `pagination_meta` is given; otherwise `rows` is taken to be the current page already.
/// `pagination_meta` wins over every local paging prop.
pub fn DataTable<T>(
    /// Rows to display. Never mutated.
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Column descriptors in display order.
    columns: Vec<Column<T>>,
    /// Page size; the configured default when unset.
    #[prop(optional, into)]
    items_per_page: Option<MaybeSignal<usize>>,
    /// 1-based current page for local and caller paging.
    #[prop(default = MaybeSignal::Static(1), into)]
    current_page: MaybeSignal<usize>,
    /// Total item count when `rows` holds a single page.
    #[prop(optional, into)]
    total_items: MaybeSignal<Option<usize>>,
    /// Server paging numbers; override every local paging prop.
    #[prop(optional, into)]
    pagination_meta: MaybeSignal<Option<PaginationMeta>>,
    /// Shows skeleton placeholders instead of rows.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    /// Shows pagination controls.
    #[prop(default = MaybeSignal::Static(true), into)]
    show_pagination: MaybeSignal<bool>,
    /// Renders only the card shape at every width.
    #[prop(optional)]
    use_card_layout: bool,
    /// Replaces the default empty-state card.
    #[prop(optional, into)]
    empty_state: Option<ViewFn>,
    /// Row clicks toggle inline detail content instead of calling `on_row_click`.
    #[prop(optional)]
    expandable_rows: bool,
    /// Detail content for an expanded row.
    #[prop(optional)]
    expanded_row_render: Option<Callback<T, View>>,
    /// Keys expanded on mount.
    #[prop(optional, into)]
    default_expanded_rows: Option<ExpansionSet>,
    /// Row identity for expansion tracking.
    #[prop(optional)]
    get_row_key: Option<RowKeyFn<T>>,
    /// Sort key applied on mount.
    #[prop(optional, into)]
    default_sort_key: Option<String>,
    /// Sort order applied on mount.
    #[prop(optional)]
    default_sort_order: Option<SortOrder>,
    /// Heading above the table.
    #[prop(optional, into)]
    title: Option<String>,
    /// Secondary text under the heading.
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Receives accepted page requests.
    #[prop(optional)]
    on_page_change: Option<Callback<usize>>,
    /// Receives the chosen page size as text.
    #[prop(optional)]
    on_view_change: Option<Callback<String>>,
    /// Receives clicked rows when expansion is off.
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
    /// Receives a row and its new expansion state after each toggle.
    #[prop(optional)]
    on_row_toggle: Option<Callback<(T, bool)>>,
    /// Receives the sort key and order when a header click activates a sort.
    #[prop(optional)]
    on_sort: Option<Callback<(String, SortOrder)>>,
    /// Extra class on the root element.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView
where
    T: TableRow + Clone + 'static,
{
    let settings = use_ui_kit_settings();
    if expandable_rows && expanded_row_render.is_none() {
        logging::debug_warn!("DataTable rows are expandable but no expanded_row_render is set");
    }

    let items_per_page =
        tracked(items_per_page.unwrap_or(MaybeSignal::Static(settings.items_per_page)));
    let current_page = tracked(current_page);
    let total_items = tracked(total_items);
    let pagination_meta = tracked(pagination_meta);
    let loading = tracked(loading);
    let show_pagination = tracked(show_pagination);

    let columns = store_value(columns);
    let key_fn = store_value(get_row_key);
    let sort = create_rw_signal(initial_sort(default_sort_key, default_sort_order));
    let expanded = create_rw_signal(default_expanded_rows.unwrap_or_default());

    let paging = Signal::derive(move || PagingInputs {
        items_per_page: items_per_page.get(),
        current_page: current_page.get(),
        total_items: total_items.get(),
        meta: pagination_meta.get(),
        show_pagination: show_pagination.get(),
    });
    let page = Signal::derive(move || paging.with(|paging| rows.with(|rows| paging.page_state(rows.len()))));
    let frame = Signal::derive(move || {
        let paging = paging.get();
        let sort = sort.get();
        rows.with(|rows| {
            columns.with_value(|columns| {
                key_fn.with_value(|key_fn| frame_rows(rows, columns, &sort, &paging, key_fn.as_ref()))
            })
        })
    });

    let empty_title = settings.empty_title.clone();
    let empty_state = empty_state.unwrap_or_else(move || {
        ViewFn::from(move || view! { <EmptyStateCard title=empty_title.clone() /> })
    });

    let table = TableView {
        columns,
        frame,
        sort,
        expanded,
        loading,
        expandable: expandable_rows,
        on_row_click,
        on_row_toggle,
        on_sort,
        expanded_row_render,
        empty_state: store_value(empty_state),
    };
    let per_page_options = settings.per_page_options;

    let heading = (title.is_some() || subtitle.is_some()).then(|| {
        view! {
            <header data-ui-slot="header">
                {title.map(|title| view! { <h2 data-ui-slot="title">{title}</h2> })}
                {subtitle.map(|subtitle| view! { <p data-ui-slot="subtitle">{subtitle}</p> })}
            </header>
        }
    });

    view! {
        <section
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-layout=if use_card_layout { "cards" } else { "responsive" }
            data-ui-loading=move || bool_token(loading.get())
        >
            {heading}
            {mounted_shapes(use_card_layout)
                .iter()
                .map(|shape| shape_view(*shape, table))
                .collect_view()}
            <Show when=move || show_pagination.get() fallback=|| ()>
                <Pagination
                    page=page
                    loading=loading
                    per_page_options=per_page_options.clone()
                    on_page_change=Callback::new(move |target: usize| {
                        if let Some(on_page_change) = on_page_change.as_ref() {
                            on_page_change.call(target);
                        }
                    })
                    on_view_change=Callback::new(move |value: String| {
                        if let Some(on_view_change) = on_view_change.as_ref() {
                            on_view_change.call(value);
                        }
                    })
                />
            </Show>
        </section>
    }
}

/// Adapts a plain closure into a [`RowKeyFn`].
pub fn row_key_fn<T>(key_fn: impl Fn(&T, usize) -> RowKey + 'static) -> RowKeyFn<T> {
    Rc::new(key_fn)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn default_sort_key_alone_starts_ascending() {
        assert_eq!(
            initial_sort(Some("amount".to_string()), None),
            SortState::by("amount", SortOrder::Asc)
        );
        assert_eq!(
            initial_sort(Some("amount".to_string()), Some(SortOrder::Desc)),
            SortState::by("amount", SortOrder::Desc)
        );
        assert_eq!(initial_sort(None, Some(SortOrder::Desc)), SortState::default());
    }

    #[test]
    fn row_key_fn_wraps_closures() {
        let key_fn = row_key_fn(|row: &Value, _| RowKey::from(row["id"].as_i64().unwrap_or(-1)));
        let row = json!({ "id": 7 });
        assert_eq!(row_key(Some(&key_fn), &row, 3), RowKey::Number(7));
        assert_eq!(row_key(None::<&RowKeyFn<Value>>, &row, 3), RowKey::Index(3));
    }
}
