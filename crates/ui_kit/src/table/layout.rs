//! Table and card projections of one [`TableFrame`].
//!
//! Both shapes read the same [`TableView`], so sort and expansion state survive whichever shape
//! the viewport currently shows.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use super::expansion::{ExpansionSet, RowActivation};
use super::frame::{BodyState, TableFrame};
use super::model::{Column, RowKey, TableRow};
use super::sort::{SortOrder, SortState};
use crate::primitives::{bool_token, is_activation_key, Card, SkeletonRows, SkeletonText};
use crate::{Icon, IconName, IconSize};

/// Number of label/value skeleton pairs drawn per placeholder card.
const CARD_SKELETON_FIELDS: usize = 3;

/// One projection of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LayoutShape {
    /// `<table>` markup, hidden below the card breakpoint by CSS.
    Table,
    /// Stacked cards, hidden above the card breakpoint by CSS unless cards are forced.
    Cards,
}

/// Shapes mounted for a table. Both stay mounted unless cards are forced, and CSS picks the one
/// the viewport shows.
pub(crate) fn mounted_shapes(use_card_layout: bool) -> &'static [LayoutShape] {
    if use_card_layout {
        &[LayoutShape::Cards]
    } else {
        &[LayoutShape::Table, LayoutShape::Cards]
    }
}

/// What a shape's body renders for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyPlan {
    /// Skeleton table rows.
    SkeletonRows { rows: usize, columns: usize },
    /// Skeleton cards with `fields` label/value pairs each.
    SkeletonCards { cards: usize, fields: usize },
    /// A single full-width row holding the empty state.
    EmptyRow { colspan: usize },
    /// A single card-shape container holding the empty state.
    EmptyCard,
    /// One row or card per data row.
    Rows { count: usize },
}

/// Shared state and callbacks for both layout shapes.
pub(crate) struct TableView<T: 'static> {
    pub columns: StoredValue<Vec<Column<T>>>,
    pub frame: Signal<TableFrame<T>>,
    pub sort: RwSignal<SortState>,
    pub expanded: RwSignal<ExpansionSet>,
    pub loading: Signal<bool>,
    pub expandable: bool,
    pub on_row_click: Option<Callback<T>>,
    pub on_row_toggle: Option<Callback<(T, bool)>>,
    pub on_sort: Option<Callback<(String, SortOrder)>>,
    pub expanded_row_render: Option<Callback<T, View>>,
    pub empty_state: StoredValue<ViewFn>,
}

impl<T: 'static> Clone for TableView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for TableView<T> {}

impl<T: TableRow + Clone + 'static> TableView<T> {
    fn activation(&self) -> RowActivation {
        RowActivation::resolve(self.expandable, self.on_row_click.is_some())
    }

    fn column_count(&self) -> usize {
        self.columns.with_value(Vec::len) + usize::from(self.expandable)
    }

    /// Body state for the current render pass. A table without columns has nothing to show.
    /// Loading placeholders follow the resolved page size, so server metadata sets their count.
    fn body_state(&self) -> BodyState {
        let no_columns = self.columns.with_value(Vec::is_empty);
        let (row_count, per_page) = self.frame.with(|frame| {
            let row_count = if no_columns { 0 } else { frame.rows.len() };
            (row_count, frame.page.per_page)
        });
        BodyState::resolve(self.loading.get(), row_count, per_page)
    }

    /// Body plan for `shape` on the current render pass.
    pub(crate) fn body_plan(&self, shape: LayoutShape) -> BodyPlan {
        let column_count = self.column_count().max(1);
        match (self.body_state(), shape) {
            (BodyState::Loading { placeholders }, LayoutShape::Table) => BodyPlan::SkeletonRows {
                rows: placeholders,
                columns: column_count,
            },
            (BodyState::Loading { placeholders }, LayoutShape::Cards) => BodyPlan::SkeletonCards {
                cards: placeholders,
                fields: self
                    .columns
                    .with_value(Vec::len)
                    .clamp(1, CARD_SKELETON_FIELDS),
            },
            (BodyState::Empty, LayoutShape::Table) => BodyPlan::EmptyRow {
                colspan: column_count,
            },
            (BodyState::Empty, LayoutShape::Cards) => BodyPlan::EmptyCard,
            (BodyState::Rows, _) => BodyPlan::Rows {
                count: self.frame.with(|frame| frame.rows.len()),
            },
        }
    }

    /// Cycles the sort for the header at `index`; `on_sort` only hears about active orders.
    pub(crate) fn header_click(&self, index: usize) {
        let next = self.columns.with_value(|columns| {
            columns
                .get(index)
                .and_then(|column| self.sort.with_untracked(|sort| sort.after_header_click(column)))
        });
        let Some(next) = next else {
            return;
        };
        self.sort.set(next.clone());
        if let (Some(on_sort), Some(key), Some(order)) = (self.on_sort, next.key(), next.order()) {
            on_sort.call((key.to_string(), order));
        }
    }

    /// Flips the row's expansion, then reports the new state.
    pub(crate) fn toggle_row(&self, key: RowKey, row: T) {
        let mut now_expanded = false;
        self.expanded.update(|expanded| now_expanded = expanded.toggle(key));
        if let Some(on_row_toggle) = self.on_row_toggle {
            on_row_toggle.call((row, now_expanded));
        }
    }

    /// Handles a click on a data row.
    pub(crate) fn activate_row(&self, key: RowKey, row: T) {
        match self.activation() {
            RowActivation::ToggleExpansion => self.toggle_row(key, row),
            RowActivation::Click => {
                if let Some(on_row_click) = self.on_row_click {
                    on_row_click.call(row);
                }
            }
            RowActivation::Inert => {}
        }
    }

    fn is_expanded(&self, key: RowKey) -> Signal<bool> {
        let expanded = self.expanded;
        Signal::derive(move || expanded.with(|set| set.is_expanded(&key)))
    }

    fn expansion_content(&self, row: &T) -> Option<View> {
        self.expanded_row_render
            .map(|render| render.call(row.clone()))
    }

    fn empty_view(&self) -> View {
        self.empty_state.with_value(ViewFn::run)
    }
}

fn sort_token(order: Option<SortOrder>) -> &'static str {
    order.map_or("none", SortOrder::token)
}

fn aria_sort(order: Option<SortOrder>) -> &'static str {
    order.map_or("none", SortOrder::aria)
}

fn width_style(width: Option<&str>) -> Option<String> {
    width.map(|width| format!("width: {width};"))
}

fn header_cell<T: TableRow + Clone + 'static>(
    table: TableView<T>,
    index: usize,
    column: &Column<T>,
) -> View {
    let sort_key = column.effective_sort_key().map(str::to_string);
    let sortable = sort_key.is_some();
    let order = Signal::derive(move || {
        sort_key
            .as_deref()
            .and_then(|key| table.sort.with(|sort| sort.order_for(key)))
    });

    view! {
        <th
            scope="col"
            class=column.class.clone()
            style=width_style(column.width.as_deref())
            tabindex=sortable.then_some(0)
            data-ui-align=column.align.token()
            data-ui-sortable=bool_token(sortable)
            aria-sort=move || sortable.then(|| aria_sort(order.get()))
            data-ui-sort=move || sortable.then(|| sort_token(order.get()))
            on:click=move |_| table.header_click(index)
            on:keydown=move |ev: KeyboardEvent| {
                if sortable && is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    table.header_click(index);
                }
            }
        >
            <span data-ui-slot="title">{column.title.clone()}</span>
            {sortable.then(|| view! {
                <span data-ui-slot="sort-indicator" aria-hidden="true">
                    {move || match order.get() {
                        Some(SortOrder::Asc) => "\u{25b2}",
                        Some(SortOrder::Desc) => "\u{25bc}",
                        None => "\u{21c5}",
                    }}
                </span>
            })}
        </th>
    }
    .into_view()
}

fn toggle_button<T: TableRow + Clone + 'static>(
    table: TableView<T>,
    key: RowKey,
    row: T,
    expanded: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            data-ui-slot="toggle"
            aria-label="Toggle row details"
            aria-expanded=move || bool_token(expanded.get())
            data-ui-expanded=move || bool_token(expanded.get())
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                table.toggle_row(key.clone(), row.clone());
            }
        >
            <Icon icon=IconName::ChevronRight size=IconSize::Sm />
        </button>
    }
}

fn table_row<T: TableRow + Clone + 'static>(table: TableView<T>, key: RowKey, row: T) -> View {
    let interactive = table.activation().is_interactive();
    let expanded = table.is_expanded(key.clone());
    let column_count = table.column_count();
    let cells = table.columns.with_value(|columns| {
        columns
            .iter()
            .map(|column| {
                view! {
                    <td class=column.class.clone() data-ui-align=column.align.token()>
                        {column.render_cell(&row)}
                    </td>
                }
            })
            .collect_view()
    });
    let toggle_cell = table.expandable.then(|| {
        let toggle = toggle_button(table, key.clone(), row.clone(), expanded);
        view! { <td data-ui-slot="toggle-cell">{toggle}</td> }
    });
    let detail_row = row.clone();
    let click_row = row;

    view! {
        <tr
            data-ui-slot="row"
            data-ui-interactive=bool_token(interactive)
            data-ui-expanded=move || bool_token(expanded.get())
            on:click=move |_| table.activate_row(key.clone(), click_row.clone())
        >
            {toggle_cell}
            {cells}
        </tr>
        {move || {
            (table.expandable && expanded.get())
                .then(|| table.expansion_content(&detail_row))
                .flatten()
                .map(|content| view! {
                    <tr data-ui-slot="expansion-row">
                        <td colspan=column_count>{content}</td>
                    </tr>
                })
        }}
    }
    .into_view()
}

fn table_body<T: TableRow + Clone + 'static>(table: TableView<T>) -> View {
    match table.body_plan(LayoutShape::Table) {
        BodyPlan::SkeletonRows { rows, columns } => {
            view! { <SkeletonRows rows columns /> }.into_view()
        }
        BodyPlan::EmptyRow { colspan } => view! {
            <tr data-ui-slot="empty-row">
                <td colspan=colspan>{table.empty_view()}</td>
            </tr>
        }
        .into_view(),
        _ => table
            .frame
            .get()
            .rows
            .into_iter()
            .map(|(key, row)| table_row(table, key, row))
            .collect_view(),
    }
}

/// Tabular projection: one header cell per column, one body row per data row, and detail rows
/// directly below expanded parents.
fn table_shape<T: TableRow + Clone + 'static>(table: TableView<T>) -> impl IntoView {
    let headers = table.columns.with_value(|columns| {
        columns
            .iter()
            .enumerate()
            .map(|(index, column)| header_cell(table, index, column))
            .collect_view()
    });

    view! {
        <div data-ui-slot="table-shape">
            <table>
                <thead>
                    <tr>
                        {table.expandable.then(|| view! {
                            <th scope="col" data-ui-slot="toggle-header">
                                <span class="ui-sr-only">"Details"</span>
                            </th>
                        })}
                        {headers}
                    </tr>
                </thead>
                <tbody
                    aria-busy=move || bool_token(table.loading.get())
                    data-ui-interactive=bool_token(table.activation().is_interactive())
                >
                    {move || table_body(table)}
                </tbody>
            </table>
        </div>
    }
}

fn card_row<T: TableRow + Clone + 'static>(table: TableView<T>, key: RowKey, row: T) -> View {
    let interactive = table.activation().is_interactive();
    let expanded = table.is_expanded(key.clone());
    let fields = table.columns.with_value(|columns| {
        columns
            .iter()
            .map(|column| {
                view! {
                    <div data-ui-slot="field" class=column.class.clone()>
                        <span data-ui-slot="field-label">{column.title.clone()}":"</span>
                        <span data-ui-slot="field-value" data-ui-align=column.align.token()>
                            {column.render_cell(&row)}
                        </span>
                    </div>
                }
            })
            .collect_view()
    });
    let toggle = table
        .expandable
        .then(|| toggle_button(table, key.clone(), row.clone(), expanded));
    let detail_row = row.clone();
    let click_row = row;

    view! {
        <div
            data-ui-slot="row-card"
            data-ui-interactive=bool_token(interactive)
            data-ui-expanded=move || bool_token(expanded.get())
            on:click=move |_| table.activate_row(key.clone(), click_row.clone())
        >
            <Card>
                {toggle}
                {fields}
                {move || {
                    (table.expandable && expanded.get())
                        .then(|| table.expansion_content(&detail_row))
                        .flatten()
                        .map(|content| view! { <div data-ui-slot="expansion">{content}</div> })
                }}
            </Card>
        </div>
    }
    .into_view()
}

fn card_skeleton(field_count: usize) -> impl IntoView {
    view! {
        <div data-ui-slot="card-skeleton" aria-hidden="true">
            <Card>
                {(0..field_count)
                    .map(|_| view! {
                        <div data-ui-slot="field">
                            <SkeletonText width="33%" />
                            <SkeletonText width="50%" />
                        </div>
                    })
                    .collect_view()}
            </Card>
        </div>
    }
}

fn card_body<T: TableRow + Clone + 'static>(table: TableView<T>) -> View {
    match table.body_plan(LayoutShape::Cards) {
        BodyPlan::SkeletonCards { cards, fields } => {
            (0..cards).map(|_| card_skeleton(fields)).collect_view()
        }
        BodyPlan::EmptyCard => {
            view! { <div data-ui-slot="empty-card">{table.empty_view()}</div> }.into_view()
        }
        _ => table
            .frame
            .get()
            .rows
            .into_iter()
            .map(|(key, row)| card_row(table, key, row))
            .collect_view(),
    }
}

/// Card projection: one card per row listing `title: value` pairs, with detail content inside
/// the card when expanded.
fn card_shape<T: TableRow + Clone + 'static>(table: TableView<T>) -> impl IntoView {
    view! {
        <div data-ui-slot="card-shape" aria-busy=move || bool_token(table.loading.get())>
            {move || card_body(table)}
        </div>
    }
}

/// Renders `shape` over `table`.
pub(crate) fn shape_view<T: TableRow + Clone + 'static>(shape: LayoutShape, table: TableView<T>) -> View {
    match shape {
        LayoutShape::Table => table_shape(table).into_view(),
        LayoutShape::Cards => card_shape(table).into_view(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::super::frame::{frame_rows, PagingInputs};
    use super::super::pagination::PaginationMeta;
    use super::*;

    type Log<E> = Rc<RefCell<Vec<E>>>;

    fn recorder<E: 'static>() -> (Log<E>, Callback<E>) {
        let log: Log<E> = Rc::new(RefCell::new(Vec::new()));
        let callback = Callback::new({
            let log = Rc::clone(&log);
            move |event: E| log.borrow_mut().push(event)
        });
        (log, callback)
    }

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::field("Name", "name").sortable(),
            Column::field("Notes", "notes"),
        ]
    }

    fn table_view(
        rows: Vec<Value>,
        expandable: bool,
        on_row_click: Option<Callback<Value>>,
        on_row_toggle: Option<Callback<(Value, bool)>>,
        on_sort: Option<Callback<(String, SortOrder)>>,
    ) -> TableView<Value> {
        let columns = store_value(columns());
        let sort = create_rw_signal(SortState::default());
        let frame = Signal::derive(move || {
            let sort = sort.get();
            columns.with_value(|columns| {
                frame_rows(&rows, columns, &sort, &PagingInputs::default(), None)
            })
        });
        TableView {
            columns,
            frame,
            sort,
            expanded: create_rw_signal(ExpansionSet::new()),
            loading: Signal::derive(|| false),
            expandable,
            on_row_click,
            on_row_toggle,
            on_sort,
            expanded_row_render: None,
            empty_state: store_value(ViewFn::from(|| ())),
        }
    }

    #[test]
    fn header_clicks_cycle_sort_and_report_only_active_orders() {
        let runtime = create_runtime();
        let (sorts, on_sort) = recorder::<(String, SortOrder)>();
        let table = table_view(
            vec![json!({ "name": "b" }), json!({ "name": "a" })],
            false,
            None,
            None,
            Some(on_sort),
        );

        table.header_click(0);
        assert_eq!(table.sort.get_untracked(), SortState::by("name", SortOrder::Asc));
        let names: Vec<Value> = table
            .frame
            .get_untracked()
            .rows
            .into_iter()
            .map(|(_, row)| row["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("a"), json!("b")]);

        table.header_click(0);
        table.header_click(0);
        assert_eq!(table.sort.get_untracked(), SortState::default());

        table.header_click(1);
        assert_eq!(table.sort.get_untracked(), SortState::default());

        assert_eq!(
            *sorts.borrow(),
            vec![
                ("name".to_string(), SortOrder::Asc),
                ("name".to_string(), SortOrder::Desc)
            ]
        );
        runtime.dispose();
    }

    #[test]
    fn expansion_takes_over_row_clicks_and_alternates_toggle_reports() {
        let runtime = create_runtime();
        let (clicks, on_row_click) = recorder::<Value>();
        let (toggles, on_row_toggle) = recorder::<(Value, bool)>();
        let row = json!({ "name": "a" });
        let table = table_view(
            vec![row.clone()],
            true,
            Some(on_row_click),
            Some(on_row_toggle),
            None,
        );

        table.activate_row(RowKey::Index(0), row.clone());
        table.activate_row(RowKey::Index(0), row.clone());

        assert!(clicks.borrow().is_empty());
        assert_eq!(
            *toggles.borrow(),
            vec![(row.clone(), true), (row, false)]
        );
        assert!(table.expanded.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn plain_tables_forward_row_clicks() {
        let runtime = create_runtime();
        let (clicks, on_row_click) = recorder::<Value>();
        let row = json!({ "name": "a" });
        let table = table_view(vec![row.clone()], false, Some(on_row_click), None, None);

        table.activate_row(RowKey::Index(0), row.clone());

        assert_eq!(*clicks.borrow(), vec![row]);
        assert!(table.expanded.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn tables_without_columns_render_the_empty_state() {
        let runtime = create_runtime();
        let mut table = table_view(vec![json!({ "name": "a" })], false, None, None, None);
        table.columns = store_value(Vec::new());
        assert_eq!(table.body_state(), BodyState::Empty);
        assert_eq!(table.column_count(), 0);
        runtime.dispose();
    }

    #[test]
    fn loading_placeholders_follow_the_resolved_page_size() {
        let runtime = create_runtime();
        let mut table = table_view(Vec::new(), false, None, None, None);
        let columns = table.columns;
        let rows = vec![json!({ "name": "a" })];
        let paging = PagingInputs {
            meta: Some(PaginationMeta {
                current_page: 1,
                last_page: 4,
                per_page: 5,
                total: 20,
            }),
            ..PagingInputs::default()
        };
        table.frame = Signal::derive(move || {
            columns.with_value(|columns| {
                frame_rows(&rows, columns, &SortState::default(), &paging, None)
            })
        });
        table.loading = Signal::derive(|| true);

        assert_eq!(table.body_state(), BodyState::Loading { placeholders: 5 });
        assert_eq!(
            table.body_plan(LayoutShape::Table),
            BodyPlan::SkeletonRows { rows: 5, columns: 2 }
        );
        assert_eq!(
            table.body_plan(LayoutShape::Cards),
            BodyPlan::SkeletonCards { cards: 5, fields: 2 }
        );
        runtime.dispose();
    }

    #[test]
    fn responsive_tables_mount_both_shapes_and_forced_cards_mount_one() {
        assert_eq!(mounted_shapes(false), &[LayoutShape::Table, LayoutShape::Cards]);
        assert_eq!(mounted_shapes(true), &[LayoutShape::Cards]);
    }

    #[test]
    fn each_mounted_shape_plans_one_empty_state() {
        let runtime = create_runtime();
        let table = table_view(Vec::new(), true, None, None, None);

        let plans = mounted_shapes(false)
            .iter()
            .map(|shape| table.body_plan(*shape))
            .collect::<Vec<_>>();
        assert_eq!(plans, vec![BodyPlan::EmptyRow { colspan: 3 }, BodyPlan::EmptyCard]);

        let forced = mounted_shapes(true)
            .iter()
            .map(|shape| table.body_plan(*shape))
            .collect::<Vec<_>>();
        assert_eq!(forced, vec![BodyPlan::EmptyCard]);
        runtime.dispose();
    }

    #[test]
    fn both_shapes_plan_one_entry_per_visible_row() {
        let runtime = create_runtime();
        let rows = vec![json!({ "name": "a" }), json!({ "name": "b" }), json!({ "name": "c" })];
        let table = table_view(rows, false, None, None, None);

        assert_eq!(table.body_plan(LayoutShape::Table), BodyPlan::Rows { count: 3 });
        assert_eq!(table.body_plan(LayoutShape::Cards), BodyPlan::Rows { count: 3 });
        runtime.dispose();
    }

    #[test]
    fn sort_tokens_cover_unsorted_columns() {
        assert_eq!(sort_token(None), "none");
        assert_eq!(sort_token(Some(SortOrder::Desc)), "desc");
        assert_eq!(aria_sort(Some(SortOrder::Asc)), "ascending");
        assert_eq!(width_style(Some("12rem")).as_deref(), Some("width: 12rem;"));
    }
}
