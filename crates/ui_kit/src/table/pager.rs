use leptos::*;

use super::pagination::{request_page, PageState};
use crate::primitives::{bool_token, tracked, Button, ButtonVariant, ControlSize, IconPosition, SelectField};
use crate::settings::use_ui_kit_settings;
use crate::{Icon, IconName, IconSize};

/// Summary text such as `"47 Entries (Showing 21-40 of 47)"`.
pub fn summary_label(state: &PageState) -> String {
    format!(
        "{} Entries (Showing {})",
        state.total_items,
        state.range_label()
    )
}

/// Per-page choices as select options, always including `current` so the selector can show it.
fn per_page_select_options(options: &[usize], current: usize) -> Vec<(String, String)> {
    let mut choices = options.to_vec();
    if !choices.contains(&current) {
        choices.push(current);
        choices.sort_unstable();
    }
    choices
        .into_iter()
        .map(|choice| (choice.to_string(), choice.to_string()))
        .collect()
}

#[component]
/// Per-page selector, item summary, and page navigation. Renders nothing when there are no
/// pages; every navigation request passes the [`PageState::page_request`] guard first.
pub fn Pagination(
    #[prop(into)] page: Signal<PageState>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] per_page_options: Option<Vec<usize>>,
    #[prop(optional)] on_page_change: Option<Callback<usize>>,
    #[prop(optional)] on_view_change: Option<Callback<String>>,
) -> impl IntoView {
    let loading = tracked(loading);
    let settings = use_ui_kit_settings();
    let options = store_value(per_page_options.unwrap_or(settings.per_page_options));

    let go_to = move |target: usize| {
        request_page(&page.get_untracked(), target, loading.get_untracked(), |target| {
            if let Some(on_page_change) = on_page_change.as_ref() {
                on_page_change.call(target);
            }
        });
    };
    let select_options = Signal::derive(move || {
        let current = page.with(|page| page.per_page);
        options.with_value(|options| per_page_select_options(options, current))
    });

    view! {
        <Show when=move || !page.with(PageState::is_empty) fallback=|| ()>
            <div
                class="ui-pagination"
                data-ui-primitive="true"
                data-ui-kind="pagination"
                data-ui-loading=move || bool_token(loading.get())
            >
                <div data-ui-slot="summary">
                    <SelectField
                        aria_label="Items per page"
                        ui_slot="per-page"
                        options=select_options
                        value=Signal::derive(move || page.with(|page| page.per_page.to_string()))
                        disabled=loading
                        on_change=Callback::new(move |value: String| {
                            if let Some(on_view_change) = on_view_change.as_ref() {
                                on_view_change.call(value);
                            }
                        })
                    />
                    <p data-ui-slot="entries">{move || page.with(summary_label)}</p>
                </div>
                <nav data-ui-slot="pages" aria-label="Pagination">
                    <button
                        type="button"
                        data-ui-slot="previous"
                        disabled=move || loading.get() || !page.with(PageState::has_previous)
                        on:click=move |_| go_to(page.get_untracked().current_page.saturating_sub(1))
                    >
                        <span class="ui-sr-only">"Previous"</span>
                        <Icon icon=IconName::ChevronLeft size=IconSize::Md />
                    </button>
                    {move || {
                        let state = page.get();
                        state
                            .page_window()
                            .into_iter()
                            .map(|number| {
                                let current = number == state.current_page;
                                view! {
                                    <button
                                        type="button"
                                        data-ui-slot="page"
                                        data-ui-selected=bool_token(current)
                                        aria-current=current.then_some("page")
                                        disabled=move || loading.get()
                                        on:click=move |_| go_to(number)
                                    >
                                        {number}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <Button
                        variant=ButtonVariant::Primary
                        size=ControlSize::Sm
                        outline=true
                        icon=IconName::ChevronRight
                        icon_position=IconPosition::Right
                        ui_slot="next"
                        disabled=Signal::derive(move || loading.get() || !page.with(PageState::has_next))
                        on_click=Callback::new(move |_| go_to(page.get_untracked().current_page.saturating_add(1)))
                    >
                        "Next Page"
                    </Button>
                </nav>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::super::pagination::PaginationMeta;
    use super::*;

    #[test]
    fn summary_matches_range_label() {
        let local = PageState::local(47, 20, 2);
        assert_eq!(summary_label(&local), "47 Entries (Showing 21-40 of 47)");

        let server = PageState::from_meta(&PaginationMeta {
            current_page: 3,
            last_page: 3,
            per_page: 20,
            total: 47,
        });
        assert_eq!(summary_label(&server), "47 Entries (Showing 41-47 of 47)");
    }

    #[test]
    fn per_page_options_include_the_current_size() {
        let pair = |value: &str| (value.to_string(), value.to_string());
        assert_eq!(
            per_page_select_options(&[10, 20], 20),
            vec![pair("10"), pair("20")]
        );
        assert_eq!(
            per_page_select_options(&[10, 20, 50], 25),
            vec![pair("10"), pair("20"), pair("25"), pair("50")]
        );
    }

    #[test]
    fn navigation_guard_filters_page_change_callback() {
        let runtime = create_runtime();
        let requested = Rc::new(RefCell::new(Vec::new()));
        let on_page_change = Callback::new({
            let requested = Rc::clone(&requested);
            move |page: usize| requested.borrow_mut().push(page)
        });
        let state = PageState::local(47, 20, 2);

        for (target, loading) in [(0, false), (4, false), (3, true), (3, false), (1, false)] {
            request_page(&state, target, loading, |page| on_page_change.call(page));
        }

        assert_eq!(*requested.borrow(), vec![3, 1]);
        runtime.dispose();
    }
}
