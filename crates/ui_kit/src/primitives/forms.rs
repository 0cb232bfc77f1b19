use std::time::Duration;

use leptos::html;
use leptos::leptos_dom::helpers::TimeoutHandle;
use wasm_bindgen::JsCast;

use super::overlays::event_inside;
use super::*;
use crate::settings::use_ui_kit_settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Kind of text entry an [`Input`] renders.
pub enum InputKind {
    /// Single-line text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric entry.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
    /// Four-row `<textarea>`.
    Textarea,
}

impl InputKind {
    /// HTML `type` of the `<input>`, or `None` for a textarea.
    pub(crate) fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Password => Some("password"),
            Self::Number => Some("number"),
            Self::Tel => Some("tel"),
            Self::Url => Some("url"),
            Self::Textarea => None,
        }
    }
}

/// Line shown under a field. An error hides the help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldMessage {
    Error(String),
    Help(String),
}

impl FieldMessage {
    /// Picks the message to show; blank strings count as absent.
    pub(crate) fn pick(error: Option<String>, help: Option<String>) -> Option<Self> {
        let present = |text: Option<String>| text.filter(|text| !text.trim().is_empty());
        present(error)
            .map(Self::Error)
            .or_else(|| present(help).map(Self::Help))
    }

    /// Element id the field's `aria-describedby` points at.
    pub(crate) fn element_id(&self, field_id: &str) -> String {
        match self {
            Self::Error(_) => format!("{field_id}-error"),
            Self::Help(_) => format!("{field_id}-help"),
        }
    }

    fn slot(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::Help(_) => "help",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Help(text) => text,
        }
    }
}

#[component]
/// Labeled text field or textarea with an optional icon, required marker, and a help or error
/// line wired to `aria-describedby`.
///
/// `on_input` receives the field's new value on every keystroke.
pub fn Input(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(default = InputKind::Text)] kind: InputKind,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] help_text: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(default = IconPosition::Left)] icon_position: IconPosition,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let value = tracked(value);
    let error = tracked(error);
    let disabled = tracked(disabled);
    let field_id = store_value(id.clone());
    let message = Signal::derive(move || FieldMessage::pick(error.get(), help_text.clone()));
    let described_by = move || {
        message.with(|message| {
            message
                .as_ref()
                .map(|message| field_id.with_value(|id| message.element_id(id)))
        })
    };
    let invalid = move || message.with(|message| matches!(message, Some(FieldMessage::Error(_))));
    let emit = move |ev: web_sys::Event| {
        if let Some(on_input) = on_input {
            on_input.call(event_target_value(&ev));
        }
    };

    let control = match kind.input_type() {
        Some(input_type) => view! {
            <input
                id=id.clone()
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(invalid())
                aria-describedby=described_by
                data-ui-slot="control"
                on:input=emit
            />
        }
        .into_view(),
        None => view! {
            <textarea
                id=id.clone()
                rows=4
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(invalid())
                aria-describedby=described_by
                data-ui-slot="control"
                on:input=emit
            ></textarea>
        }
        .into_view(),
    };
    let icon_slot = move |side: IconPosition| {
        icon.filter(|_| icon_position == side).map(|icon| {
            view! {
                <span data-ui-slot="icon" data-ui-position=side.token() aria-hidden="true">
                    <Icon icon size=IconSize::Sm />
                </span>
            }
        })
    };

    view! {
        <div
            class=merge_layout_class("ui-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind=if kind == InputKind::Textarea { "text-area" } else { "text-field" }
            data-ui-invalid=move || bool_token(invalid())
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-icon-position=icon.map(|_| icon_position.token())
        >
            <label for=id data-ui-slot="label">
                {label}
                {required.then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
            </label>
            <div data-ui-slot="field">
                {icon_slot(IconPosition::Left)}
                {control}
                {icon_slot(IconPosition::Right)}
            </div>
            {move || {
                message.get().map(|message| {
                    let element_id = field_id.with_value(|id| message.element_id(id));
                    view! {
                        <p id=element_id data-ui-slot=message.slot()>
                            {message.text().to_string()}
                        </p>
                    }
                })
            }}
        </div>
    }
}

/// Drops repeats so a query is only reported when it changed since the last report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryGate {
    last: Option<String>,
}

impl QueryGate {
    /// Returns the query to report, or `None` when it matches the last reported one.
    pub(crate) fn admit(&mut self, query: &str) -> Option<String> {
        if self.last.as_deref() == Some(query) {
            return None;
        }
        self.last = Some(query.to_string());
        Some(query.to_string())
    }
}

#[component]
/// Search box that reports its query after typing pauses, or immediately on Enter.
///
/// The pause defaults to [`UiKitSettings::search_debounce_ms`](crate::UiKitSettings).
pub fn Search(
    on_search: Callback<String>,
    #[prop(default = "Search...".to_string(), into)] placeholder: String,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] debounce_ms: Option<u64>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let delay = Duration::from_millis(
        debounce_ms.unwrap_or(use_ui_kit_settings().search_debounce_ms),
    );
    let disabled = tracked(disabled);
    let query = create_rw_signal(String::new());
    let gate = store_value(QueryGate::default());
    let pending = store_value(None::<TimeoutHandle>);

    let cancel_pending = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
            pending.set_value(None);
        }
    };
    let report = move || {
        let current = query.get_untracked();
        if let Some(admitted) = gate.try_update_value(|gate| gate.admit(&current)).flatten() {
            on_search.call(admitted);
        }
    };
    let schedule = move || {
        cancel_pending();
        match set_timeout_with_handle(
            move || {
                pending.set_value(None);
                report();
            },
            delay,
        ) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("search debounce timer failed: {err:?}");
                report();
            }
        }
    };
    on_cleanup(cancel_pending);

    let aria_label = aria_label.unwrap_or_else(|| placeholder.clone());

    view! {
        <div
            class=merge_layout_class("ui-search", layout_class)
            data-ui-primitive="true"
            data-ui-kind="search"
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span data-ui-slot="icon" aria-hidden="true">
                <Icon icon=IconName::Search size=IconSize::Sm />
            </span>
            <input
                type="search"
                role="searchbox"
                placeholder=placeholder
                aria-label=aria_label
                prop:value=move || query.get()
                disabled=move || disabled.get()
                data-ui-slot="control"
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    schedule();
                }
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        cancel_pending();
                        report();
                    }
                }
            />
        </div>
    }
}

/// One choice offered by a [`SelectButton`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible text; the value is shown when unset.
    pub label: Option<String>,
    /// Disabled options render but cannot be picked.
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option labeled by its value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            disabled: false,
        }
    }

    /// Sets the visible text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Text shown for this option.
    pub fn display(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Trigger text: the selected option's display text, or `placeholder` when nothing matches.
pub(crate) fn selected_label(options: &[SelectOption], selected: Option<&str>, placeholder: &str) -> String {
    selected
        .and_then(|selected| options.iter().find(|option| option.value == selected))
        .map_or(placeholder, SelectOption::display)
        .to_string()
}

#[component]
/// Button that opens a list of options below it, marking the selected one with a check.
///
/// Picking an option updates the trigger text, calls `on_change` with its value, and closes the
/// list. An outside press or Escape closes it too. With `name` set, a hidden input carries the
/// selected value for form submission.
pub fn SelectButton(
    options: Vec<SelectOption>,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(default = "Select an option".to_string(), into)] placeholder: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let value = tracked(value);
    let disabled = tracked(disabled);
    let selected = create_rw_signal(value.get_untracked());
    create_effect(move |_| selected.set(value.get()));
    let open = create_rw_signal(false);
    let options = store_value(options);
    let root_ref = create_node_ref::<html::Div>();

    let outside_press = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let root = root_ref.get_untracked();
        if !event_inside(&ev, root.as_deref().map(|root| root.unchecked_ref())) {
            open.set(false);
        }
    });
    on_cleanup(move || outside_press.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let trigger_text = move || {
        selected.with(|selected| {
            options.with_value(|options| selected_label(options, selected.as_deref(), &placeholder))
        })
    };
    let pick = move |option: SelectOption| {
        if option.disabled {
            return;
        }
        selected.set(Some(option.value.clone()));
        open.set(false);
        if let Some(on_change) = on_change {
            on_change.call(option.value);
        }
    };
    let items = move || {
        options
            .get_value()
            .into_iter()
            .map(|option| {
                let value = option.value.clone();
                let is_selected = Signal::derive(move || {
                    selected.with(|selected| selected.as_deref() == Some(value.as_str()))
                });
                let text = option.display().to_string();
                let option_disabled = option.disabled;
                view! {
                    <li
                        role="option"
                        data-ui-slot="option"
                        aria-selected=move || bool_token(is_selected.get())
                        aria-disabled=bool_token(option_disabled)
                        data-ui-selected=move || bool_token(is_selected.get())
                        on:click=move |_| pick(option.clone())
                    >
                        <span>{text}</span>
                        {move || is_selected.get().then(|| view! { <Icon icon=IconName::Check size=IconSize::Sm /> })}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div
            node_ref=root_ref
            class=merge_layout_class("ui-select-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select-button"
            data-ui-size=size.token()
            data-ui-open=move || bool_token(open.get())
        >
            {label.map(|label| view! {
                <label for=id.clone() data-ui-slot="label">
                    {label}
                    {required.then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
                </label>
            })}
            <button
                id=id
                type="button"
                data-ui-slot="trigger"
                aria-haspopup="listbox"
                aria-expanded=move || bool_token(open.get())
                disabled=move || disabled.get()
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        open.update(|open| *open = !*open);
                    }
                }
            >
                <span data-ui-slot="value">{trigger_text}</span>
                <Icon icon=IconName::ChevronDown size=IconSize::Sm />
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <ul role="listbox" data-ui-slot="options">
                    {items}
                </ul>
            </Show>
            {name.map(|name| view! {
                <input
                    type="hidden"
                    name=name
                    prop:value=move || selected.get().unwrap_or_default()
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn textarea_kind_has_no_input_type() {
        assert_eq!(InputKind::Text.input_type(), Some("text"));
        assert_eq!(InputKind::Password.input_type(), Some("password"));
        assert_eq!(InputKind::Textarea.input_type(), None);
    }

    #[test]
    fn errors_replace_help_text_and_name_the_described_element() {
        let error = FieldMessage::pick(Some("Required".into()), Some("Your legal name".into()));
        assert_eq!(error, Some(FieldMessage::Error("Required".into())));
        assert_eq!(error.map(|message| message.element_id("name")).as_deref(), Some("name-error"));

        let help = FieldMessage::pick(Some("  ".into()), Some("Your legal name".into()));
        assert_eq!(help, Some(FieldMessage::Help("Your legal name".into())));
        assert_eq!(help.map(|message| message.element_id("name")).as_deref(), Some("name-help"));

        assert_eq!(FieldMessage::pick(None, Some(String::new())), None);
    }

    #[test]
    fn query_gate_reports_changes_only() {
        let mut gate = QueryGate::default();
        assert_eq!(gate.admit("inv").as_deref(), Some("inv"));
        assert_eq!(gate.admit("inv"), None);
        assert_eq!(gate.admit("invo").as_deref(), Some("invo"));
        assert_eq!(gate.admit("").as_deref(), Some(""));
        assert_eq!(gate.admit(""), None);
    }

    #[test]
    fn select_label_falls_back_to_value_then_placeholder() {
        let options = vec![
            SelectOption::new("paid").label("Paid"),
            SelectOption::new("draft"),
            SelectOption::new("void").disabled(true),
        ];
        assert_eq!(selected_label(&options, Some("paid"), "Pick one"), "Paid");
        assert_eq!(selected_label(&options, Some("draft"), "Pick one"), "draft");
        assert_eq!(selected_label(&options, Some("missing"), "Pick one"), "Pick one");
        assert_eq!(selected_label(&options, None, "Pick one"), "Pick one");
        assert!(options[2].disabled);
    }
}
