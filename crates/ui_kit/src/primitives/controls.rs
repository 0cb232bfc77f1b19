use super::*;

#[component]
/// Shared button primitive with variant, size, outline, loading, and icon slots.
///
/// While `loading` is set the icon slot shows a spinner and the label stays visible.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(default = IconPosition::Left)] icon_position: IconPosition,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] outline: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let icon_slot = move || {
        if loading.get() {
            view! {
                <svg data-ui-slot="spinner" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                    <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
                </svg>
            }
            .into_view()
        } else {
            icon.map(|icon| view! { <span data-ui-slot="icon"><Icon icon size=IconSize::Sm /></span> })
                .into_view()
        }
    };

    view! {
        <button
            type=button_type.token()
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            aria-busy=move || bool_token(loading.get())
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-fill=move || if outline.get() { "outline" } else { "solid" }
            data-ui-icon-position=icon_position.token()
            data-ui-loading=move || bool_token(loading.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon_slot}
            <span data-ui-slot="label">{children()}</span>
        </button>
    }
}

#[component]
/// Shared select-field primitive.
///
/// `on_change` receives the newly selected option value.
pub fn SelectField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(into)] options: MaybeSignal<Vec<(String, String)>>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let value = tracked(value);
    view! {
        <span
            class=merge_layout_class("ui-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-slot=ui_slot
        >
            <select
                aria-label=aria_label
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-disabled=move || bool_token(disabled.get())
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_value(&ev));
                    }
                }
            >
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, label)| {
                            let is_selected = option_value == selected;
                            view! {
                                <option value=option_value selected=is_selected>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <span data-ui-slot="chevron">
                <Icon icon=IconName::ChevronDown size=IconSize::Sm />
            </span>
        </span>
    }
}
