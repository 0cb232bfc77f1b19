use super::*;

#[component]
/// Shared card surface.
pub fn Card(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Compact status badge. Becomes keyboard-activatable when `on_click` is set.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let clickable = on_click.is_some();
    let activate = move || {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(());
        }
    };

    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            role=clickable.then_some("button")
            tabindex=clickable.then_some(0)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-interactive=bool_token(clickable)
            on:click=move |_| activate()
            on:keydown=move |ev: KeyboardEvent| {
                if clickable && is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown when a collection has nothing to display.
///
/// The action button only renders when both `action_label` and `on_action` are given.
pub fn EmptyStateCard(
    #[prop(default = "No Record Found".to_string(), into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(optional)] on_action: Option<Callback<MouseEvent>>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let action = match (action_label, on_action) {
        (Some(label), Some(on_action)) => Some(view! {
            <div data-ui-slot="action">
                <Button size=ControlSize::Md on_click=on_action>
                    {label}
                </Button>
            </div>
        }),
        _ => None,
    };
    let description = description.filter(|description| !description.is_empty());

    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            <div data-ui-slot="content">
                {icon.map(|icon| view! { <div data-ui-slot="icon"><Icon icon size=IconSize::Lg /></div> })}
                <h2 data-ui-slot="title">{title}</h2>
                {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
                {action}
            </div>
        </div>
    }
}
