use super::*;

/// One breadcrumb entry.
#[derive(Clone, Default)]
pub struct BreadcrumbItem {
    /// Visible text.
    pub label: String,
    /// Optional link target.
    pub href: Option<String>,
    /// Marks the current location.
    pub active: bool,
    /// Optional click handler for non-link navigation.
    pub on_click: Option<Callback<()>>,
}

impl BreadcrumbItem {
    /// Plain item.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Links the item to `href`.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Marks the item as the current location.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Attaches a click handler.
    pub fn on_click(mut self, on_click: Callback<()>) -> Self {
        self.on_click = Some(on_click);
        self
    }
}

#[component]
/// Breadcrumb trail with an optional back affordance.
pub fn Breadcrumb(
    items: Vec<BreadcrumbItem>,
    #[prop(default = true)] show_back_button: bool,
    #[prop(optional)] on_back_click: Option<Callback<()>>,
    #[prop(default = " / ".to_string(), into)] separator: String,
    #[prop(default = "Back".to_string(), into)] back_button_label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    let trail = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let separator = (index < last).then(|| separator.clone());
            let interactive = item.on_click.is_some();
            let on_click = item.on_click;
            let label = if item.active {
                view! { <span data-ui-slot="current" aria-current="page">{item.label}</span> }
                    .into_view()
            } else if let Some(href) = item.href {
                view! { <a data-ui-slot="link" href=href>{item.label}</a> }.into_view()
            } else {
                view! {
                    <span
                        data-ui-slot="item"
                        data-ui-interactive=bool_token(interactive)
                        on:click=move |_| {
                            if let Some(on_click) = on_click.as_ref() {
                                on_click.call(());
                            }
                        }
                    >
                        {item.label}
                    </span>
                }
                .into_view()
            };
            view! {
                <li data-ui-slot="crumb">
                    {label}
                    {separator.map(|separator| view! { <span data-ui-slot="separator" aria-hidden="true">{separator}</span> })}
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            class=merge_layout_class("ui-breadcrumb", layout_class)
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
        >
            {show_back_button.then(|| view! {
                <button
                    type="button"
                    data-ui-slot="back"
                    aria-label=back_button_label.clone()
                    on:click=move |_| {
                        if let Some(on_back_click) = on_back_click.as_ref() {
                            on_back_click.call(());
                        }
                    }
                >
                    <Icon icon=IconName::ChevronLeft size=IconSize::Md />
                </button>
            })}
            <ol data-ui-slot="trail">{trail}</ol>
        </nav>
    }
}
