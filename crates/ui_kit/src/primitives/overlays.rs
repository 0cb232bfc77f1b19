use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::html;
use leptos::leptos_dom::helpers::TimeoutHandle;
use wasm_bindgen::JsCast;

use super::placement::{MenuPosition, Rect, TooltipPlacement};
use super::*;
use crate::settings::use_ui_kit_settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Modal panel width.
pub enum ModalSize {
    /// 20rem.
    Xs,
    /// 24rem.
    Sm,
    /// 32rem.
    #[default]
    Md,
    /// 42rem.
    Lg,
    /// 56rem.
    Xl,
    /// 72rem.
    Xxl,
    /// Fills the viewport. Overlay clicks never close a full-size modal.
    Full,
}

impl ModalSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Where the modal panel sits horizontally.
pub enum ModalPosition {
    /// Slides in from the left edge.
    Left,
    /// Slides in from the right edge.
    Right,
    /// Centered dialog.
    #[default]
    Center,
}

impl ModalPosition {
    fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl ModalPosition {
    /// Full-size modals always anchor top-left.
    pub(crate) fn effective(self, size: ModalSize) -> Self {
        if size == ModalSize::Full {
            Self::Left
        } else {
            self
        }
    }
}

pub(crate) fn overlay_click_closes(size: ModalSize, close_on_overlay_click: bool) -> bool {
    close_on_overlay_click && size != ModalSize::Full
}

/// Whether one modal currently holds the body scroll lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    /// Body change needed for the modal's new open state: `Some(true)` locks, `Some(false)`
    /// releases, `None` leaves the body alone.
    pub(crate) fn sync(&mut self, open: bool) -> Option<bool> {
        if open == self.held {
            return None;
        }
        self.held = open;
        Some(open)
    }
}

fn apply_scroll_lock(lock: &Cell<ScrollLock>, open: bool) {
    let mut state = lock.get();
    let change = state.sync(open);
    lock.set(state);
    if let Some(locked) = change {
        set_body_scroll_locked(locked);
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        logging::warn!("modal scroll lock failed: {err:?}");
    }
}

#[component]
/// Dialog overlay. Escape and the close button call `on_close`; the overlay does too unless the
/// modal is full-size. The document body does not scroll while the modal is open.
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(default = ModalPosition::Center)] position: ModalPosition,
    #[prop(default = true)] show_close_button: bool,
    #[prop(default = true)] close_on_overlay_click: bool,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if !close_on_escape
            || ev.default_prevented()
            || ev.key() != "Escape"
            || !open.get_untracked()
        {
            return;
        }
        ev.prevent_default();
        on_close.call(());
    });
    on_cleanup(move || escape_listener.remove());

    let scroll_lock = Rc::new(Cell::new(ScrollLock::default()));
    create_effect({
        let scroll_lock = Rc::clone(&scroll_lock);
        move |_| apply_scroll_lock(&scroll_lock, open.get())
    });
    on_cleanup(move || apply_scroll_lock(&scroll_lock, false));

    let title = store_value(title);
    let footer = store_value(footer);
    let overlay_closes = overlay_click_closes(size, close_on_overlay_click);
    let position = position.effective(size);

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=merge_layout_class("ui-modal", layout_class)
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-size=size.token()
                data-ui-position=position.token()
            >
                <div
                    data-ui-slot="overlay"
                    aria-hidden="true"
                    on:click=move |_| {
                        if overlay_closes {
                            on_close.call(());
                        }
                    }
                ></div>
                <div data-ui-slot="panel" role="dialog" aria-modal="true">
                    {move || {
                        let title = title.get_value();
                        (title.is_some() || show_close_button).then(|| view! {
                            <header data-ui-slot="header">
                                <h2 data-ui-slot="title">{title}</h2>
                                {show_close_button.then(|| view! {
                                    <button
                                        type="button"
                                        data-ui-slot="close"
                                        aria-label="Close"
                                        on:click=move |_| on_close.call(())
                                    >
                                        <Icon icon=IconName::Close size=IconSize::Md />
                                    </button>
                                })}
                            </header>
                        })
                    }}
                    <div data-ui-slot="body">{children()}</div>
                    {move || footer.get_value().map(|footer| view! {
                        <footer data-ui-slot="footer">{footer.run()}</footer>
                    })}
                </div>
            </div>
        </Show>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Tooltip color scheme.
pub enum TooltipVariant {
    /// Dark bubble.
    #[default]
    Dark,
    /// Light bubble.
    Light,
    /// Brand-colored bubble.
    Accent,
}

impl TooltipVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Accent => "accent",
        }
    }
}

fn viewport_size() -> (f64, f64) {
    let window = window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default();
    (width, height)
}

#[component]
/// Hover and focus tooltip. Appears after `delay_ms` (the configured default when unset) and
/// flips to the opposite side when the preferred one would leave the viewport. Disabled
/// tooltips and empty content leave only the trigger.
pub fn Tooltip(
    #[prop(into)] content: MaybeSignal<String>,
    #[prop(default = TooltipPlacement::Top)] placement: TooltipPlacement,
    #[prop(optional)] delay_ms: Option<u64>,
    #[prop(default = TooltipVariant::Dark)] variant: TooltipVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let delay = Duration::from_millis(delay_ms.unwrap_or(use_ui_kit_settings().tooltip_delay_ms));
    let disabled = tracked(disabled);
    let content = tracked(content);
    let visible = create_rw_signal(false);
    let resolved = create_rw_signal(placement);
    let pending = store_value(None::<TimeoutHandle>);
    let trigger_ref = create_node_ref::<html::Span>();
    let tooltip_ref = create_node_ref::<html::Div>();

    let cancel_pending = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
            pending.set_value(None);
        }
    };
    let show = move || {
        if disabled.get_untracked() || content.with_untracked(String::is_empty) {
            return;
        }
        cancel_pending();
        match set_timeout_with_handle(move || visible.set(true), delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => logging::warn!("tooltip timer failed: {err:?}"),
        }
    };
    let hide = move || {
        cancel_pending();
        visible.set(false);
    };
    on_cleanup(cancel_pending);

    create_effect(move |_| {
        if !visible.get() {
            resolved.set(placement);
            return;
        }
        let (Some(trigger), Some(tooltip)) = (trigger_ref.get(), tooltip_ref.get()) else {
            return;
        };
        let (viewport_width, viewport_height) = viewport_size();
        resolved.set(placement.resolve(
            Rect::from(&trigger.get_bounding_client_rect()),
            Rect::from(&tooltip.get_bounding_client_rect()),
            viewport_width,
            viewport_height,
        ));
    });

    view! {
        <span
            node_ref=trigger_ref
            class=merge_layout_class("ui-tooltip", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip"
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
            on:focusin=move |_| show()
            on:focusout=move |_| hide()
        >
            {children()}
            <Show when=move || visible.get() fallback=|| ()>
                <div
                    node_ref=tooltip_ref
                    role="tooltip"
                    data-ui-slot="bubble"
                    data-ui-variant=variant.token()
                    data-ui-size=size.token()
                    data-ui-placement=move || resolved.get().token()
                >
                    {move || content.get()}
                </div>
            </Show>
        </span>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual weight of a row action.
pub enum RowActionVariant {
    /// Regular action.
    #[default]
    Default,
    /// Destructive action.
    Danger,
}

impl RowActionVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Danger => "danger",
        }
    }
}

/// One entry in a [`RowActionMenu`].
#[derive(Clone)]
pub struct RowAction {
    /// Visible text.
    pub label: String,
    /// Optional leading icon.
    pub icon: Option<IconName>,
    /// Disabled actions render but never fire.
    pub disabled: bool,
    /// Visual weight.
    pub variant: RowActionVariant,
    /// Invoked after the menu closes.
    pub on_select: Callback<()>,
}

impl RowAction {
    /// Enabled default-weight action.
    pub fn new(label: impl Into<String>, on_select: Callback<()>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            disabled: false,
            variant: RowActionVariant::Default,
            on_select,
        }
    }

    /// Adds a leading icon.
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Marks the action destructive.
    pub fn danger(mut self) -> Self {
        self.variant = RowActionVariant::Danger;
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub(super) fn event_inside(ev: &web_sys::Event, element: Option<&web_sys::Element>) -> bool {
    let Some(element) = element else {
        return false;
    };
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| element.contains(Some(&node)))
}

#[component]
/// Overflow menu for a table row, rendered into the document body and positioned against its
/// trigger. Closes on an outside press, on Escape, and after an action runs.
pub fn RowActionMenu(
    actions: Vec<RowAction>,
    #[prop(default = "Row actions".to_string(), into)] aria_label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let position = create_rw_signal(MenuPosition {
        top: 0.0,
        left: 0.0,
        above: false,
    });
    let actions = store_value(actions);
    let trigger_ref = create_node_ref::<html::Button>();
    let menu_ref = create_node_ref::<html::Div>();

    let outside_press = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let menu = menu_ref.get_untracked();
        let trigger = trigger_ref.get_untracked();
        if event_inside(&ev, menu.as_deref().map(|menu| menu.unchecked_ref()))
            || event_inside(&ev, trigger.as_deref().map(|trigger| trigger.unchecked_ref()))
        {
            return;
        }
        open.set(false);
    });
    on_cleanup(move || outside_press.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let toggle = move |ev: MouseEvent| {
        ev.stop_propagation();
        if open.get_untracked() {
            open.set(false);
            return;
        }
        if let Some(trigger) = trigger_ref.get_untracked() {
            let window = window();
            let (_, viewport_height) = viewport_size();
            position.set(MenuPosition::for_trigger(
                Rect::from(&trigger.get_bounding_client_rect()),
                viewport_height,
                window.scroll_x().unwrap_or_default(),
                window.scroll_y().unwrap_or_default(),
            ));
        }
        open.set(true);
    };

    let items = move || {
        let actions = actions.get_value();
        if actions.is_empty() {
            return view! { <p data-ui-slot="empty">"No actions available"</p> }.into_view();
        }
        actions
            .into_iter()
            .map(|action| {
                let RowAction {
                    label,
                    icon,
                    disabled,
                    variant,
                    on_select,
                } = action;
                view! {
                    <button
                        type="button"
                        role="menuitem"
                        data-ui-slot="menu-item"
                        data-ui-variant=variant.token()
                        disabled=disabled
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if disabled {
                                return;
                            }
                            open.set(false);
                            on_select.call(());
                        }
                    >
                        {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
                        <span>{label}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <span
            class=merge_layout_class("ui-row-action-menu", layout_class)
            data-ui-primitive="true"
            data-ui-kind="row-action-menu"
            on:click=|ev: MouseEvent| ev.stop_propagation()
        >
            <button
                node_ref=trigger_ref
                type="button"
                data-ui-slot="trigger"
                aria-label=aria_label
                aria-haspopup="menu"
                aria-expanded=move || bool_token(open.get())
                on:click=toggle
            >
                <Icon icon=IconName::MoreVertical size=IconSize::Md />
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <Portal>
                    <div
                        node_ref=menu_ref
                        role="menu"
                        class="ui-row-action-menu-surface"
                        data-ui-placement=move || if position.get().above { "above" } else { "below" }
                        style=move || position.get().style()
                    >
                        {items}
                    </div>
                </Portal>
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_size_modal_ignores_overlay_clicks() {
        assert!(overlay_click_closes(ModalSize::Md, true));
        assert!(!overlay_click_closes(ModalSize::Md, false));
        assert!(!overlay_click_closes(ModalSize::Full, true));
    }

    #[test]
    fn scroll_lock_is_released_only_by_the_modal_holding_it() {
        let mut never_opened = ScrollLock::default();
        assert_eq!(never_opened.sync(false), None);
        assert_eq!(never_opened.sync(false), None);

        let mut lock = ScrollLock::default();
        assert_eq!(lock.sync(true), Some(true));
        assert_eq!(lock.sync(true), None);
        assert_eq!(lock.sync(false), Some(false));
        assert_eq!(lock.sync(false), None);
    }

    #[test]
    fn full_size_modal_anchors_left() {
        assert_eq!(
            ModalPosition::Right.effective(ModalSize::Full),
            ModalPosition::Left
        );
        assert_eq!(
            ModalPosition::Right.effective(ModalSize::Lg),
            ModalPosition::Right
        );
    }

    #[test]
    fn row_action_builders_set_flags() {
        let runtime = create_runtime();
        let action = RowAction::new("Delete", Callback::new(|_| ()))
            .danger()
            .disabled(true)
            .icon(IconName::Close);
        assert_eq!(action.variant, RowActionVariant::Danger);
        assert!(action.disabled);
        assert_eq!(action.icon, Some(IconName::Close));
        runtime.dispose();
    }
}
