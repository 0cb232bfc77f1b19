//! Transient notifications.
//!
//! [`AlertProvider`] owns an [`AlertQueue`] and hands out an [`Alerts`] handle through the
//! reactive context; anything below it calls [`use_alerts`] to raise alerts.

mod confirm;
mod queue;

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use thiserror::Error;

pub use confirm::ConfirmDialog;
pub use queue::{
    stack_style, AlertCountdown, AlertItem, AlertKind, AlertQueue, AlertSpec, EXIT_TRANSITION_MS,
    TICK_MS,
};

use crate::settings::use_ui_kit_settings;
use crate::{Icon, IconName, IconSize};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Alert lookup failures.
pub enum AlertError {
    /// [`use_alerts`] ran outside an [`AlertProvider`].
    #[error("no AlertProvider is mounted above this component")]
    ProviderMissing,
}

/// Handle for raising and dismissing alerts.
#[derive(Debug, Clone, Copy)]
pub struct Alerts {
    queue: RwSignal<AlertQueue>,
    default_duration_ms: u64,
}

impl Alerts {
    /// Handle over a fresh queue. Alerts without an explicit duration live `default_duration_ms`.
    pub fn new(default_duration_ms: u64) -> Self {
        Self {
            queue: create_rw_signal(AlertQueue::new()),
            default_duration_ms,
        }
    }

    /// Shows `spec` and returns its id.
    pub fn show(&self, spec: AlertSpec) -> u64 {
        let default_duration_ms = self.default_duration_ms;
        let mut id = 0;
        self.queue
            .update(|queue| id = queue.push(spec, default_duration_ms));
        id
    }

    /// Shows a success alert.
    pub fn success(&self, message: impl Into<String>, description: Option<&str>) -> u64 {
        self.show_kind(AlertKind::Success, message, description)
    }

    /// Shows an error alert.
    pub fn error(&self, message: impl Into<String>, description: Option<&str>) -> u64 {
        self.show_kind(AlertKind::Error, message, description)
    }

    /// Shows an informational alert.
    pub fn info(&self, message: impl Into<String>, description: Option<&str>) -> u64 {
        self.show_kind(AlertKind::Info, message, description)
    }

    /// Shows a warning alert.
    pub fn warning(&self, message: impl Into<String>, description: Option<&str>) -> u64 {
        self.show_kind(AlertKind::Warning, message, description)
    }

    /// Removes the alert immediately, skipping its exit transition.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.remove(id);
        });
    }

    /// Reactive view of the queue.
    pub fn queue(&self) -> Signal<AlertQueue> {
        self.queue.into()
    }

    fn show_kind(&self, kind: AlertKind, message: impl Into<String>, description: Option<&str>) -> u64 {
        let mut spec = AlertSpec::new(kind, message);
        spec.description = description.map(str::to_string);
        self.show(spec)
    }
}

/// Returns the [`Alerts`] handle of the nearest [`AlertProvider`].
///
/// # Errors
///
/// Returns [`AlertError::ProviderMissing`] outside a provider; the failure is also logged.
pub fn use_alerts() -> Result<Alerts, AlertError> {
    use_context::<Alerts>().ok_or_else(|| {
        logging::warn!("alert raised without an AlertProvider");
        AlertError::ProviderMissing
    })
}

#[component]
/// Provides [`Alerts`] to `children` and renders the alert stack.
pub fn AlertProvider(
    #[prop(optional)] default_duration_ms: Option<u64>,
    children: Children,
) -> impl IntoView {
    let alerts = Alerts::new(default_duration_ms.unwrap_or(use_ui_kit_settings().alert_duration_ms));
    provide_context(alerts);
    let queue = alerts.queue;

    view! {
        {children()}
        <div class="ui-alert-stack" aria-live="polite" data-ui-primitive="true" data-ui-kind="alert-stack">
            <For
                each=move || queue.with(|queue| queue.items().to_vec())
                key=|item| item.id
                let:item
            >
                {
                    let id = item.id;
                    let style = Signal::derive(move || {
                        queue.with(|queue| queue.index_of(id)).map(stack_style).unwrap_or_default()
                    });
                    view! {
                        <Alert
                            kind=item.kind
                            message=item.message
                            description=item.description
                            duration_ms=item.duration_ms
                            stack_style=style
                            on_close=Callback::new(move |_| alerts.dismiss(id))
                        />
                    }
                }
            </For>
        </div>
    }
}

#[component]
/// One alert with an icon, close button, and countdown bar. Dismisses itself after
/// `duration_ms`; `on_close` runs once the exit transition finishes.
pub fn Alert(
    #[prop(default = AlertKind::Info)] kind: AlertKind,
    #[prop(into)] message: String,
    #[prop(default = None)] description: Option<String>,
    duration_ms: u64,
    #[prop(optional, into)] stack_style: MaybeSignal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let leaving = create_rw_signal(false);
    let countdown = create_rw_signal(AlertCountdown::new(duration_ms));
    let exit_timer = store_value(None::<TimeoutHandle>);

    let begin_close = move || {
        if leaving.get_untracked() {
            return;
        }
        leaving.set(true);
        match set_timeout_with_handle(
            move || on_close.call(()),
            Duration::from_millis(EXIT_TRANSITION_MS),
        ) {
            Ok(handle) => exit_timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("alert exit timer failed: {err:?}");
                on_close.call(());
            }
        }
    };

    if let Ok(interval) = set_interval_with_handle(
        move || countdown.update(AlertCountdown::tick),
        Duration::from_millis(TICK_MS),
    ) {
        on_cleanup(move || interval.clear());
    }
    if let Ok(timer) = set_timeout_with_handle(begin_close, Duration::from_millis(duration_ms)) {
        on_cleanup(move || timer.clear());
    }
    on_cleanup(move || {
        if let Some(handle) = exit_timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <div
            class="ui-alert"
            role="alert"
            style=move || stack_style.get()
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=kind.token()
            data-ui-state=move || if leaving.get() { "leaving" } else { "visible" }
        >
            <span data-ui-slot="icon">
                <Icon icon=kind.icon() size=IconSize::Md />
            </span>
            <div data-ui-slot="content">
                <div data-ui-slot="header">
                    <p data-ui-slot="message">{message}</p>
                    <button
                        type="button"
                        data-ui-slot="close"
                        aria-label="Dismiss"
                        on:click=move |_| begin_close()
                    >
                        <Icon icon=IconName::Close size=IconSize::Sm />
                    </button>
                </div>
                {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
                <div data-ui-slot="track">
                    <div
                        data-ui-slot="progress"
                        style=move || format!("width: {}%;", countdown.get().progress_percent())
                    ></div>
                </div>
            </div>
        </div>
    }
}
