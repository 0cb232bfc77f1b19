use leptos::*;

use super::AlertKind;
use crate::primitives::{Button, ButtonVariant, Modal, ModalSize};
use crate::{Icon, IconSize};

impl AlertKind {
    /// Confirm button weight for a dialog of this kind.
    pub(crate) fn confirm_variant(self) -> ButtonVariant {
        match self {
            Self::Error | Self::Warning => ButtonVariant::Danger,
            Self::Success | Self::Info => ButtonVariant::Primary,
        }
    }
}

#[component]
/// Modal asking the user to confirm or cancel an action.
///
/// Cancel, Escape, and an overlay click all call `on_cancel`. The dialog does not close itself;
/// the caller owns `open`.
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm Action".to_string(), into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = "Confirm".to_string(), into)] confirm_label: String,
    #[prop(default = "Cancel".to_string(), into)] cancel_label: String,
    #[prop(default = AlertKind::Warning)] kind: AlertKind,
) -> impl IntoView {
    let labels = store_value((confirm_label, cancel_label));
    let text = store_value((title, message, description));

    view! {
        <Modal
            open=open
            on_close=on_cancel
            size=ModalSize::Sm
            show_close_button=false
            layout_class="ui-confirm-dialog"
            footer=move || {
                let (confirm_label, cancel_label) = labels.get_value();
                view! {
                    <Button
                        variant=ButtonVariant::Neutral
                        outline=true
                        on_click=Callback::new(move |_| on_cancel.call(()))
                    >
                        {cancel_label}
                    </Button>
                    <Button
                        variant=kind.confirm_variant()
                        on_click=Callback::new(move |_| on_confirm.call(()))
                    >
                        {confirm_label}
                    </Button>
                }
            }
        >
            {move || {
                let (title, message, description) = text.get_value();
                view! {
                    <div data-ui-slot="confirm" data-ui-variant=kind.token()>
                        <span data-ui-slot="icon">
                            <Icon icon=kind.icon() size=IconSize::Lg />
                        </span>
                        <div data-ui-slot="content">
                            <h3 data-ui-slot="title">{title}</h3>
                            <p data-ui-slot="message">{message}</p>
                            {description.map(|description| view! {
                                <p data-ui-slot="description">{description}</p>
                            })}
                        </div>
                    </div>
                }
            }}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn destructive_kinds_confirm_with_the_danger_variant() {
        assert_eq!(AlertKind::Error.confirm_variant(), ButtonVariant::Danger);
        assert_eq!(AlertKind::Warning.confirm_variant(), ButtonVariant::Danger);
        assert_eq!(AlertKind::Success.confirm_variant(), ButtonVariant::Primary);
        assert_eq!(AlertKind::Info.confirm_variant(), ButtonVariant::Primary);
    }
}
