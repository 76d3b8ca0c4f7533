use dioxus::prelude::*;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant};

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title,
            locked: busy,
            on_close: move |_| on_cancel.call(()),
            p { class: "modal-card__body", "{message}" }
            div {
                class: "modal-card__actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
