use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Full-screen overlay with a titled card. Clicking the backdrop or the close
/// button triggers `on_close` unless `locked` (an operation is in flight).
#[component]
pub fn ModalOverlay(
    title: String,
    #[props(default)] locked: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let close = move || {
        if !locked {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| close(),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-card__header",
                    h3 { "{title}" }
                    button {
                        class: "modal-card__close",
                        r#type: "button",
                        title: "Close",
                        disabled: locked,
                        onclick: move |_| close(),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                {children}
            }
        }
    }
}
