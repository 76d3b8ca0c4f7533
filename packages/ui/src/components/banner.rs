use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerKind {
    #[default]
    Error,
    Success,
    Info,
}

/// Inline message box. Renders nothing when `message` is `None`.
#[component]
pub fn Banner(#[props(default)] kind: BannerKind, #[props(!optional)] message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    let class = match kind {
        BannerKind::Error => "banner banner-error",
        BannerKind::Success => "banner banner-success",
        BannerKind::Info => "banner banner-info",
    };
    rsx! {
        div { class, role: "status", "{message}" }
    }
}

/// Message under a form field.
#[component]
pub fn FieldError(#[props(!optional)] message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", "{message}" }
        },
        None => rsx! {},
    }
}
