use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "field-label", r#for: html_for, {children} }
    }
}

/// Single-line input. `invalid` adds the error outline.
#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] invalid: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let input_type = r#type;
    let state = if invalid { "input input-invalid" } else { "input" };
    rsx! {
        input {
            class: "{state} {class}",
            r#type: input_type,
            id,
            placeholder,
            value,
            disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] invalid: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let state = if invalid { "input input-invalid" } else { "input" };
    rsx! {
        textarea {
            class: "{state} {class}",
            id,
            placeholder,
            rows: "{rows}",
            value,
            disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
