use dioxus::prelude::*;

use crate::components::{Banner, BannerKind, Button, ButtonVariant, FieldError, Input, Label};
use crate::controllers::auth::{signup, SignupState};
use crate::forms::{field, SignupForm};
use crate::session::use_session;

/// Update one signup field and clear its error.
fn edit(mut state: Signal<SignupState>, key: &'static str, apply: impl FnOnce(&mut SignupForm)) {
    let mut s = state.write();
    apply(&mut s.form);
    s.field_errors.clear_field(key);
}

#[component]
pub fn SignupView(on_authenticated: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut state = use_signal(SignupState::default);

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let backend = session.peek().backend();
        if let Some(token) = signup(&backend, &state).await {
            session.write().sign_in(&token);
            on_authenticated.call(());
        }
    };

    let current = state();
    let error_for = |key: &str| current.field_errors.get(key).map(str::to_string);

    rsx! {
        div {
            class: "view view--narrow",
            h2 { "Sign up" }

            Banner { message: current.error.clone() }
            Banner { kind: BannerKind::Success, message: current.notice.clone() }

            form {
                class: "form",
                onsubmit: submit,
                div {
                    class: "form-field",
                    Label { html_for: "signup-username", "Username" }
                    Input {
                        id: "signup-username",
                        value: current.form.username.clone(),
                        invalid: current.field_errors.has(field::USERNAME),
                        oninput: move |evt: FormEvent| edit(state, field::USERNAME, |f| f.username = evt.value()),
                    }
                    FieldError { message: error_for(field::USERNAME) }
                }
                div {
                    class: "form-field",
                    Label { html_for: "signup-email", "Email" }
                    Input {
                        id: "signup-email",
                        r#type: "email",
                        value: current.form.email.clone(),
                        oninput: move |evt: FormEvent| state.write().form.email = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "signup-password", "Password" }
                    Input {
                        id: "signup-password",
                        r#type: "password",
                        value: current.form.password.clone(),
                        invalid: current.field_errors.has(field::PASSWORD),
                        oninput: move |evt: FormEvent| edit(state, field::PASSWORD, |f| f.password = evt.value()),
                    }
                    FieldError { message: error_for(field::PASSWORD) }
                }
                div {
                    class: "form-field",
                    Label { html_for: "signup-confirm", "Confirm password" }
                    Input {
                        id: "signup-confirm",
                        r#type: "password",
                        value: current.form.confirm.clone(),
                        invalid: current.field_errors.has(field::CONFIRM),
                        oninput: move |evt: FormEvent| edit(state, field::CONFIRM, |f| f.confirm = evt.value()),
                    }
                    FieldError { message: error_for(field::CONFIRM) }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: current.submitting,
                    if current.submitting { "Creating account..." } else { "Create account" }
                }
            }
        }
    }
}
