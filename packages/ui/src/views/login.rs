//! Login form, current session status and sign-out.

use dioxus::prelude::*;

use crate::components::{Banner, BannerKind, Button, ButtonVariant, FieldError, Input, Label};
use crate::controllers::auth::{login, LoginState};
use crate::forms::field;
use crate::session::use_session;

#[component]
pub fn LoginView(on_signup: EventHandler<()>, on_authenticated: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut state = use_signal(LoginState::default);
    let authenticated = session.read().is_authenticated();

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let backend = session.peek().backend();
        if let Some(token) = login(&backend, &state).await {
            session.write().sign_in(&token);
            on_authenticated.call(());
        }
    };

    let sign_out = move |_| {
        session.write().sign_out();
        state.write().notice = Some("Session ended.".to_string());
    };

    let current = state();

    rsx! {
        div {
            class: "view view--narrow",
            h2 { "Login" }

            Banner { message: current.error.clone() }
            Banner { kind: BannerKind::Success, message: current.notice.clone() }

            p {
                class: "text-muted",
                if authenticated { "You are signed in." } else { "You are not signed in." }
            }

            if authenticated {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: sign_out,
                    "Sign out"
                }
            } else {
                form {
                    class: "form",
                    onsubmit: submit,
                    div {
                        class: "form-field",
                        Label { html_for: "login-username", "Username" }
                        Input {
                            id: "login-username",
                            placeholder: "Username",
                            value: current.form.username.clone(),
                            invalid: current.field_errors.has(field::CREDENTIALS),
                            oninput: move |evt: FormEvent| {
                                let mut s = state.write();
                                s.form.username = evt.value();
                                s.field_errors.clear_field(field::CREDENTIALS);
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "Password",
                            value: current.form.password.clone(),
                            invalid: current.field_errors.has(field::CREDENTIALS),
                            oninput: move |evt: FormEvent| {
                                let mut s = state.write();
                                s.form.password = evt.value();
                                s.field_errors.clear_field(field::CREDENTIALS);
                            },
                        }
                    }
                    FieldError { message: current.field_errors.get(field::CREDENTIALS).map(str::to_string) }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: current.submitting,
                        if current.submitting { "Signing in..." } else { "Sign in" }
                    }
                }
                p {
                    class: "text-muted",
                    "No account yet? "
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| on_signup.call(()),
                        "Create one"
                    }
                }
            }
        }
    }
}
