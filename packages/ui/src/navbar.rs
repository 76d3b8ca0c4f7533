use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::session::use_session;
use crate::tabs::Tab;
use crate::HealthIndicator;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn Navbar(active: Tab, on_select: EventHandler<Tab>) -> Element {
    let mut session = use_session();
    let authenticated = session.read().is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            div {
                class: "navbar__inner",
                div {
                    class: "navbar__side",
                    button {
                        class: "navbar__logo",
                        r#type: "button",
                        title: "Go to home",
                        onclick: move |_| on_select.call(Tab::Overview),
                        "Safira"
                    }
                    HealthIndicator { onclick: move |_| on_select.call(Tab::ApiStatus) }
                }
                nav {
                    class: "navbar__tabs",
                    for tab in Tab::navbar_tabs() {
                        button {
                            key: "{tab.label()}",
                            class: if tab == active { "tab-btn tab-btn--active" } else { "tab-btn" },
                            r#type: "button",
                            onclick: move |_| on_select.call(tab),
                            "{tab.label()}"
                        }
                    }
                }
                div {
                    class: "navbar__side navbar__side--end",
                    if authenticated {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                session.write().sign_out();
                                on_select.call(Tab::Overview);
                            },
                            "Sign out"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_select.call(Tab::Login),
                            "Login"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_select.call(Tab::Signup),
                            "Sign up"
                        }
                    }
                }
            }
        }
    }
}
