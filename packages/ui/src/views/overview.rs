use dioxus::prelude::*;

use crate::components::Banner;
use crate::controllers::overview::{load_overview, OverviewState};
use crate::session::use_session;
use crate::tabs::Tab;

#[component]
pub fn OverviewView(on_navigate: EventHandler<Tab>) -> Element {
    let session = use_session();
    let state = use_signal(OverviewState::default);

    // Re-runs when the session changes.
    let _ = use_resource(move || async move {
        let backend = session.read().backend();
        load_overview(&backend, &state).await;
    });

    let current = state();
    let count = |n: usize| if current.loading { "…".to_string() } else { n.to_string() };

    rsx! {
        div {
            class: "view",
            h1 { "Welcome to the Safira task manager" }
            p { class: "text-muted", "Use the tabs to move between sections." }

            Banner { message: current.error.clone() }

            div {
                class: "stat-grid",
                div {
                    class: "stat-card",
                    div { class: "stat-card__label", "Projects" }
                    div { class: "stat-card__value", "{count(current.projects)}" }
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| on_navigate.call(Tab::Projects),
                        "Open the Projects tab"
                    }
                }
                div {
                    class: "stat-card",
                    div { class: "stat-card__label", "Tasks" }
                    div { class: "stat-card__value", "{count(current.tasks)}" }
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| on_navigate.call(Tab::Tasks),
                        "Open the Tasks tab"
                    }
                }
            }
        }
    }
}
