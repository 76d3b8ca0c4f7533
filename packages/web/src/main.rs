use dioxus::prelude::*;

use ui::views::{
    ApiStatusView, LoginView, OverviewView, ProjectsView, SignupView, TasksView, UsersView,
};
use ui::{Navbar, SessionProvider, Tab};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting Safira web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Shell {}
        }
    }
}

/// Navbar plus the active tab. Switching tabs unmounts the previous view,
/// which drops any request it still had in flight.
#[component]
fn Shell() -> Element {
    let mut active = use_signal(Tab::default);
    let mut select = move |tab: Tab| active.set(tab);

    rsx! {
        Navbar { active: active(), on_select: move |tab| select(tab) }
        main {
            class: "container",
            match active() {
                Tab::Overview => rsx! { OverviewView { on_navigate: move |tab| select(tab) } },
                Tab::Login => rsx! {
                    LoginView {
                        on_signup: move |_| select(Tab::Signup),
                        on_authenticated: move |_| select(Tab::Overview),
                    }
                },
                Tab::Signup => rsx! { SignupView { on_authenticated: move |_| select(Tab::Overview) } },
                Tab::Projects => rsx! { ProjectsView {} },
                Tab::Tasks => rsx! { TasksView {} },
                Tab::Users => rsx! { UsersView {} },
                Tab::ApiStatus => rsx! { ApiStatusView {} },
            }
        }
    }
}
