//! Projects tab: a management table and a card browser over the same list.

use api::HttpBackend;
use dioxus::prelude::*;

use super::{ConfirmDialog, ProjectBrowser, ProjectsManager};
use crate::controllers::projects::{ProjectsController, ProjectsState};
use crate::session::{use_session, SessionState};

pub(crate) type Projects = ProjectsController<HttpBackend, Signal<ProjectsState>>;

/// Controller bound to the current session's backend.
pub(crate) fn projects_controller(
    session: Signal<SessionState>,
    state: Signal<ProjectsState>,
) -> Projects {
    let backend = session.peek().backend();
    ProjectsController::new(backend, state)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Manage,
    Browse,
}

#[component]
pub fn ProjectsView() -> Element {
    let session = use_session();
    let state = use_signal(ProjectsState::default);
    let mut layout = use_signal(|| Layout::Manage);

    let _ = use_resource(move || async move {
        let backend = session.read().backend();
        ProjectsController::new(backend, state).load().await;
    });

    let pending = state.read().pending_project().map(|p| p.name.clone());

    rsx! {
        div {
            class: "view",
            div {
                class: "view__header",
                h2 { "Projects" }
                div {
                    class: "segmented",
                    button {
                        class: if layout() == Layout::Manage { "segmented__item segmented__item--active" } else { "segmented__item" },
                        r#type: "button",
                        onclick: move |_| layout.set(Layout::Manage),
                        "Manage"
                    }
                    button {
                        class: if layout() == Layout::Browse { "segmented__item segmented__item--active" } else { "segmented__item" },
                        r#type: "button",
                        onclick: move |_| layout.set(Layout::Browse),
                        "Browse"
                    }
                }
            }

            match layout() {
                Layout::Manage => rsx! { ProjectsManager { state } },
                Layout::Browse => rsx! { ProjectBrowser { state } },
            }

            if let Some(name) = pending {
                ConfirmDialog {
                    title: "Delete project",
                    message: format!("Delete project \"{name}\"? This cannot be undone."),
                    on_confirm: move |_| async move {
                        projects_controller(session, state).confirm_delete().await;
                    },
                    on_cancel: move |_| projects_controller(session, state).cancel_delete(),
                }
            }
        }
    }
}
