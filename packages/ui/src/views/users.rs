use dioxus::prelude::*;

use crate::components::{Banner, Button, ButtonVariant};
use crate::controllers::users::{load_users, UsersState};
use crate::session::use_session;

/// Admin-only user listing.
#[component]
pub fn UsersView() -> Element {
    let session = use_session();
    let state = use_signal(UsersState::default);

    let _ = use_resource(move || async move {
        let backend = session.read().backend();
        load_users(&backend, &state).await;
    });

    let current = state();
    let users = current.list.items().to_vec();

    rsx! {
        div {
            class: "view",
            div {
                class: "view__header",
                h2 { "Users" }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: current.list.is_loading(),
                    onclick: move |_| async move {
                        let backend = session.peek().backend();
                        load_users(&backend, &state).await;
                    },
                    "Refresh"
                }
            }

            Banner { message: current.error.clone() }

            if current.list.is_loading() && users.is_empty() {
                p { class: "text-muted", "Loading..." }
            } else if users.is_empty() {
                p { class: "empty-state", "No users to show." }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Id" }
                            th { "Username" }
                            th { "Email" }
                        }
                    }
                    tbody {
                        for user in users {
                            tr {
                                key: "{user.id}",
                                td { "{user.id}" }
                                td { "{user.username}" }
                                td { class: "text-muted", "{user.contact()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
