use api::Project;
use dioxus::prelude::*;

use super::projects::projects_controller;
use crate::components::{
    Banner, BannerKind, Button, ButtonVariant, FieldError, Input, Label, Textarea,
};
use crate::controllers::projects::ProjectsState;
use crate::forms::field;
use crate::icons::FaXmark;
use crate::session::use_session;
use crate::Icon;

/// Create/edit form plus the projects table with per-row membership controls.
#[component]
pub fn ProjectsManager(state: Signal<ProjectsState>) -> Element {
    let session = use_session();
    let mut state = state;

    let current = state();
    let editing = current.form.is_editing();
    let projects = current.list.items().to_vec();

    rsx! {
        Banner { message: current.error.clone() }
        Banner { kind: BannerKind::Success, message: current.notice.clone() }

        form {
            class: "form card",
            onsubmit: move |evt: FormEvent| async move {
                evt.prevent_default();
                projects_controller(session, state).save().await;
            },
            h3 { if editing { "Edit project" } else { "New project" } }
            div {
                class: "form-field",
                Label { html_for: "project-name", "Name" }
                Input {
                    id: "project-name",
                    placeholder: "Project name",
                    value: current.form.name.clone(),
                    invalid: current.field_errors.has(field::NAME),
                    oninput: move |evt: FormEvent| state.write().set_name(evt.value()),
                }
                FieldError { message: current.field_errors.get(field::NAME).map(str::to_string) }
            }
            div {
                class: "form-field",
                Label { html_for: "project-description", "Description" }
                Textarea {
                    id: "project-description",
                    placeholder: "Description (optional)",
                    value: current.form.description.clone(),
                    invalid: current.field_errors.has(field::DESCRIPTION),
                    oninput: move |evt: FormEvent| state.write().set_description(evt.value()),
                }
                FieldError { message: current.field_errors.get(field::DESCRIPTION).map(str::to_string) }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: current.saving,
                    if current.saving {
                        "Saving..."
                    } else if editing {
                        "Save changes"
                    } else {
                        "Create project"
                    }
                }
                if editing {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: current.saving,
                        onclick: move |_| state.write().reset_form(),
                        "Cancel"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: current.list.is_loading(),
                    onclick: move |_| async move {
                        projects_controller(session, state).load().await;
                    },
                    if current.list.is_loading() { "Refreshing..." } else { "Refresh" }
                }
            }
        }

        if projects.is_empty() && !current.list.is_loading() {
            p { class: "empty-state", "No projects yet." }
        } else {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Description" }
                        th { "Members" }
                        th { "Updated" }
                        th { "" }
                    }
                }
                tbody {
                    for project in projects {
                        ProjectRow { key: "{project.id}", project, state }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project, state: Signal<ProjectsState>) -> Element {
    let session = use_session();
    let mut state = state;
    let id = project.id;
    let member_input = state.read().member_input(id).to_string();
    let members: Vec<(u64, String, String)> = project
        .users
        .iter()
        .map(|u| (u.id, u.username.clone(), u.contact().to_string()))
        .collect();
    let updated = project
        .updated_at
        .clone()
        .or_else(|| project.created_at.clone())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        tr {
            td { class: "table__title", "{project.name}" }
            td { class: "text-muted", "{project.description_text()}" }
            td {
                div {
                    class: "chips",
                    for (member_id, username, contact) in members {
                        span {
                            key: "{member_id}",
                            class: "chip",
                            title: "{contact}",
                            "{username}"
                            button {
                                class: "chip__remove",
                                r#type: "button",
                                title: "Remove member",
                                onclick: move |_| async move {
                                    projects_controller(session, state)
                                        .remove_member(id, member_id)
                                        .await;
                                },
                                Icon { icon: FaXmark, width: 10, height: 10 }
                            }
                        }
                    }
                }
                form {
                    class: "inline-form",
                    onsubmit: move |evt: FormEvent| async move {
                        evt.prevent_default();
                        projects_controller(session, state).add_member(id).await;
                    },
                    Input {
                        class: "input--small",
                        placeholder: "User id",
                        value: member_input,
                        oninput: move |evt: FormEvent| state.write().set_member_input(id, evt.value()),
                    }
                    Button { variant: ButtonVariant::Outline, r#type: "submit", "Add" }
                }
            }
            td { class: "text-muted", "{updated}" }
            td {
                class: "table__actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| state.write().edit(id),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| projects_controller(session, state).request_delete(id),
                    "Delete"
                }
            }
        }
    }
}
