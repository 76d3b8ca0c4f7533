use dioxus::prelude::*;

use super::projects::projects_controller;
use super::ModalOverlay;
use crate::components::{Banner, Button, ButtonVariant, FieldError, Input, Label, Textarea};
use crate::controllers::projects::ProjectsState;
use crate::forms::field;
use crate::icons::{FaArrowsRotate, FaFolderOpen, FaMagnifyingGlass, FaPlus};
use crate::session::use_session;
use crate::Icon;

/// Searchable project cards with a modal create form.
#[component]
pub fn ProjectBrowser(state: Signal<ProjectsState>) -> Element {
    let session = use_session();
    let mut state = state;
    let mut query = use_signal(String::new);
    let mut creating = use_signal(|| false);

    let mut open_create = move || {
        state.write().reset_form();
        creating.set(true);
    };

    let current = state();
    let cards: Vec<(u64, String, String, usize)> = current
        .search(&query())
        .into_iter()
        .map(|p| {
            let description = match p.description_text() {
                "" => "No description.".to_string(),
                text => text.to_string(),
            };
            (p.id, p.name.clone(), description, p.users.len())
        })
        .collect();
    let loading = current.list.is_loading();

    rsx! {
        div {
            class: "browser__toolbar",
            div {
                class: "search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    class: "search__input",
                    placeholder: "Search projects...",
                    value: query(),
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: loading,
                onclick: move |_| async move {
                    projects_controller(session, state).load().await;
                },
                Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                if loading { " Refreshing..." } else { " Refresh" }
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| open_create(),
                Icon { icon: FaPlus, width: 14, height: 14 }
                " New project"
            }
        }

        if !creating() {
            Banner { message: current.error.clone() }
        }

        if cards.is_empty() {
            div {
                class: "empty-state empty-state--boxed",
                Icon { icon: FaFolderOpen, width: 40, height: 40 }
                p { class: "empty-state__title", "No projects found" }
                p { class: "text-muted", "Create your first project to start organizing your work." }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| open_create(),
                    "New project"
                }
            }
        } else {
            div {
                class: "card-grid",
                for (id, name, description, members) in cards {
                    div {
                        key: "{id}",
                        class: "card",
                        div { class: "card__title", "{name}" }
                        div { class: "card__body text-muted", "{description}" }
                        div { class: "card__footer text-muted", "{members} member(s)" }
                    }
                }
            }
        }

        if creating() {
            ModalOverlay {
                title: "New project",
                locked: current.saving,
                on_close: move |_| {
                    state.write().reset_form();
                    creating.set(false);
                },
                form {
                    class: "form",
                    onsubmit: move |evt: FormEvent| async move {
                        evt.prevent_default();
                        if projects_controller(session, state).save().await {
                            creating.set(false);
                        }
                    },
                    Banner { message: current.error.clone() }
                    div {
                        class: "form-field",
                        Label { html_for: "browser-project-name", "Name" }
                        Input {
                            id: "browser-project-name",
                            placeholder: "Project name",
                            value: current.form.name.clone(),
                            invalid: current.field_errors.has(field::NAME),
                            oninput: move |evt: FormEvent| state.write().set_name(evt.value()),
                        }
                        FieldError { message: current.field_errors.get(field::NAME).map(str::to_string) }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "browser-project-description", "Description" }
                        Textarea {
                            id: "browser-project-description",
                            placeholder: "Description (optional)",
                            value: current.form.description.clone(),
                            invalid: current.field_errors.has(field::DESCRIPTION),
                            oninput: move |evt: FormEvent| state.write().set_description(evt.value()),
                        }
                        FieldError { message: current.field_errors.get(field::DESCRIPTION).map(str::to_string) }
                    }
                    div {
                        class: "modal-card__actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: current.saving,
                            onclick: move |_| {
                                state.write().reset_form();
                                creating.set(false);
                            },
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: current.saving,
                            if current.saving { "Creating..." } else { "Create project" }
                        }
                    }
                }
            }
        }
    }
}
