//! Tasks tab: create/edit form and the task table with inline status and
//! priority selects.

use api::{HttpBackend, Task, TaskPriority, TaskStatus};
use dioxus::prelude::*;

use super::ConfirmDialog;
use crate::components::{Banner, Button, ButtonVariant, FieldError, Input, Label, Textarea};
use crate::controllers::tasks::{TasksController, TasksState};
use crate::forms::{field, parse_optional_id};
use crate::session::{use_session, SessionState};

fn tasks_controller(
    session: Signal<SessionState>,
    state: Signal<TasksState>,
) -> TasksController<HttpBackend, Signal<TasksState>> {
    let backend = session.peek().backend();
    TasksController::new(backend, state)
}

#[component]
pub fn TasksView() -> Element {
    let session = use_session();
    let mut state = use_signal(TasksState::default);

    let _ = use_resource(move || async move {
        let backend = session.read().backend();
        TasksController::new(backend, state).load().await;
    });

    let current = state();
    let editing = current.form.is_editing();
    let selected_project = current.form.project.map(|id| id.to_string()).unwrap_or_default();
    let selected_assignee = current.form.assigned_to.map(|id| id.to_string()).unwrap_or_default();
    let project_options: Vec<(u64, String)> =
        current.projects.iter().map(|p| (p.id, p.name.clone())).collect();
    let assignee_options: Vec<(u64, String)> = current
        .assignee_options()
        .iter()
        .map(|u| (u.id, u.username.clone()))
        .collect();
    let tasks = current.tasks.items().to_vec();
    let pending = current.pending_task().map(|t| t.title.clone());
    let error_for = |key: &str| current.field_errors.get(key).map(str::to_string);

    rsx! {
        div {
            class: "view",
            div {
                class: "view__header",
                h2 { "Tasks" }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: current.tasks.is_loading(),
                    onclick: move |_| async move {
                        tasks_controller(session, state).load().await;
                    },
                    if current.tasks.is_loading() { "Refreshing..." } else { "Refresh" }
                }
            }

            Banner { message: current.error.clone() }

            form {
                class: "form card",
                onsubmit: move |evt: FormEvent| async move {
                    evt.prevent_default();
                    tasks_controller(session, state).save().await;
                },
                h3 { if editing { "Edit task" } else { "New task" } }
                div {
                    class: "form-grid",
                    div {
                        class: "form-field",
                        Label { html_for: "task-project", "Project" }
                        select {
                            id: "task-project",
                            class: if current.field_errors.has(field::PROJECT) { "input input-invalid" } else { "input" },
                            value: selected_project,
                            onchange: move |evt| state.write().select_project(parse_optional_id(&evt.value())),
                            option { value: "", "Select a project" }
                            for (id, name) in project_options {
                                option { key: "{id}", value: "{id}", "{name}" }
                            }
                        }
                        FieldError { message: error_for(field::PROJECT) }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "task-assignee", "Assignee" }
                        select {
                            id: "task-assignee",
                            class: "input",
                            disabled: current.form.project.is_none(),
                            value: selected_assignee,
                            onchange: move |evt| state.write().set_assignee(parse_optional_id(&evt.value())),
                            option { value: "", "Unassigned" }
                            for (id, username) in assignee_options {
                                option { key: "{id}", value: "{id}", "{username}" }
                            }
                        }
                        FieldError { message: error_for(field::ASSIGNED_TO) }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "task-status", "Status" }
                        select {
                            id: "task-status",
                            class: "input",
                            value: current.form.status.as_str(),
                            onchange: move |evt| {
                                if let Ok(status) = evt.value().parse::<TaskStatus>() {
                                    state.write().set_status(status);
                                }
                            },
                            for status in TaskStatus::ALL {
                                option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "task-priority", "Priority" }
                        select {
                            id: "task-priority",
                            class: "input",
                            value: current.form.priority.as_str(),
                            onchange: move |evt| {
                                if let Ok(priority) = evt.value().parse::<TaskPriority>() {
                                    state.write().set_priority(priority);
                                }
                            },
                            for priority in TaskPriority::ALL {
                                option { key: "{priority.as_str()}", value: priority.as_str(), "{priority.label()}" }
                            }
                        }
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "task-title", "Title" }
                    Input {
                        id: "task-title",
                        placeholder: "What needs to be done?",
                        value: current.form.title.clone(),
                        invalid: current.field_errors.has(field::TITLE),
                        oninput: move |evt: FormEvent| state.write().set_title(evt.value()),
                    }
                    FieldError { message: error_for(field::TITLE) }
                }
                div {
                    class: "form-field",
                    Label { html_for: "task-description", "Description" }
                    Textarea {
                        id: "task-description",
                        value: current.form.description.clone(),
                        oninput: move |evt: FormEvent| state.write().set_description(evt.value()),
                    }
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
                            "Create task"
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
                }
            }

            if tasks.is_empty() && !current.tasks.is_loading() {
                p { class: "empty-state", "No tasks yet." }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Project" }
                            th { "Assignee" }
                            th { "Status" }
                            th { "Priority" }
                            th { "" }
                        }
                    }
                    tbody {
                        for task in tasks {
                            TaskRow {
                                key: "{task.id}",
                                patching: current.is_patching(task.id),
                                task,
                                state,
                            }
                        }
                    }
                }
            }

            if let Some(title) = pending {
                ConfirmDialog {
                    title: "Delete task",
                    message: format!("Delete task \"{title}\"?"),
                    on_confirm: move |_| async move {
                        tasks_controller(session, state).confirm_delete().await;
                    },
                    on_cancel: move |_| tasks_controller(session, state).cancel_delete(),
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: Task, patching: bool, state: Signal<TasksState>) -> Element {
    let session = use_session();
    let mut state = state;
    let id = task.id;

    rsx! {
        tr {
            class: if patching { "table__row--busy" } else { "" },
            td {
                div { class: "table__title", "{task.title}" }
                if !task.description_text().is_empty() {
                    div { class: "text-muted", "{task.description_text()}" }
                }
            }
            td { "{task.project_label()}" }
            td { "{task.assignee_label()}" }
            td {
                select {
                    class: "input input--small",
                    value: task.status.as_str(),
                    onchange: move |evt| async move {
                        if let Ok(status) = evt.value().parse::<TaskStatus>() {
                            tasks_controller(session, state).change_status(id, status).await;
                        }
                    },
                    for status in TaskStatus::ALL {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
            }
            td {
                select {
                    class: "input input--small",
                    value: task.priority.as_str(),
                    onchange: move |evt| async move {
                        if let Ok(priority) = evt.value().parse::<TaskPriority>() {
                            tasks_controller(session, state).change_priority(id, priority).await;
                        }
                    },
                    for priority in TaskPriority::ALL {
                        option { key: "{priority.as_str()}", value: priority.as_str(), "{priority.label()}" }
                    }
                }
            }
            td {
                class: "table__actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| state.write().edit(id),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| tasks_controller(session, state).request_delete(id),
                    "Delete"
                }
            }
        }
    }
}
