//! Tasks screen: task table, create/edit form with project-scoped assignees,
//! confirmed delete and inline status/priority changes.

use std::collections::BTreeMap;

use api::{ApiError, Backend, Project, Task, TaskPatch, TaskPriority, TaskStatus, User};
use futures::join;

use super::ResourceList;
use crate::forms::{field, FieldErrors, TaskForm};
use crate::state::StateHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasksState {
    pub tasks: ResourceList<Task>,
    /// Projects offered in the form, with their members.
    pub projects: Vec<Project>,
    pub form: TaskForm,
    pub field_errors: FieldErrors,
    pub saving: bool,
    pub error: Option<String>,
    pub pending_delete: Option<u64>,
    /// Last server copy of tasks with an inline change in flight.
    rollback: BTreeMap<u64, Task>,
}

impl TasksState {
    /// Changing the project invalidates the assignee.
    pub fn select_project(&mut self, project: Option<u64>) {
        self.form.project = project;
        self.form.assigned_to = None;
        self.field_errors.clear_field(field::PROJECT);
        self.field_errors.clear_field(field::ASSIGNED_TO);
    }

    /// Members of the project selected in the form.
    pub fn assignee_options(&self) -> &[User] {
        self.form
            .project
            .and_then(|id| self.projects.iter().find(|p| p.id == id))
            .map(|p| p.users.as_slice())
            .unwrap_or_default()
    }

    pub fn set_title(&mut self, value: String) {
        self.form.title = value;
        self.field_errors.clear_field(field::TITLE);
    }

    pub fn set_description(&mut self, value: String) {
        self.form.description = value;
        self.field_errors.clear_field(field::DESCRIPTION);
    }

    pub fn set_assignee(&mut self, user: Option<u64>) {
        self.form.assigned_to = user;
        self.field_errors.clear_field(field::ASSIGNED_TO);
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.form.status = status;
    }

    pub fn set_priority(&mut self, priority: TaskPriority) {
        self.form.priority = priority;
    }

    pub fn edit(&mut self, id: u64) {
        if let Some(task) = self.tasks.get(id) {
            self.form = TaskForm::from_task(task);
            self.field_errors = FieldErrors::new();
        }
    }

    pub fn reset_form(&mut self) {
        self.form = TaskForm::default();
        self.field_errors = FieldErrors::new();
    }

    pub fn pending_task(&self) -> Option<&Task> {
        self.tasks.get(self.pending_delete?)
    }

    /// Whether an inline change for `id` awaits the server.
    pub fn is_patching(&self, id: u64) -> bool {
        self.rollback.contains_key(&id)
    }
}

const LOAD_FAILED: &str =
    "Failed to load data. Check that you are signed in and the API is running.";

fn load_error_message(err: &ApiError) -> String {
    if err.is_auth() {
        "Authentication required. Sign in to load your tasks.".to_string()
    } else {
        err.detail_or(LOAD_FAILED)
    }
}

fn save_error_message(err: &ApiError) -> String {
    err.first_field_error(&[
        field::ASSIGNED_TO,
        field::PROJECT,
        field::TITLE,
        field::DESCRIPTION,
        field::STATUS,
        field::PRIORITY,
    ])
    .or(err.detail())
    .unwrap_or("Failed to save the task.")
    .to_string()
}

pub struct TasksController<B, H> {
    backend: B,
    state: H,
}

impl<B: Backend, H: StateHandle<TasksState>> TasksController<B, H> {
    pub fn new(backend: B, state: H) -> Self {
        Self { backend, state }
    }

    /// Fetch projects and tasks together.
    pub async fn load(&self) {
        self.state.update(|s| {
            s.tasks.begin_load();
            s.error = None;
        });

        let (projects, tasks) = join!(self.backend.list_projects(), self.backend.list_tasks());

        self.state.update(|s| {
            let result = match projects {
                Ok(projects) => {
                    s.projects = projects;
                    tasks
                }
                Err(err) => Err(err),
            };
            if let Err(err) = s.tasks.finish_load(result) {
                tracing::warn!("loading tasks failed: {err}");
                s.error = Some(load_error_message(&err));
            }
        });
    }

    /// Create or update from the form. Returns true once the server accepted it.
    pub async fn save(&self) -> bool {
        let submission = self.state.update(|s| {
            s.error = None;
            s.field_errors = s.form.validate();
            if !s.field_errors.is_empty() {
                return None;
            }
            let payload = s.form.payload()?;
            s.saving = true;
            Some((s.form.id, payload))
        });
        let Some((id, payload)) = submission else {
            return false;
        };

        let result = match id {
            Some(id) => self.backend.update_task(id, &payload).await,
            None => self.backend.create_task(&payload).await,
        };

        self.state.update(|s| {
            s.saving = false;
            match result {
                Ok(task) => {
                    tracing::info!("saved task {}", task.id);
                    if id.is_some() {
                        s.tasks.replace(task);
                    } else {
                        s.tasks.prepend(task);
                    }
                    s.reset_form();
                    true
                }
                Err(err) => {
                    tracing::warn!("saving task failed: {err}");
                    s.error = Some(save_error_message(&err));
                    false
                }
            }
        })
    }

    pub fn request_delete(&self, id: u64) {
        self.state.update(|s| s.pending_delete = Some(id));
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.pending_delete = None);
    }

    pub async fn confirm_delete(&self) -> bool {
        let id = self.state.update(|s| {
            s.error = None;
            s.pending_delete.take()
        });
        let Some(id) = id else {
            return false;
        };

        let result = self.backend.delete_task(id).await;

        self.state.update(|s| match result {
            Ok(()) => {
                s.tasks.remove(id);
                if s.form.id == Some(id) {
                    s.reset_form();
                }
                true
            }
            Err(err) => {
                tracing::warn!("deleting task {id} failed: {err}");
                s.error = Some(err.detail_or("Failed to delete the task."));
                false
            }
        })
    }

    pub async fn change_status(&self, id: u64, status: TaskStatus) {
        self.patch(id, TaskPatch::status(status)).await;
    }

    pub async fn change_priority(&self, id: u64, priority: TaskPriority) {
        self.patch(id, TaskPatch::priority(priority)).await;
    }

    /// Show the change at once and send it; restore the server copy if the
    /// backend refuses.
    async fn patch(&self, id: u64, patch: TaskPatch) {
        let applied = self.state.update(|s| {
            let task = s.tasks.get_mut(id)?;
            s.rollback.entry(id).or_insert_with(|| task.clone());
            patch.apply_to(task);
            s.error = None;
            Some(())
        });
        if applied.is_none() {
            return;
        }

        let result = self.backend.patch_task(id, &patch).await;

        self.state.update(|s| match result {
            Ok(task) => {
                s.rollback.remove(&id);
                s.tasks.replace(task);
            }
            Err(err) => {
                tracing::warn!("updating task {id} failed: {err}");
                if let Some(previous) = s.rollback.remove(&id) {
                    s.tasks.replace(previous);
                }
                s.error = Some("Could not update the task.".to_string());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::controllers::testing::{project, task, user, FakeBackend};
    use crate::controllers::LoadPhase;

    fn state() -> Rc<RefCell<TasksState>> {
        Rc::new(RefCell::new(TasksState::default()))
    }

    fn seeded() -> FakeBackend {
        FakeBackend::new()
            .with_projects(vec![
                project(1, "Alpha", vec![user(5, "ana"), user(6, "bia")]),
                project(2, "Beta", vec![user(7, "caio")]),
            ])
            .with_tasks(vec![task(10, 1, "Draft"), task(11, 2, "Review")])
    }

    #[tokio::test]
    async fn test_load_fetches_projects_and_tasks() {
        let backend = seeded();
        let state = state();
        TasksController::new(&backend, state.clone()).load().await;

        let s = state.borrow();
        assert_eq!(s.tasks.phase(), LoadPhase::Loaded);
        assert_eq!(s.tasks.len(), 2);
        assert_eq!(s.projects.len(), 2);
        let mut calls = backend.calls();
        calls.sort();
        assert_eq!(calls, vec!["GET projects/", "GET tasks/"]);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_generic_hint() {
        let backend = seeded();
        backend.fail_next(ApiError::Network("connection refused".into()));
        let state = state();
        TasksController::new(&backend, state.clone()).load().await;

        let s = state.borrow();
        assert_eq!(s.tasks.phase(), LoadPhase::Failed);
        assert_eq!(s.error.as_deref(), Some(LOAD_FAILED));
    }

    #[tokio::test]
    async fn test_load_rejected_credentials_ask_for_sign_in() {
        for status in [401, 403] {
            let backend = seeded();
            backend.fail_next(ApiError::from_status(status, r#"{"detail":"Invalid token."}"#));
            let state = state();
            TasksController::new(&backend, state.clone()).load().await;

            let s = state.borrow();
            assert_eq!(s.tasks.phase(), LoadPhase::Failed);
            assert_eq!(
                s.error.as_deref(),
                Some("Authentication required. Sign in to load your tasks.")
            );
        }
    }

    #[tokio::test]
    async fn test_load_failure_prefers_server_detail() {
        let backend = seeded();
        backend.fail_next(ApiError::from_status(500, r#"{"detail":"Database offline."}"#));
        let state = state();
        TasksController::new(&backend, state.clone()).load().await;

        assert_eq!(state.borrow().error.as_deref(), Some("Database offline."));
    }

    #[tokio::test]
    async fn test_changing_project_recomputes_assignees() {
        let backend = seeded();
        let state = state();
        TasksController::new(&backend, state.clone()).load().await;

        let mut s = state.borrow_mut();
        assert!(s.assignee_options().is_empty());

        s.select_project(Some(1));
        s.set_assignee(Some(6));
        let names: Vec<_> = s.assignee_options().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["ana", "bia"]);

        s.select_project(Some(2));
        assert_eq!(s.form.assigned_to, None);
        assert_eq!(s.assignee_options().len(), 1);
        assert_eq!(s.assignee_options()[0].id, 7);
    }

    #[tokio::test]
    async fn test_invalid_form_issues_no_request() {
        let backend = seeded();
        let state = state();
        state.borrow_mut().set_title("Orphan".into());

        assert!(!TasksController::new(&backend, state.clone()).save().await);
        assert!(backend.calls().is_empty());
        assert_eq!(
            state.borrow().field_errors.get(field::PROJECT),
            Some("Select a project.")
        );
    }

    #[tokio::test]
    async fn test_create_and_edit() {
        let backend = seeded();
        backend.set_next_id(42);
        let state = state();
        let controller = TasksController::new(&backend, state.clone());
        controller.load().await;

        {
            let mut s = state.borrow_mut();
            s.select_project(Some(1));
            s.set_title("  Ship it ".into());
            s.set_assignee(Some(5));
            s.set_priority(TaskPriority::High);
        }
        assert!(controller.save().await);
        {
            let s = state.borrow();
            let head = &s.tasks.items()[0];
            assert_eq!(head.id, 42);
            assert_eq!(head.title, "Ship it");
            assert_eq!(head.assignee_label(), "ana");
            assert_eq!(head.priority, TaskPriority::High);
            assert_eq!(s.form, TaskForm::default());
        }

        state.borrow_mut().edit(11);
        state.borrow_mut().set_title("Review again".into());
        assert!(controller.save().await);

        let s = state.borrow();
        assert_eq!(s.tasks.get(11).unwrap().title, "Review again");
        assert_eq!(s.tasks.get(10).unwrap().title, "Draft");
        assert_eq!(s.tasks.len(), 3);
    }

    #[tokio::test]
    async fn test_non_member_assignee_surfaces_field_error() {
        let backend = seeded();
        let state = state();
        let controller = TasksController::new(&backend, state.clone());
        controller.load().await;

        {
            let mut s = state.borrow_mut();
            s.select_project(Some(2));
            s.set_title("Cross-team".into());
            s.form.assigned_to = Some(5);
        }
        assert!(!controller.save().await);

        let s = state.borrow();
        assert_eq!(
            s.error.as_deref(),
            Some("User is not a member of this project.")
        );
        assert_eq!(s.tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_list_and_form() {
        let backend = seeded();
        let state = state();
        let controller = TasksController::new(&backend, state.clone());
        controller.load().await;

        state.borrow_mut().edit(11);
        state.borrow_mut().set_title("Renamed".into());
        backend.fail_next(ApiError::from_status(400, r#"{"title":["Title is too long."]}"#));
        assert!(!controller.save().await);

        let s = state.borrow();
        assert_eq!(s.tasks.get(11).unwrap().title, "Review");
        assert_eq!(s.form.id, Some(11));
        assert_eq!(s.form.title, "Renamed");
        assert!(!s.saving);
        assert_eq!(s.error.as_deref(), Some("Title is too long."));
        let stored = backend.tasks();
        assert_eq!(stored.iter().find(|t| t.id == 11).unwrap().title, "Review");
    }

    #[tokio::test]
    async fn test_confirmed_delete() {
        let backend = seeded();
        let state = state();
        let controller = TasksController::new(&backend, state.clone());
        controller.load().await;

        controller.request_delete(10);
        assert_eq!(state.borrow().pending_task().map(|t| t.id), Some(10));
        assert!(controller.confirm_delete().await);

        assert!(state.borrow().tasks.get(10).is_none());
        assert!(backend.tasks().iter().all(|t| t.id != 10));
        assert_eq!(backend.calls().last().map(String::as_str), Some("DELETE tasks/10/"));
    }

    #[tokio::test]
    async fn test_inline_status_change_succeeds() {
        let backend = seeded();
        let state = state();
        let controller = TasksController::new(&backend, state.clone());
        controller.load().await;

        controller.change_status(10, TaskStatus::Done).await;

        let s = state.borrow();
        assert_eq!(s.tasks.get(10).unwrap().status, TaskStatus::Done);
        assert!(!s.is_patching(10));
        assert!(s.error.is_none());
        assert_eq!(backend.calls().last().map(String::as_str), Some("PATCH tasks/10/"));
    }

    #[tokio::test]
    async fn test_inline_status_change_rolls_back() {
        let backend = seeded();
        let state = state();
        let controller = TasksController::new(&backend, state.clone());
        controller.load().await;

        backend.fail_next(ApiError::from_status(500, ""));
        controller.change_status(10, TaskStatus::Done).await;

        let s = state.borrow();
        assert_eq!(s.tasks.get(10).unwrap().status, TaskStatus::Todo);
        assert_eq!(s.error.as_deref(), Some("Could not update the task."));
        assert!(!s.is_patching(10));
    }

    #[tokio::test]
    async fn test_patch_for_unknown_task_is_ignored() {
        let backend = seeded();
        let state = state();
        TasksController::new(&backend, state.clone())
            .change_priority(99, TaskPriority::Low)
            .await;
        assert!(backend.calls().is_empty());
    }
}
