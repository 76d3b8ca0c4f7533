//! Projects screen: list, create/edit form, confirmed delete and membership.

use std::collections::BTreeMap;

use api::{ApiError, Backend, Project};

use super::ResourceList;
use crate::forms::{field, FieldErrors, ProjectForm};
use crate::state::StateHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectsState {
    pub list: ResourceList<Project>,
    pub form: ProjectForm,
    pub field_errors: FieldErrors,
    pub saving: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Project awaiting delete confirmation.
    pub pending_delete: Option<u64>,
    /// Add-member input per project row.
    pub member_inputs: BTreeMap<u64, String>,
}

impl ProjectsState {
    pub fn set_name(&mut self, value: String) {
        self.form.name = value;
        self.field_errors.clear_field(field::NAME);
    }

    pub fn set_description(&mut self, value: String) {
        self.form.description = value;
        self.field_errors.clear_field(field::DESCRIPTION);
    }

    /// Copy a listed project into the form.
    pub fn edit(&mut self, id: u64) {
        if let Some(project) = self.list.get(id) {
            self.form = ProjectForm::from_project(project);
            self.field_errors = FieldErrors::new();
        }
    }

    pub fn reset_form(&mut self) {
        self.form = ProjectForm::default();
        self.field_errors = FieldErrors::new();
    }

    pub fn member_input(&self, project_id: u64) -> &str {
        self.member_inputs
            .get(&project_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set_member_input(&mut self, project_id: u64, value: String) {
        self.member_inputs.insert(project_id, value);
    }

    pub fn pending_project(&self) -> Option<&Project> {
        self.list.get(self.pending_delete?)
    }

    /// Listed projects matching `query`, in list order.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a Project> {
        let query = query.trim().to_lowercase();
        self.list
            .items()
            .iter()
            .filter(|p| matches_query(p, &query))
            .collect()
    }
}

/// Case-insensitive match on name or description. `query` must already be
/// trimmed and lowercased; an empty query matches everything.
fn matches_query(project: &Project, query: &str) -> bool {
    query.is_empty()
        || project.name.to_lowercase().contains(query)
        || project.description_text().to_lowercase().contains(query)
}

fn load_error_message(err: &ApiError) -> String {
    if err.is_auth() {
        "Authentication required. Sign in to load your projects.".to_string()
    } else {
        err.detail_or("Failed to load projects.")
    }
}

fn save_error_message(err: &ApiError) -> String {
    err.first_field_error(&[field::NAME, field::DESCRIPTION])
        .or(err.detail())
        .unwrap_or("Failed to save project.")
        .to_string()
}

pub struct ProjectsController<B, H> {
    backend: B,
    state: H,
}

impl<B: Backend, H: StateHandle<ProjectsState>> ProjectsController<B, H> {
    pub fn new(backend: B, state: H) -> Self {
        Self { backend, state }
    }

    pub async fn load(&self) {
        self.state.update(|s| {
            s.list.begin_load();
            s.error = None;
            s.notice = None;
        });

        let result = self.backend.list_projects().await;

        self.state.update(|s| {
            if let Err(err) = s.list.finish_load(result) {
                tracing::warn!("loading projects failed: {err}");
                s.error = Some(load_error_message(&err));
            }
        });
    }

    /// Create or update from the form. Returns true once the server accepted it.
    pub async fn save(&self) -> bool {
        let form = self.state.update(|s| {
            s.error = None;
            s.notice = None;
            s.field_errors = s.form.validate();
            if !s.field_errors.is_empty() {
                return None;
            }
            s.saving = true;
            Some(s.form.clone())
        });
        let Some(form) = form else {
            return false;
        };

        let payload = form.payload();
        let result = match form.id {
            Some(id) => self.backend.update_project(id, &payload).await,
            None => self.backend.create_project(&payload).await,
        };

        self.state.update(|s| {
            s.saving = false;
            match result {
                Ok(project) => {
                    tracing::info!("saved project {}", project.id);
                    if form.is_editing() {
                        s.list.replace(project);
                        s.notice = Some("Project updated.".to_string());
                    } else {
                        s.list.prepend(project);
                        s.notice = Some("Project created.".to_string());
                    }
                    s.reset_form();
                    true
                }
                Err(err) => {
                    tracing::warn!("saving project failed: {err}");
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

    /// Delete the project awaiting confirmation, if any.
    pub async fn confirm_delete(&self) -> bool {
        let id = self.state.update(|s| {
            s.error = None;
            s.notice = None;
            s.pending_delete.take()
        });
        let Some(id) = id else {
            return false;
        };

        let result = self.backend.delete_project(id).await;

        self.state.update(|s| match result {
            Ok(()) => {
                s.list.remove(id);
                s.member_inputs.remove(&id);
                if s.form.id == Some(id) {
                    s.reset_form();
                }
                s.notice = Some("Project deleted.".to_string());
                true
            }
            Err(err) => {
                tracing::warn!("deleting project {id} failed: {err}");
                s.error = Some(err.detail_or("Failed to delete project."));
                false
            }
        })
    }

    /// Add the user typed into the project's row input.
    pub async fn add_member(&self, project_id: u64) {
        let input = self
            .state
            .inspect(|s| s.member_input(project_id).trim().to_string());
        if input.is_empty() {
            return;
        }
        let Ok(user_id) = input.parse::<u64>() else {
            self.state
                .update(|s| s.error = Some("User id must be a number.".to_string()));
            return;
        };

        self.state.update(|s| s.error = None);
        match self.backend.add_member(project_id, user_id).await {
            Ok(reply) => {
                tracing::info!(
                    "added user {user_id} to project {project_id}: {}",
                    reply.status.unwrap_or_default()
                );
                self.state.update(|s| {
                    s.member_inputs.remove(&project_id);
                });
                self.load().await;
            }
            Err(err) => {
                tracing::warn!("adding member failed: {err}");
                self.state.update(|s| {
                    s.error = Some(err.action_message().unwrap_or("Failed to add member.").to_string())
                });
            }
        }
    }

    pub async fn remove_member(&self, project_id: u64, user_id: u64) {
        self.state.update(|s| s.error = None);
        match self.backend.remove_member(project_id, user_id).await {
            Ok(_) => {
                tracing::info!("removed user {user_id} from project {project_id}");
                self.load().await;
            }
            Err(err) => {
                tracing::warn!("removing member failed: {err}");
                self.state.update(|s| {
                    s.error = Some(
                        err.action_message()
                            .unwrap_or("Failed to remove member.")
                            .to_string(),
                    )
                });
            }
        }
    }
}
