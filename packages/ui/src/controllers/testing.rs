//! In-memory backend for controller tests.
//!
//! Behaves like the real server for the happy paths (ids, member checks, patch
//! semantics), records every call as `"METHOD path"`, and can be told to fail
//! the next call with a specific error.

use std::cell::RefCell;

use api::{
    endpoints, ApiError, Backend, Credentials, HealthStatus, MembershipReply, Project,
    ProjectPayload, Registration, Task, TaskPatch, TaskPayload, TokenResponse, User,
};

#[derive(Default)]
struct Data {
    next_id: u64,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    users: Vec<User>,
}

#[derive(Default)]
pub struct FakeBackend {
    data: RefCell<Data>,
    calls: RefCell<Vec<String>>,
    fail_next: RefCell<Option<ApiError>>,
}

pub fn user(id: u64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
    }
}

pub fn project(id: u64, name: &str, users: Vec<User>) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: None,
        users,
        created_at: None,
        updated_at: None,
    }
}

pub fn task(id: u64, project: u64, title: &str) -> Task {
    Task {
        id,
        project,
        project_name: None,
        title: title.to_string(),
        description: None,
        assigned_to: None,
        assigned_to_username: None,
        status: Default::default(),
        priority: Default::default(),
        completed: false,
        created_at: None,
        updated_at: None,
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(Data {
                next_id: 100,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn with_projects(self, projects: Vec<Project>) -> Self {
        self.data.borrow_mut().projects = projects;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.data.borrow_mut().tasks = tasks;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.data.borrow_mut().users = users;
        self
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    /// Use this id for the next created item.
    pub fn set_next_id(&self, id: u64) {
        self.data.borrow_mut().next_id = id;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.data.borrow().projects.clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.data.borrow().tasks.clone()
    }

    fn record(&self, method: &str, path: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("{method} {path}"));
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn allocate_id(&self) -> u64 {
        let mut data = self.data.borrow_mut();
        let id = data.next_id;
        data.next_id += 1;
        id
    }

    fn not_found() -> ApiError {
        ApiError::from_status(404, r#"{"detail": "Not found."}"#)
    }

    fn build_task(&self, id: u64, payload: &TaskPayload) -> Result<Task, ApiError> {
        let data = self.data.borrow();
        let Some(project) = data.projects.iter().find(|p| p.id == payload.project) else {
            return Err(ApiError::from_status(
                400,
                &format!(r#"{{"project": ["Invalid pk \"{}\" - object does not exist."]}}"#, payload.project),
            ));
        };
        let assignee = match payload.assigned_to {
            Some(uid) => match project.users.iter().find(|u| u.id == uid) {
                Some(u) => Some(u.clone()),
                None => {
                    return Err(ApiError::from_status(
                        400,
                        r#"{"assigned_to": ["User is not a member of this project."]}"#,
                    ))
                }
            },
            None => None,
        };
        Ok(Task {
            id,
            project: project.id,
            project_name: Some(project.name.clone()),
            title: payload.title.clone(),
            description: Some(payload.description.clone()),
            assigned_to: assignee.as_ref().map(|u| u.id),
            assigned_to_username: assignee.map(|u| u.username),
            status: payload.status,
            priority: payload.priority,
            completed: payload.status == api::TaskStatus::Done,
            created_at: None,
            updated_at: None,
        })
    }
}

impl Backend for FakeBackend {
    async fn authenticate(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.record("POST", endpoints::AUTH)?;
        if credentials.password != "secret" {
            return Err(ApiError::from_status(
                400,
                r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#,
            ));
        }
        Ok(TokenResponse {
            token: Some(format!("token-{}", credentials.username)),
            user_id: Some(1),
            email: None,
        })
    }

    async fn register(&self, registration: &Registration) -> Result<TokenResponse, ApiError> {
        self.record("POST", endpoints::REGISTER)?;
        let id = self.allocate_id();
        self.data
            .borrow_mut()
            .users
            .push(user(id, &registration.username));
        Ok(TokenResponse {
            token: Some(format!("token-{}", registration.username)),
            user_id: Some(id),
            email: Some(registration.email.clone()),
        })
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.record("GET", endpoints::PROJECTS)?;
        Ok(self.projects())
    }

    async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, ApiError> {
        self.record("POST", endpoints::PROJECTS)?;
        let id = self.allocate_id();
        let mut created = project(id, &payload.name, Vec::new());
        created.description = Some(payload.description.clone());
        self.data.borrow_mut().projects.insert(0, created.clone());
        Ok(created)
    }

    async fn update_project(&self, id: u64, payload: &ProjectPayload) -> Result<Project, ApiError> {
        self.record("PUT", &endpoints::project(id))?;
        let mut data = self.data.borrow_mut();
        let existing = data
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(Self::not_found)?;
        existing.name = payload.name.clone();
        existing.description = Some(payload.description.clone());
        Ok(existing.clone())
    }

    async fn delete_project(&self, id: u64) -> Result<(), ApiError> {
        self.record("DELETE", &endpoints::project(id))?;
        let mut data = self.data.borrow_mut();
        let before = data.projects.len();
        data.projects.retain(|p| p.id != id);
        if data.projects.len() == before {
            return Err(Self::not_found());
        }
        data.tasks.retain(|t| t.project != id);
        Ok(())
    }

    async fn add_member(&self, project_id: u64, user_id: u64) -> Result<MembershipReply, ApiError> {
        self.record("POST", &endpoints::add_member(project_id))?;
        let mut data = self.data.borrow_mut();
        let Some(member) = data.users.iter().find(|u| u.id == user_id).cloned() else {
            return Err(ApiError::from_status(404, r#"{"error": "User not found"}"#));
        };
        let project = data
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(Self::not_found)?;
        if project.has_member(user_id) {
            return Err(ApiError::from_status(
                400,
                &format!(r#"{{"status": "User {} already in project"}}"#, member.username),
            ));
        }
        let status = format!("User {} added to project {}", member.username, project.name);
        project.users.push(member);
        Ok(MembershipReply {
            status: Some(status),
        })
    }

    async fn remove_member(
        &self,
        project_id: u64,
        user_id: u64,
    ) -> Result<MembershipReply, ApiError> {
        self.record("POST", &endpoints::remove_member(project_id))?;
        let mut data = self.data.borrow_mut();
        let Some(member) = data.users.iter().find(|u| u.id == user_id).cloned() else {
            return Err(ApiError::from_status(404, r#"{"error": "User not found"}"#));
        };
        let project = data
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(Self::not_found)?;
        if !project.has_member(user_id) {
            return Err(ApiError::from_status(
                400,
                &format!(r#"{{"status": "User {} not in project"}}"#, member.username),
            ));
        }
        project.users.retain(|u| u.id != user_id);
        Ok(MembershipReply {
            status: Some(format!("User {} removed", member.username)),
        })
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.record("GET", endpoints::TASKS)?;
        Ok(self.tasks())
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.record("POST", endpoints::TASKS)?;
        let id = self.allocate_id();
        let created = self.build_task(id, payload)?;
        self.data.borrow_mut().tasks.insert(0, created.clone());
        Ok(created)
    }

    async fn update_task(&self, id: u64, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.record("PUT", &endpoints::task(id))?;
        let updated = self.build_task(id, payload)?;
        let mut data = self.data.borrow_mut();
        let slot = data
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(Self::not_found)?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn patch_task(&self, id: u64, patch: &TaskPatch) -> Result<Task, ApiError> {
        self.record("PATCH", &endpoints::task(id))?;
        let mut data = self.data.borrow_mut();
        let slot = data
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(Self::not_found)?;
        patch.apply_to(slot);
        Ok(slot.clone())
    }

    async fn delete_task(&self, id: u64) -> Result<(), ApiError> {
        self.record("DELETE", &endpoints::task(id))?;
        let mut data = self.data.borrow_mut();
        let before = data.tasks.len();
        data.tasks.retain(|t| t.id != id);
        if data.tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record("GET", endpoints::USERS)?;
        Ok(self.data.borrow().users.clone())
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record("GET", endpoints::HEALTH)?;
        Ok(HealthStatus {
            status: Some("ok".to_string()),
        })
    }
}
