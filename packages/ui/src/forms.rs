//! Form values and client-side validation.
//!
//! The rules mirror the backend's constraints so obviously bad input never leaves
//! the browser; the backend stays the authority and its own field errors are
//! shown verbatim when it rejects a submission.

use api::{Credentials, Project, ProjectPayload, Registration, Task, TaskPayload, TaskPriority, TaskStatus};

pub const MIN_CREDENTIAL_LEN: usize = 3;
pub const MIN_PROJECT_NAME_LEN: usize = 3;
pub const MAX_PROJECT_NAME_LEN: usize = 255;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_TASK_TITLE_LEN: usize = 255;

/// Field keys used in [`FieldErrors`]. They match the backend's field names.
pub mod field {
    pub const CREDENTIALS: &str = "credentials";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM: &str = "confirm";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const PROJECT: &str = "project";
    pub const TITLE: &str = "title";
    pub const ASSIGNED_TO: &str = "assigned_to";
    pub const STATUS: &str = "status";
    pub const PRIORITY: &str = "priority";
}

/// Per-field error messages, in the order the rules were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.clear_field(field);
        self.0.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|(f, _)| *f != field);
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// --- Login -------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if char_len(self.username.trim()) < MIN_CREDENTIAL_LEN
            || char_len(&self.password) < MIN_CREDENTIAL_LEN
        {
            errors.insert(
                field::CREDENTIALS,
                "Username and password must be at least 3 characters.",
            );
        }
        errors
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

// --- Signup ------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if char_len(self.username.trim()) < MIN_CREDENTIAL_LEN {
            errors.insert(field::USERNAME, "Username must be at least 3 characters.");
        }
        if char_len(&self.password) < MIN_CREDENTIAL_LEN {
            errors.insert(field::PASSWORD, "Password must be at least 3 characters.");
        }
        if self.confirm != self.password {
            errors.insert(field::CONFIRM, "Passwords do not match.");
        }
        errors
    }

    pub fn registration(&self) -> Registration {
        Registration {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

// --- Project -----------------------------------------------------------------

/// Create/edit form for a project. `id` is set while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            name: project.name.clone(),
            description: project.description_text().to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let name_len = char_len(self.name.trim());
        if name_len == 0 {
            errors.insert(field::NAME, "Enter the project name.");
        } else if name_len < MIN_PROJECT_NAME_LEN {
            errors.insert(field::NAME, "Project name must be at least 3 characters.");
        } else if name_len > MAX_PROJECT_NAME_LEN {
            errors.insert(field::NAME, "Project name must be at most 255 characters.");
        }
        if char_len(self.description.trim()) > MAX_DESCRIPTION_LEN {
            errors.insert(
                field::DESCRIPTION,
                "Description must be at most 2000 characters.",
            );
        }
        errors
    }

    pub fn payload(&self) -> ProjectPayload {
        ProjectPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

// --- Task --------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub id: Option<u64>,
    pub project: Option<u64>,
    pub title: String,
    pub description: String,
    pub assigned_to: Option<u64>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            project: Some(task.project),
            title: task.title.clone(),
            description: task.description_text().to_string(),
            assigned_to: task.assigned_to,
            status: task.status,
            priority: task.priority,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.project.is_none() {
            errors.insert(field::PROJECT, "Select a project.");
        }
        let title_len = char_len(self.title.trim());
        if title_len == 0 {
            errors.insert(field::TITLE, "Enter a title.");
        } else if title_len > MAX_TASK_TITLE_LEN {
            errors.insert(field::TITLE, "Title must be at most 255 characters.");
        }
        errors
    }

    /// Request body, or `None` when no project is selected.
    pub fn payload(&self) -> Option<TaskPayload> {
        Some(TaskPayload {
            project: self.project?,
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            assigned_to: self.assigned_to,
            status: self.status,
            priority: self.priority,
        })
    }
}

/// Parse an optional id from a `<select>` value; `""` means none.
pub fn parse_optional_id(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_three_characters() {
        let form = LoginForm {
            username: " ab ".into(),
            password: "secret".into(),
        };
        assert!(form.validate().has(field::CREDENTIALS));

        let form = LoginForm {
            username: "ana".into(),
            password: "pw".into(),
        };
        assert!(form.validate().has(field::CREDENTIALS));

        let form = LoginForm {
            username: " ana ".into(),
            password: "pwd".into(),
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.credentials().username, "ana");
    }

    #[test]
    fn test_signup_reports_every_failing_field() {
        let form = SignupForm {
            username: "x".into(),
            email: "x@example.com".into(),
            password: "ab".into(),
            confirm: "abc".into(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(field::CONFIRM), Some("Passwords do not match."));
        assert_eq!(
            errors.first(),
            Some("Username must be at least 3 characters.")
        );
    }

    #[test]
    fn test_project_name_bounds() {
        let mut form = ProjectForm {
            name: "ab".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().get(field::NAME),
            Some("Project name must be at least 3 characters.")
        );

        form.name = "   ".into();
        assert_eq!(form.validate().get(field::NAME), Some("Enter the project name."));

        form.name = "a".repeat(256);
        assert!(form.validate().has(field::NAME));

        // 255 multi-byte characters are still within bounds
        form.name = "é".repeat(255);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_project_description_limit() {
        let form = ProjectForm {
            name: "Website Revamp".into(),
            description: "d".repeat(2001),
            ..Default::default()
        };
        assert!(form.validate().has(field::DESCRIPTION));
        assert!(!form.validate().has(field::NAME));
    }

    #[test]
    fn test_project_payload_is_trimmed() {
        let form = ProjectForm {
            id: None,
            name: "  Website Revamp ".into(),
            description: " new site ".into(),
        };
        assert_eq!(
            form.payload(),
            ProjectPayload {
                name: "Website Revamp".into(),
                description: "new site".into(),
            }
        );
    }

    #[test]
    fn test_task_requires_project_and_title() {
        let form = TaskForm::default();
        let errors = form.validate();
        assert!(errors.has(field::PROJECT));
        assert!(errors.has(field::TITLE));
        assert!(form.payload().is_none());

        let form = TaskForm {
            project: Some(4),
            title: "Ship it".into(),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
        let payload = form.payload().unwrap();
        assert_eq!(payload.project, 4);
        assert_eq!(payload.status, TaskStatus::Todo);
        assert_eq!(payload.priority, TaskPriority::Medium);
    }

    #[test]
    fn test_field_errors_clear_and_replace() {
        let mut errors = FieldErrors::new();
        errors.insert(field::NAME, "first");
        errors.insert(field::NAME, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(field::NAME), Some("second"));
        errors.clear_field(field::NAME);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id(""), None);
        assert_eq!(parse_optional_id("12"), Some(12));
        assert_eq!(parse_optional_id("abc"), None);
    }
}
