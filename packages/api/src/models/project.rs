use serde::{Deserialize, Serialize};

use super::User;

/// A project and its member set, as returned by `projects/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Members; the serializer may omit the field for brand-new projects.
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn has_member(&self, user_id: u64) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }
}

/// Body of `POST projects/` and `PUT projects/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
}

/// Body of `projects/{id}/add_user/` and `projects/{id}/remove_user/`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipChange {
    pub user_id: u64,
}

/// Reply to a membership change, e.g. `{"status": "User ana added to project Site"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipReply {
    #[serde(default)]
    pub status: Option<String>,
}
