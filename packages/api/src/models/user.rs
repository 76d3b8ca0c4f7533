use serde::{Deserialize, Serialize};

/// A user as the backend exposes it in listings and project member sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Email for tooltips, falling back to the username when the backend left it blank.
    pub fn contact(&self) -> &str {
        if self.email.is_empty() {
            &self.username
        } else {
            &self.email
        }
    }
}
