//! Wire models for the task manager REST API.

pub mod auth;
pub mod project;
pub mod task;
pub mod user;

pub use auth::{Credentials, HealthStatus, Registration, TokenResponse};
pub use project::{MembershipChange, MembershipReply, Project, ProjectPayload};
pub use task::{Task, TaskPatch, TaskPayload, TaskPriority, TaskStatus, UnknownVariant};
pub use user::User;
