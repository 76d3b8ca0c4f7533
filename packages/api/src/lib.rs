//! # API crate — typed access to the task manager REST backend
//!
//! This crate is everything the UI knows about the backend: the wire models, the
//! error taxonomy, and the [`Backend`] trait with its HTTP implementation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `Project`, `Task`, `User`, request payloads, token and health replies |
//! | [`error`] | [`ApiError`] classification (401 / 403 / rejection / connectivity / decode) and [`ErrorBody`] parsing |
//! | [`client`] | the [`Backend`] trait, [`HttpBackend`] and the endpoint paths |
//!
//! ## Endpoints
//!
//! - **Authentication**: `POST auth/`, `POST register/`
//! - **Projects**: `GET/POST projects/`, `PUT/DELETE projects/{id}/`,
//!   `POST projects/{id}/add_user/`, `POST projects/{id}/remove_user/`
//! - **Tasks**: `GET/POST tasks/`, `PUT/PATCH/DELETE tasks/{id}/`
//! - **Users**: `GET users/` (administrators only)
//! - **Health**: `GET health/`

pub mod client;
pub mod error;
pub mod models;

pub use client::{endpoints, Backend, HttpBackend};
pub use error::{ApiError, ErrorBody, ErrorKind};
pub use models::{
    Credentials, HealthStatus, MembershipReply, Project, ProjectPayload, Registration, Task,
    TaskPatch, TaskPayload, TaskPriority, TaskStatus, TokenResponse, User,
};
