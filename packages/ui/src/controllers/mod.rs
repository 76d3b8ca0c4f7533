//! View-independent logic behind each screen.
//!
//! A controller pairs a [`Backend`](api::Backend) with a
//! [`StateHandle`](crate::StateHandle) over its screen state. Components build one
//! per event and `spawn` the returned future; tests drive the same code against
//! an in-memory backend.

mod resource;
pub use resource::{Identified, LoadPhase, ResourceList};

pub mod auth;
pub mod health;
pub mod overview;
pub mod projects;
pub mod tasks;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;
