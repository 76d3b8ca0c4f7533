//! Landing counts for projects and tasks.

use api::Backend;
use futures::join;

use crate::state::StateHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewState {
    pub loading: bool,
    pub projects: usize,
    pub tasks: usize,
    pub error: Option<String>,
}

pub async fn load_overview<B: Backend, H: StateHandle<OverviewState>>(backend: &B, state: &H) {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });

    let (projects, tasks) = join!(backend.list_projects(), backend.list_tasks());

    state.update(|s| {
        s.loading = false;
        match (projects, tasks) {
            (Ok(projects), Ok(tasks)) => {
                s.projects = projects.len();
                s.tasks = tasks.len();
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!("loading overview failed: {err}");
                s.error = Some(if err.status() == Some(401) {
                    "Sign in to view your projects and tasks.".to_string()
                } else {
                    err.detail_or("Could not load the overview.")
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::controllers::testing::{project, task, FakeBackend};
    use api::ApiError;

    #[tokio::test]
    async fn test_counts_both_collections() {
        let backend = FakeBackend::new()
            .with_projects(vec![project(1, "Alpha", vec![])])
            .with_tasks(vec![task(1, 1, "a"), task(2, 1, "b"), task(3, 1, "c")]);
        let state = Rc::new(RefCell::new(OverviewState::default()));

        load_overview(&backend, &state).await;

        assert_eq!(
            *state.borrow(),
            OverviewState {
                loading: false,
                projects: 1,
                tasks: 3,
                error: None,
            }
        );
    }

    #[tokio::test]
    async fn test_unauthorized_asks_to_sign_in() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::from_status(401, ""));
        let state = Rc::new(RefCell::new(OverviewState::default()));

        load_overview(&backend, &state).await;

        let s = state.borrow();
        assert!(!s.loading);
        assert_eq!(s.error.as_deref(), Some("Sign in to view your projects and tasks."));
    }

    #[tokio::test]
    async fn test_other_failure_falls_back() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::from_status(500, "<html>oops</html>"));
        let state = Rc::new(RefCell::new(OverviewState::default()));

        load_overview(&backend, &state).await;
        assert_eq!(
            state.borrow().error.as_deref(),
            Some("Could not load the overview.")
        );
    }
}
