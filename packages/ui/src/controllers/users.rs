//! Users screen. The backend only lists users for administrators.

use api::{ApiError, Backend, User};

use super::ResourceList;
use crate::state::StateHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersState {
    pub list: ResourceList<User>,
    pub error: Option<String>,
}

fn load_error_message(err: &ApiError) -> String {
    if err.is_auth() {
        "Access restricted to administrators. Sign in as an admin.".to_string()
    } else {
        err.detail_or("Could not load users.")
    }
}

pub async fn load_users<B: Backend, H: StateHandle<UsersState>>(backend: &B, state: &H) {
    state.update(|s| {
        s.list.begin_load();
        s.error = None;
    });

    let result = backend.list_users().await;

    state.update(|s| {
        if let Err(err) = s.list.finish_load(result) {
            tracing::warn!("loading users failed: {err}");
            s.error = Some(load_error_message(&err));
        }
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::controllers::testing::{user, FakeBackend};

    #[tokio::test]
    async fn test_lists_users() {
        let backend = FakeBackend::new().with_users(vec![user(1, "admin"), user(2, "ana")]);
        let state = Rc::new(RefCell::new(UsersState::default()));

        load_users(&backend, &state).await;

        let s = state.borrow();
        assert_eq!(s.list.len(), 2);
        assert_eq!(s.list.get(2).unwrap().contact(), "ana@example.com");
    }

    #[tokio::test]
    async fn test_forbidden_mentions_administrators() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::from_status(
            403,
            r#"{"detail": "You do not have permission to perform this action."}"#,
        ));
        let state = Rc::new(RefCell::new(UsersState::default()));

        load_users(&backend, &state).await;

        assert_eq!(
            state.borrow().error.as_deref(),
            Some("Access restricted to administrators. Sign in as an admin.")
        );
    }

    #[tokio::test]
    async fn test_other_failures_use_detail() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::from_status(503, r#"{"detail": "Maintenance"}"#));
        let state = Rc::new(RefCell::new(UsersState::default()));

        load_users(&backend, &state).await;
        assert_eq!(state.borrow().error.as_deref(), Some("Maintenance"));

        backend.fail_next(ApiError::Network("refused".into()));
        load_users(&backend, &state).await;
        assert_eq!(state.borrow().error.as_deref(), Some("Could not load users."));
    }
}
