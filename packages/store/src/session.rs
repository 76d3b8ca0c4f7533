//! # Session holder
//!
//! [`Session`] tracks the single opaque credential the backend issued on login or
//! registration. It is backed by a [`TokenStore`] so the credential survives page
//! reloads; absence of a token means the user is unauthenticated.
//!
//! The session has no refresh logic. An expired token is only discovered when the
//! next request comes back with HTTP 401.

/// Persistence for the session token.
///
/// Implementations swallow storage failures: a broken store behaves like an
/// empty one. Implementations live in the `memory` and `local` modules.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Current credential plus the store it is persisted in.
#[derive(Clone, Debug)]
pub struct Session<T: TokenStore> {
    store: T,
    token: Option<String>,
}

impl<T: TokenStore> Session<T> {
    /// Build a session from whatever token the store already holds.
    pub fn restore(store: T) -> Self {
        let token = store.load().filter(|t| !t.trim().is_empty());
        if token.is_some() {
            tracing::debug!("restored persisted session token");
        }
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist and adopt a freshly issued token. Blank tokens are ignored.
    pub fn sign_in(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token.trim().is_empty() {
            tracing::warn!("ignoring blank session token");
            return;
        }
        self.store.save(&token);
        self.token = Some(token);
    }

    /// Forget the token, both in memory and in the store.
    pub fn sign_out(&mut self) {
        self.store.clear();
        self.token = None;
    }
}
