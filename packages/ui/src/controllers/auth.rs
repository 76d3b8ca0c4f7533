//! Login and signup submissions. Both hand back the issued token; the caller
//! stores it in the session.

use api::{Backend, TokenResponse};

use crate::forms::{FieldErrors, LoginForm, SignupForm};
use crate::state::StateHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthFormState<F> {
    pub form: F,
    pub field_errors: FieldErrors,
    pub submitting: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

pub type LoginState = AuthFormState<LoginForm>;
pub type SignupState = AuthFormState<SignupForm>;

const INVALID_RESPONSE: &str = "Invalid server response.";

fn issued_token(reply: TokenResponse) -> Option<String> {
    reply.token.filter(|t| !t.trim().is_empty())
}

/// Returns the token once the backend accepted the credentials.
pub async fn login<B: Backend, H: StateHandle<LoginState>>(backend: &B, state: &H) -> Option<String> {
    let credentials = state.update(|s| {
        s.error = None;
        s.notice = None;
        s.field_errors = s.form.validate();
        if !s.field_errors.is_empty() {
            return None;
        }
        s.submitting = true;
        Some(s.form.credentials())
    })?;

    let result = backend.authenticate(&credentials).await;

    state.update(|s| {
        s.submitting = false;
        match result.map(issued_token) {
            Ok(Some(token)) => {
                tracing::info!("signed in as {}", credentials.username);
                s.form = LoginForm::default();
                s.notice = Some("Signed in. Token saved in this browser.".to_string());
                Some(token)
            }
            Ok(None) => {
                tracing::warn!("authentication reply carried no token");
                s.error = Some(INVALID_RESPONSE.to_string());
                None
            }
            Err(err) => {
                tracing::warn!("sign in failed: {err}");
                s.error = Some(if err.status() == Some(400) {
                    "Invalid username or password.".to_string()
                } else {
                    err.detail_or("Authentication failed.")
                });
                None
            }
        }
    })
}

/// Returns the token of the freshly created account.
pub async fn signup<B: Backend, H: StateHandle<SignupState>>(backend: &B, state: &H) -> Option<String> {
    let registration = state.update(|s| {
        s.error = None;
        s.notice = None;
        s.field_errors = s.form.validate();
        if !s.field_errors.is_empty() {
            return None;
        }
        s.submitting = true;
        Some(s.form.registration())
    })?;

    let result = backend.register(&registration).await;

    state.update(|s| {
        s.submitting = false;
        match result.map(issued_token) {
            Ok(Some(token)) => {
                tracing::info!("registered {}", registration.username);
                s.form = SignupForm::default();
                s.notice = Some("Account created. You are signed in.".to_string());
                Some(token)
            }
            Ok(None) => {
                tracing::warn!("registration reply carried no token");
                s.error = Some(INVALID_RESPONSE.to_string());
                None
            }
            Err(err) => {
                tracing::warn!("registration failed: {err}");
                s.error = Some(err.detail_or("Could not create the account."));
                None
            }
        }
    })
}
