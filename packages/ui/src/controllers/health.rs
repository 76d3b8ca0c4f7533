//! One-shot reachability probe against `health/`.

use api::{endpoints, Backend, ErrorKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProbeState {
    #[default]
    Checking,
    /// Server status text, `"unknown"` when it sent none.
    Reachable(String),
    Unreachable(String),
}

impl ProbeState {
    pub fn is_checking(&self) -> bool {
        matches!(self, ProbeState::Checking)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeState::Reachable(_))
    }

    pub fn message(&self) -> String {
        match self {
            ProbeState::Checking => "Checking connection...".to_string(),
            ProbeState::Reachable(status) => format!("Connected. Status: {status}"),
            ProbeState::Unreachable(message) => message.clone(),
        }
    }
}

pub async fn probe<B: Backend>(backend: &B) -> ProbeState {
    match backend.health().await {
        Ok(health) => {
            let status = health
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "unknown".to_string());
            tracing::debug!("health probe: {status}");
            ProbeState::Reachable(status)
        }
        Err(err) => {
            tracing::warn!("health probe failed: {err}");
            let message = match (err.status(), err.kind()) {
                (Some(code), _) => format!("Error {code} connecting to {}", endpoints::HEALTH),
                (None, ErrorKind::Decode) => {
                    format!("Unexpected response from {}", endpoints::HEALTH)
                }
                (None, _) => {
                    "Could not reach the API (the backend may not be running).".to_string()
                }
            };
            ProbeState::Unreachable(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::testing::FakeBackend;
    use api::ApiError;

    #[tokio::test]
    async fn test_reachable_reports_status() {
        let state = probe(&FakeBackend::new()).await;
        assert!(state.is_reachable());
        assert_eq!(state.message(), "Connected. Status: ok");
    }

    #[tokio::test]
    async fn test_no_response_mentions_backend() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::Network("connection refused".into()));

        let state = probe(&backend).await;
        assert!(!state.is_reachable());
        assert!(state.message().contains("backend may not be running"));
    }

    #[tokio::test]
    async fn test_error_status_names_code_and_endpoint() {
        let backend = FakeBackend::new();
        backend.fail_next(ApiError::from_status(502, "Bad Gateway"));

        assert_eq!(
            probe(&backend).await,
            ProbeState::Unreachable("Error 502 connecting to health/".into())
        );
    }

    #[test]
    fn test_checking_is_default() {
        assert!(ProbeState::default().is_checking());
        assert_eq!(ProbeState::default().message(), "Checking connection...");
    }
}
