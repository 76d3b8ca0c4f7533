//! # Error taxonomy for backend calls
//!
//! Every [`Backend`](crate::Backend) method fails with an [`ApiError`]. The variant
//! tells the UI how to phrase the failure:
//!
//! | Variant | Cause | Typical rendering |
//! |---------|-------|-------------------|
//! | [`ApiError::Unauthorized`] | HTTP 401 | ask the user to sign in again |
//! | [`ApiError::Forbidden`] | HTTP 403 | "restricted to administrators" |
//! | [`ApiError::Rejected`] | any other non-2xx | server text verbatim (field error or `detail`) |
//! | [`ApiError::Network`] | no response at all | "is the backend running?" |
//! | [`ApiError::Decode`] | 2xx with an unexpected body | generic message |
//!
//! Rejection bodies are parsed into an [`ErrorBody`], which understands the usual
//! REST framework shapes: `{"detail": "..."}`, `{"error": "..."}`,
//! `{"status": "..."}` and per-field arrays such as `{"name": ["too short"]}`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Parsed body of an error response. Unknown or non-JSON bodies yield an empty value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Everything else, keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ErrorBody {
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// First message attached to `field`, whether sent as a list or a bare string.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self.fields.get(field)? {
            Value::Array(items) => items.iter().find_map(Value::as_str),
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Authorization,
    Rejected,
    Connectivity,
    Decode,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("authentication required (HTTP 401)")]
    Unauthorized(ErrorBody),
    #[error("permission denied (HTTP 403)")]
    Forbidden(ErrorBody),
    #[error("request rejected with HTTP {status}")]
    Rejected { status: u16, body: ErrorBody },
    #[error("backend unreachable: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, text: &str) -> Self {
        let body = ErrorBody::parse(text);
        match status {
            401 => ApiError::Unauthorized(body),
            403 => ApiError::Forbidden(body),
            _ => ApiError::Rejected { status, body },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthorized(_) => ErrorKind::Authentication,
            ApiError::Forbidden(_) => ErrorKind::Authorization,
            ApiError::Rejected { .. } => ErrorKind::Rejected,
            ApiError::Network(_) => ErrorKind::Connectivity,
            ApiError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Unauthorized(body) | ApiError::Forbidden(body) => Some(body),
            ApiError::Rejected { body, .. } => Some(body),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// 401 or 403.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::Forbidden(_))
    }

    pub fn detail(&self) -> Option<&str> {
        self.body()?.detail.as_deref()
    }

    /// First message found among `fields`, in the given order.
    pub fn first_field_error(&self, fields: &[&str]) -> Option<&str> {
        let body = self.body()?;
        fields.iter().find_map(|f| body.field_error(f))
    }

    /// Membership endpoints answer with `error` (unknown user) or `status`
    /// (already / not a member).
    pub fn action_message(&self) -> Option<&str> {
        let body = self.body()?;
        body.error.as_deref().or(body.status.as_deref())
    }

    /// Server `detail` or `fallback`.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
