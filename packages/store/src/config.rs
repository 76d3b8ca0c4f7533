//! # Client configuration: `safira.toml`
//!
//! Defines where the REST backend lives and how the session credential is stored
//! and presented. `packages/store/safira.toml` is compiled into the binary and
//! read by [`ClientConfig::load`]. Every section has production defaults, so a
//! missing key or an empty file is equivalent to [`ClientConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "/api/"        # relative URLs resolve against the page origin
//!
//! [session]
//! storage_key = "authToken" # localStorage key holding the token
//! auth_scheme = "Token"     # Authorization header prefix
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config, parsed from TOML. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`SessionConfig`] | Token storage key and authorization scheme. |

use serde::{Deserialize, Serialize};

/// Config file bundled at build time.
const BUNDLED_TOML: &str = include_str!("../safira.toml");

/// Compile-time override for the API base URL.
const BASE_URL_ENV: Option<&str> = option_env!("SAFIRA_API_BASE_URL");

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// REST backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined to. Always ends with `/` once
    /// normalised by [`ClientConfig::api_base`].
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session credential handling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
}

fn default_base_url() -> String {
    "/api/".to_string()
}

fn default_storage_key() -> String {
    "authToken".to_string()
}

fn default_auth_scheme() -> String {
    "Token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            auth_scheme: default_auth_scheme(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Bundled `safira.toml` with the `SAFIRA_API_BASE_URL` build-time override applied.
    pub fn load() -> Self {
        Self::resolve(BUNDLED_TOML, BASE_URL_ENV)
    }

    /// Parse `text`, falling back to defaults when it is malformed, then let a
    /// non-blank `base_url` override win.
    fn resolve(text: &str, base_url: Option<&str>) -> Self {
        let mut config = Self::from_toml(text).unwrap_or_else(|err| {
            tracing::warn!("invalid client config, using defaults: {err}");
            Self::default()
        });
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api.base_url = url.to_string();
        }
        config
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Whether the base URL needs an origin before it can be requested.
    pub fn is_relative(&self) -> bool {
        !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"))
    }

    /// Base URL with a guaranteed trailing slash, prefixed by `origin` when relative.
    pub fn api_base(&self, origin: Option<&str>) -> String {
        let mut base = self.api.base_url.trim().to_string();
        if self.is_relative() {
            if let Some(origin) = origin {
                let origin = origin.trim_end_matches('/');
                let path = base.trim_start_matches('/');
                base = format!("{origin}/{path}");
            }
        }
        if !base.ends_with('/') {
            base.push('/');
        }
        base
    }
}
