//! # Backend access
//!
//! [`Backend`] is the async seam between the UI controllers and the REST API. The
//! production implementation, [`HttpBackend`], speaks JSON over `reqwest` (which
//! uses `fetch` on wasm); tests plug in an in-memory fake.
//!
//! Every request carries `Content-Type: application/json` and, once a session
//! token is known, `Authorization: <scheme> <token>`. There is no retry and no
//! timeout beyond the transport defaults.

use std::future::Future;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::ClientConfig;

use crate::error::ApiError;
use crate::models::*;

/// Endpoint paths, relative to the API base.
pub mod endpoints {
    pub const AUTH: &str = "auth/";
    pub const REGISTER: &str = "register/";
    pub const PROJECTS: &str = "projects/";
    pub const TASKS: &str = "tasks/";
    pub const USERS: &str = "users/";
    pub const HEALTH: &str = "health/";

    pub fn project(id: u64) -> String {
        format!("{PROJECTS}{id}/")
    }

    pub fn add_member(project_id: u64) -> String {
        format!("{PROJECTS}{project_id}/add_user/")
    }

    pub fn remove_member(project_id: u64) -> String {
        format!("{PROJECTS}{project_id}/remove_user/")
    }

    pub fn task(id: u64) -> String {
        format!("{TASKS}{id}/")
    }
}

/// Async interface to the task manager backend.
pub trait Backend {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>>;
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>>;

    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>>;
    fn create_project(
        &self,
        payload: &ProjectPayload,
    ) -> impl Future<Output = Result<Project, ApiError>>;
    fn update_project(
        &self,
        id: u64,
        payload: &ProjectPayload,
    ) -> impl Future<Output = Result<Project, ApiError>>;
    fn delete_project(&self, id: u64) -> impl Future<Output = Result<(), ApiError>>;
    fn add_member(
        &self,
        project_id: u64,
        user_id: u64,
    ) -> impl Future<Output = Result<MembershipReply, ApiError>>;
    fn remove_member(
        &self,
        project_id: u64,
        user_id: u64,
    ) -> impl Future<Output = Result<MembershipReply, ApiError>>;

    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>, ApiError>>;
    fn create_task(&self, payload: &TaskPayload) -> impl Future<Output = Result<Task, ApiError>>;
    fn update_task(
        &self,
        id: u64,
        payload: &TaskPayload,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn patch_task(&self, id: u64, patch: &TaskPatch)
        -> impl Future<Output = Result<Task, ApiError>>;
    fn delete_task(&self, id: u64) -> impl Future<Output = Result<(), ApiError>>;

    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;

    fn health(&self) -> impl Future<Output = Result<HealthStatus, ApiError>>;
}

impl<T: Backend + ?Sized> Backend for &T {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>> {
        (**self).authenticate(credentials)
    }

    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<TokenResponse, ApiError>> {
        (**self).register(registration)
    }

    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> {
        (**self).list_projects()
    }

    fn create_project(
        &self,
        payload: &ProjectPayload,
    ) -> impl Future<Output = Result<Project, ApiError>> {
        (**self).create_project(payload)
    }

    fn update_project(
        &self,
        id: u64,
        payload: &ProjectPayload,
    ) -> impl Future<Output = Result<Project, ApiError>> {
        (**self).update_project(id, payload)
    }

    fn delete_project(&self, id: u64) -> impl Future<Output = Result<(), ApiError>> {
        (**self).delete_project(id)
    }

    fn add_member(
        &self,
        project_id: u64,
        user_id: u64,
    ) -> impl Future<Output = Result<MembershipReply, ApiError>> {
        (**self).add_member(project_id, user_id)
    }

    fn remove_member(
        &self,
        project_id: u64,
        user_id: u64,
    ) -> impl Future<Output = Result<MembershipReply, ApiError>> {
        (**self).remove_member(project_id, user_id)
    }

    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>, ApiError>> {
        (**self).list_tasks()
    }

    fn create_task(&self, payload: &TaskPayload) -> impl Future<Output = Result<Task, ApiError>> {
        (**self).create_task(payload)
    }

    fn update_task(
        &self,
        id: u64,
        payload: &TaskPayload,
    ) -> impl Future<Output = Result<Task, ApiError>> {
        (**self).update_task(id, payload)
    }

    fn patch_task(
        &self,
        id: u64,
        patch: &TaskPatch,
    ) -> impl Future<Output = Result<Task, ApiError>> {
        (**self).patch_task(id, patch)
    }

    fn delete_task(&self, id: u64) -> impl Future<Output = Result<(), ApiError>> {
        (**self).delete_task(id)
    }

    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> {
        (**self).list_users()
    }

    fn health(&self) -> impl Future<Output = Result<HealthStatus, ApiError>> {
        (**self).health()
    }
}

/// JSON-over-HTTP [`Backend`].
///
/// Cheap to clone: `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
    authorization: Option<String>,
}

impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.authorization == other.authorization
    }
}

impl HttpBackend {
    /// Backend rooted at `base`, which must be absolute on wasm.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self {
            client: reqwest::Client::new(),
            base,
            authorization: None,
        }
    }

    /// Backend for `config`, resolving a relative base URL against `origin` and
    /// attaching `token` with the configured scheme.
    pub fn from_config(config: &ClientConfig, origin: Option<&str>, token: Option<&str>) -> Self {
        let backend = Self::new(config.api_base(origin));
        match token {
            Some(token) => backend.with_token(&config.session.auth_scheme, token),
            None => backend,
        }
    }

    pub fn with_token(mut self, scheme: &str, token: &str) -> Self {
        self.authorization = Some(format!("{scheme} {token}"));
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Value of the `Authorization` header, if any.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        match &self.authorization {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("api request failed without response: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &text);
        tracing::warn!(status = status.as_u16(), "api request rejected: {err}");
        Err(err)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        Ok(response.json::<T>().await?)
    }

    /// GET a collection; a `null` body counts as empty.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let items: Option<Vec<T>> = self.fetch(self.request(Method::GET, path)).await?;
        Ok(items.unwrap_or_default())
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.fetch(self.request(method, path).json(body)).await
    }

    async fn send_delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

impl Backend for HttpBackend {
    async fn authenticate(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.send_json(Method::POST, endpoints::AUTH, credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<TokenResponse, ApiError> {
        self.send_json(Method::POST, endpoints::REGISTER, registration).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.fetch_list(endpoints::PROJECTS).await
    }

    async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, ApiError> {
        self.send_json(Method::POST, endpoints::PROJECTS, payload).await
    }

    async fn update_project(&self, id: u64, payload: &ProjectPayload) -> Result<Project, ApiError> {
        self.send_json(Method::PUT, &endpoints::project(id), payload).await
    }

    async fn delete_project(&self, id: u64) -> Result<(), ApiError> {
        self.send_delete(&endpoints::project(id)).await
    }

    async fn add_member(&self, project_id: u64, user_id: u64) -> Result<MembershipReply, ApiError> {
        let body = MembershipChange { user_id };
        self.send_json(Method::POST, &endpoints::add_member(project_id), &body)
            .await
    }

    async fn remove_member(
        &self,
        project_id: u64,
        user_id: u64,
    ) -> Result<MembershipReply, ApiError> {
        let body = MembershipChange { user_id };
        self.send_json(Method::POST, &endpoints::remove_member(project_id), &body)
            .await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.fetch_list(endpoints::TASKS).await
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.send_json(Method::POST, endpoints::TASKS, payload).await
    }

    async fn update_task(&self, id: u64, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.send_json(Method::PUT, &endpoints::task(id), payload).await
    }

    async fn patch_task(&self, id: u64, patch: &TaskPatch) -> Result<Task, ApiError> {
        self.send_json(Method::PATCH, &endpoints::task(id), patch).await
    }

    async fn delete_task(&self, id: u64) -> Result<(), ApiError> {
        self.send_delete(&endpoints::task(id)).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_list(endpoints::USERS).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.fetch(self.request(Method::GET, endpoints::HEALTH)).await
    }
}
