//! Session context for the UI.
//!
//! [`SessionProvider`] restores the persisted token once and shares a
//! [`SessionState`] signal. Views read the backend from it per request, so a
//! sign-in or sign-out takes effect on the next call without any global.

use api::{endpoints, HttpBackend};
use dioxus::prelude::*;
use store::{ClientConfig, Session};

use crate::controllers::health::ProbeState;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokenStore = store::MemoryTokenStore;

/// Origin assumed for relative API URLs outside the browser.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ORIGIN: &str = "http://localhost:8000";

pub struct SessionState {
    session: Session<PlatformTokenStore>,
    config: ClientConfig,
    origin: Option<String>,
    backend: HttpBackend,
}

impl SessionState {
    pub fn new(config: ClientConfig, store: PlatformTokenStore, origin: Option<String>) -> Self {
        let session = Session::restore(store);
        let backend = HttpBackend::from_config(&config, origin.as_deref(), session.token());
        Self {
            session,
            config,
            origin,
            backend,
        }
    }

    /// Session for this platform: browser storage and page origin on the web.
    pub fn restore(config: ClientConfig) -> Self {
        let store = platform_store(&config);
        Self::new(config, store, page_origin())
    }

    /// Backend carrying the current credential.
    pub fn backend(&self) -> HttpBackend {
        self.backend.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn health_url(&self) -> String {
        self.backend.url(endpoints::HEALTH)
    }

    pub fn sign_in(&mut self, token: &str) {
        self.session.sign_in(token);
        self.rebuild_backend();
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.rebuild_backend();
        tracing::info!("signed out");
    }

    fn rebuild_backend(&mut self) {
        self.backend =
            HttpBackend::from_config(&self.config, self.origin.as_deref(), self.session.token());
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_store(config: &ClientConfig) -> PlatformTokenStore {
    store::LocalTokenStore::new(config.session.storage_key.clone())
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn platform_store(_config: &ClientConfig) -> PlatformTokenStore {
    store::MemoryTokenStore::new()
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    Some(NATIVE_ORIGIN.to_string())
}

/// Shared session signal.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Latest health probe result, shared by the navbar icon and the status view.
pub fn use_probe() -> Signal<ProbeState> {
    use_context::<Signal<ProbeState>>()
}

/// Provides the session and probe contexts to its children.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState::restore(ClientConfig::load()));
    let probe = use_signal(ProbeState::default);

    use_context_provider(|| session);
    use_context_provider(|| probe);

    rsx! {
        {children}
    }
}
