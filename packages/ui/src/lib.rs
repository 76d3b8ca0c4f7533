//! This crate contains all shared UI for the workspace: controllers, form
//! validation, components and the tab views.

use dioxus::prelude::*;

pub mod components;
pub mod controllers;
pub mod forms;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod state;
pub use state::StateHandle;

mod session;
pub use session::{use_probe, use_session, PlatformTokenStore, SessionProvider, SessionState};

mod tabs;
pub use tabs::Tab;

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod navbar;
pub use navbar::Navbar;

mod health_indicator;
pub use health_indicator::{refresh_probe, HealthIndicator};
