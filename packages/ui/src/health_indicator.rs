//! API reachability icon for the navbar.

use dioxus::prelude::*;

use crate::controllers::health::{self, ProbeState};
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaSpinner};
use crate::session::{use_probe, use_session};
use crate::Icon;

/// Run the health probe and publish the result to the shared probe signal.
pub async fn refresh_probe(mut probe: Signal<ProbeState>, backend: api::HttpBackend) {
    probe.set(ProbeState::Checking);
    let result = health::probe(&backend).await;
    probe.set(result);
}

/// Probes once on mount; clicking it calls `onclick` (the status view).
#[component]
pub fn HealthIndicator(onclick: EventHandler<()>) -> Element {
    let session = use_session();
    let probe = use_probe();

    let _ = use_resource(move || async move {
        let backend = session.peek().backend();
        refresh_probe(probe, backend).await;
    });

    let state = probe();
    let (class, title) = match &state {
        ProbeState::Checking => ("health-indicator health-indicator--checking", state.message()),
        ProbeState::Reachable(_) => ("health-indicator health-indicator--ok", state.message()),
        ProbeState::Unreachable(_) => ("health-indicator health-indicator--down", state.message()),
    };

    rsx! {
        button {
            class,
            title,
            r#type: "button",
            onclick: move |_| onclick.call(()),
            match state {
                ProbeState::Checking => rsx! {
                    Icon { icon: FaSpinner, width: 14, height: 14 }
                },
                ProbeState::Reachable(_) => rsx! {
                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                },
                ProbeState::Unreachable(_) => rsx! {
                    Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                },
            }
        }
    }
}
