use dioxus::prelude::*;

use crate::health_indicator::refresh_probe;
use crate::session::{use_probe, use_session};

/// Re-probes `health/` each time the tab is opened.
#[component]
pub fn ApiStatusView() -> Element {
    let session = use_session();
    let probe = use_probe();

    let _ = use_resource(move || async move {
        let backend = session.peek().backend();
        refresh_probe(probe, backend).await;
    });

    let state = probe();
    let endpoint = session.read().health_url();
    let class = if state.is_checking() {
        "text-muted"
    } else if state.is_reachable() {
        "text-success"
    } else {
        "text-danger"
    };

    rsx! {
        div {
            class: "view",
            h2 { "API status" }
            p { class, "{state.message()}" }
            p { class: "text-muted text-small", "Endpoint tested: {endpoint}" }
        }
    }
}
