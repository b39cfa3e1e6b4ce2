use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;
use ohd_core::client::HttpAnalysisClient;

/// Re-fetches hazards for the selected beach; disabled while loading.
#[component]
pub fn RefreshButton() -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<HttpAnalysisClient>();
    let loading = state.loading();

    let on_click = move |_| {
        actions::refresh(state, client.clone());
    };

    rsx! {
        button {
            style: "padding: 6px 14px; border-radius: 4px; border: 1px solid #1976D2; background: #1976D2; color: white; cursor: pointer;",
            disabled: loading,
            onclick: on_click,
            if loading { "Refreshing..." } else { "Refresh" }
        }
    }
}
