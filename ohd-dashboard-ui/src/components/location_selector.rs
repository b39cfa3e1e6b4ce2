//! Dropdown selector for choosing a beach.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;
use ohd_core::client::HttpAnalysisClient;
use ohd_core::location::BeachLocation;

/// Beach dropdown selector.
/// Changing the selection fetches hazards for the new beach right away.
/// Disabled while a request is in flight.
#[component]
pub fn LocationSelector() -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<HttpAnalysisClient>();
    let (selected, loading) = {
        let view = state.view.read();
        (view.selected_location, view.loading())
    };

    let on_change = move |evt: Event<FormData>| {
        if let Some(location) = BeachLocation::from_name(&evt.value()) {
            actions::select_location(state, client.clone(), location);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "beach-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Beach: "
            }
            select {
                id: "beach-select",
                disabled: loading,
                onchange: on_change,
                for beach in BeachLocation::ALL {
                    option {
                        value: beach.name(),
                        selected: beach == selected,
                        {beach.name()}
                    }
                }
            }
        }
    }
}
