//! Ocean Hazard Monitor
//!
//! Shows the hazard picture for one of five Southern California beaches and
//! lets a visitor report what they see.
//!
//! Data flow:
//! 1. `build.rs` bakes the analysis service base URL into the binary.
//! 2. On mount: load the Leaflet bridge and fetch hazards for the default beach.
//! 3. On beach change or refresh: fetch again; the snapshot is replaced in full.
//! 4. On report submit: post the draft, alert the result once, clear on success.

use dioxus::prelude::*;
use ohd_core::client::{ClientConfig, HttpAnalysisClient};
use ohd_dashboard_ui::actions;
use ohd_dashboard_ui::components::{
    HazardList, HazardMap, LoadingSpinner, LocationSelector, RefreshButton, ReportForm,
    RiskBanner, SafeAreas,
};
use ohd_dashboard_ui::js_bridge;
use ohd_dashboard_ui::state::AppState;

/// Analysis service base URL, set by `build.rs`.
const API_BASE_URL: &str = env!("OHD_API_BASE_URL");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Analysis service at {}", API_BASE_URL);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hazard-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let client = use_context_provider(|| HttpAnalysisClient::new(ClientConfig::new(API_BASE_URL)));

    // ─── Mount: map bridge + first fetch for the default beach ───
    use_hook(move || {
        js_bridge::init_map_scripts();
        actions::refresh(state, client);
    });

    let view = state.view.read().clone();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 24px; margin: 8px 0;",
                "Ocean Hazard Monitor"
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                LocationSelector {}
                RefreshButton {}
            }

            if let Some(snapshot) = view.snapshot {
                RiskBanner { snapshot: snapshot.clone() }

                if snapshot.has_map_markers() {
                    HazardMap {}
                }

                SafeAreas { areas: snapshot.safe_areas.clone() }
                HazardList { hazards: snapshot.hazards.clone() }
            } else {
                LoadingSpinner {}
            }

            ReportForm {}
        }
    }
}
