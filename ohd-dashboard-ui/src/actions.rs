//! Event-handler entry points.
//!
//! Each action spawns the matching `ohd_core::controller` operation on the
//! Dioxus runtime. Call these only from event handlers or hooks.

use dioxus::prelude::*;
use log::info;
use ohd_core::client::HttpAnalysisClient;
use ohd_core::controller;
use ohd_core::location::BeachLocation;
use ohd_core::report::Notification;

use crate::state::AppState;

/// Re-fetch hazards for the selected beach.
pub fn refresh(state: AppState, client: HttpAnalysisClient) {
    spawn(async move {
        let mut state = state;
        controller::refresh(&mut state, &client).await;
    });
}

/// Select a beach and fetch its hazards.
pub fn select_location(state: AppState, client: HttpAnalysisClient, location: BeachLocation) {
    spawn(async move {
        let mut state = state;
        controller::select_location(&mut state, &client, location).await;
    });
}

/// Submit the report draft and surface the result once.
pub fn submit_report(state: AppState, client: HttpAnalysisClient) {
    spawn(async move {
        let mut state = state;
        if let Some(notification) = controller::submit_report(&mut state, &client).await {
            notify(&notification);
        }
    });
}

fn notify(notification: &Notification) {
    info!("Report result: {}", notification.title);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&notification.message());
    }
}
