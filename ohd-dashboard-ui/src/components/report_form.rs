//! Free-text hazard report form.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;
use ohd_core::client::HttpAnalysisClient;
use ohd_core::controller;
use ohd_core::report::DraftField;
use ohd_core::view_state::{RequestKind, RequestPhase};

/// Location and report inputs with a submit action. Submit is enabled only
/// when both fields are non-blank and no request is in flight.
#[component]
pub fn ReportForm() -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<HttpAnalysisClient>();
    let (draft, can_submit, submitting) = {
        let view = state.view.read();
        (
            view.draft.clone(),
            view.can_submit_report(),
            view.phase == RequestPhase::Loading(RequestKind::ReportSubmission),
        )
    };

    let on_location_input = move |evt: Event<FormData>| {
        let mut state = state;
        controller::update_draft(&mut state, DraftField::Location, evt.value());
    };

    let on_text_input = move |evt: Event<FormData>| {
        let mut state = state;
        controller::update_draft(&mut state, DraftField::Text, evt.value());
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        actions::submit_report(state, client.clone());
    };

    rsx! {
        form {
            style: "margin: 16px 0; padding: 12px; border: 1px solid #e0e0e0; border-radius: 6px;",
            onsubmit: on_submit,
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "Report a Hazard"
            }
            input {
                r#type: "text",
                placeholder: "Location (e.g. Venice Beach pier)",
                style: "display: block; width: 100%; margin-bottom: 8px; padding: 6px;",
                value: "{draft.location}",
                oninput: on_location_input,
            }
            textarea {
                placeholder: "Describe what you see (rip current, jellyfish, pollution...)",
                rows: "4",
                style: "display: block; width: 100%; margin-bottom: 8px; padding: 6px;",
                value: "{draft.text}",
                oninput: on_text_input,
            }
            button {
                r#type: "submit",
                style: "padding: 6px 14px; border-radius: 4px; border: none; background: #D32F2F; color: white; cursor: pointer;",
                disabled: !can_submit,
                if submitting { "Submitting..." } else { "Submit Report" }
            }
        }
    }
}
