//! The dashboard's process-local view state and its request lifecycle.
//!
//! Every transition is a plain synchronous method so the same state machine
//! drives the Dioxus dashboard (through signals) and the CLI (through a
//! `RefCell`). A single loading slot is shared by hazard fetches and report
//! submissions: while either is in flight the other cannot start.

use log::warn;

use crate::error::ClientError;
use crate::location::BeachLocation;
use crate::report::{DraftField, Notification, ReportAnalysis, ReportDraft, ReportRequest};
use crate::snapshot::HazardSnapshot;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RequestKind {
    HazardFetch,
    ReportSubmission,
}

/// IDLE -> LOADING -> (SUCCESS | FAILED) -> IDLE; the settled states are
/// transient, so only `Idle` and `Loading` are stored.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading(RequestKind),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct ViewState {
    pub selected_location: BeachLocation,
    /// None only before the first fetch settles
    pub snapshot: Option<HazardSnapshot>,
    pub phase: RequestPhase,
    pub draft: ReportDraft,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Loading(_))
    }

    /// Change the selected beach. Refused while a request is in flight, since
    /// the follow-up fetch could not start.
    pub fn select_location(&mut self, location: BeachLocation) -> bool {
        if self.loading() {
            warn!("Ignoring selection of {} while a request is in flight", location);
            return false;
        }
        self.selected_location = location;
        true
    }

    /// Enter LOADING for a hazard fetch of the selected location.
    pub fn begin_hazard_fetch(&mut self) -> Option<BeachLocation> {
        if self.loading() {
            return None;
        }
        self.phase = RequestPhase::Loading(RequestKind::HazardFetch);
        Some(self.selected_location)
    }

    /// Replace the snapshot in full and return to IDLE.
    pub fn finish_hazard_fetch(&mut self, snapshot: HazardSnapshot) {
        if self.phase != RequestPhase::Loading(RequestKind::HazardFetch) {
            warn!("Hazard fetch settled while phase was {:?}", self.phase);
        }
        self.snapshot = Some(snapshot);
        self.phase = RequestPhase::Idle;
    }

    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Location => self.draft.location = value.into(),
            DraftField::Text => self.draft.text = value.into(),
        }
    }

    /// Whether the submit action is enabled.
    pub fn can_submit_report(&self) -> bool {
        !self.loading() && self.draft.is_submittable()
    }

    /// Enter LOADING for a report submission. None when a request is already
    /// in flight or either draft field is blank.
    pub fn begin_report(&mut self) -> Option<ReportRequest> {
        if self.loading() {
            return None;
        }
        let request = self.draft.to_request()?;
        self.phase = RequestPhase::Loading(RequestKind::ReportSubmission);
        Some(request)
    }

    /// Return to IDLE. The draft is cleared on success and kept on failure so
    /// the user can resubmit without retyping.
    pub fn finish_report(&mut self, result: Result<ReportAnalysis, ClientError>) -> Notification {
        if self.phase != RequestPhase::Loading(RequestKind::ReportSubmission) {
            warn!("Report submission settled while phase was {:?}", self.phase);
        }
        self.phase = RequestPhase::Idle;
        match result {
            Ok(analysis) => {
                self.draft.clear();
                Notification::for_analysis(&analysis)
            }
            Err(e) => {
                warn!("Report submission failed: {}", e);
                Notification::failure()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::RiskLevel;

    fn filled_draft(state: &mut ViewState) {
        state.update_draft(DraftField::Location, "Zuma Beach");
        state.update_draft(DraftField::Text, "Jellyfish all over the shoreline");
    }

    fn ok_analysis() -> ReportAnalysis {
        serde_json::from_str(r#"{"is_hazard": true, "urgency": "MEDIUM", "recommended_action": "Avoid the water"}"#)
            .unwrap()
    }

    #[test]
    fn starts_idle_without_snapshot() {
        let state = ViewState::new();
        assert!(!state.loading());
        assert!(state.snapshot.is_none());
        assert_eq!(state.selected_location, BeachLocation::SantaMonica);
    }

    #[test]
    fn hazard_fetch_lifecycle() {
        let mut state = ViewState::new();
        assert!(state.select_location(BeachLocation::Venice));

        let location = state.begin_hazard_fetch().unwrap();
        assert_eq!(location, BeachLocation::Venice);
        assert!(state.loading());
        assert_eq!(state.phase, RequestPhase::Loading(RequestKind::HazardFetch));

        // A second fetch cannot start while the first is in flight
        assert!(state.begin_hazard_fetch().is_none());

        state.finish_hazard_fetch(HazardSnapshot::fallback(location.name(), "offline"));
        assert!(!state.loading());
        let snapshot = state.snapshot.as_ref().unwrap();
        assert_eq!(snapshot.overall_risk_level, RiskLevel::Low);
    }

    #[test]
    fn snapshot_is_replaced_wholesale() {
        let mut state = ViewState::new();
        state.begin_hazard_fetch();
        state.finish_hazard_fetch(HazardSnapshot::fallback("a", "first"));
        state.begin_hazard_fetch();
        state.finish_hazard_fetch(HazardSnapshot::fallback("b", "second"));
        let snapshot = state.snapshot.unwrap();
        assert_eq!(snapshot.location, "b");
        assert_eq!(snapshot.error.as_deref(), Some("second"));
    }

    #[test]
    fn selection_refused_while_loading() {
        let mut state = ViewState::new();
        state.begin_hazard_fetch();
        assert!(!state.select_location(BeachLocation::Malibu));
        assert_eq!(state.selected_location, BeachLocation::SantaMonica);
    }

    #[test]
    fn report_blocked_by_blank_fields() {
        let mut state = ViewState::new();
        state.update_draft(DraftField::Text, "Big waves");
        assert!(!state.can_submit_report());
        assert!(state.begin_report().is_none());
        assert!(!state.loading());

        state.update_draft(DraftField::Location, " \t ");
        assert!(state.begin_report().is_none());
        assert!(!state.loading());
    }

    #[test]
    fn report_blocked_by_hazard_fetch() {
        let mut state = ViewState::new();
        filled_draft(&mut state);
        state.begin_hazard_fetch();
        assert!(!state.can_submit_report());
        assert!(state.begin_report().is_none());
        assert_eq!(state.phase, RequestPhase::Loading(RequestKind::HazardFetch));
    }

    #[test]
    fn hazard_fetch_blocked_by_report() {
        let mut state = ViewState::new();
        filled_draft(&mut state);
        assert!(state.begin_report().is_some());
        assert!(state.begin_hazard_fetch().is_none());
    }

    #[test]
    fn successful_report_clears_draft() {
        let mut state = ViewState::new();
        filled_draft(&mut state);
        let request = state.begin_report().unwrap();
        assert_eq!(request.location, "Zuma Beach");
        assert!(state.loading());

        let notification = state.finish_report(Ok(ok_analysis()));
        assert!(notification.is_success());
        assert!(!state.loading());
        assert_eq!(state.draft, ReportDraft::default());
    }

    #[test]
    fn failed_report_keeps_draft() {
        let mut state = ViewState::new();
        filled_draft(&mut state);
        let before = state.draft.clone();
        state.begin_report().unwrap();

        let notification = state.finish_report(Err(ClientError::Status(500)));
        assert!(!notification.is_success());
        assert!(!state.loading());
        assert_eq!(state.draft, before);
    }
}
