//! Async operations of the dashboard: each one drives [`ViewState`] through a
//! full request lifecycle against an [`AnalysisService`].
//!
//! Failures never escape: a failed hazard fetch settles with a fallback
//! snapshot and a failed report settles with a failure notification.

use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

use crate::location::BeachLocation;
use crate::report::{DraftField, Notification};
use crate::service::AnalysisService;
use crate::snapshot::HazardSnapshot;
use crate::view_state::ViewState;

/// Closure access to wherever the [`ViewState`] lives.
///
/// The loading flag must be observable between dispatch and settlement, so
/// operations borrow the state only around each transition, never across an
/// await.
pub trait StateHandle {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;
    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R;
}

impl StateHandle for Rc<RefCell<ViewState>> {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&*self.borrow())
    }

    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// Re-fetch hazards for the selected location, whether or not a snapshot
/// already exists. Returns false if another request was in flight.
pub async fn refresh<H, S>(state: &mut H, service: &S) -> bool
where
    H: StateHandle,
    S: AnalysisService + ?Sized,
{
    let Some(location) = state.update(|s| s.begin_hazard_fetch()) else {
        debug!("Refresh skipped: a request is already in flight");
        return false;
    };

    info!("Fetching hazards for {}", location);
    let snapshot = match service.analyze_hazards(location.name()).await {
        Ok(snapshot) => {
            info!(
                "Hazards for {}: risk {}, {} hazard(s)",
                location,
                snapshot.overall_risk_level,
                snapshot.hazards.len()
            );
            snapshot
        }
        Err(e) => {
            warn!("Error fetching hazards for {}: {}", location, e);
            HazardSnapshot::fallback(location.name(), e.to_string())
        }
    };

    state.update(|s| s.finish_hazard_fetch(snapshot));
    true
}

/// Select a beach and immediately fetch its hazards.
pub async fn select_location<H, S>(state: &mut H, service: &S, location: BeachLocation) -> bool
where
    H: StateHandle,
    S: AnalysisService + ?Sized,
{
    if !state.update(|s| s.select_location(location)) {
        return false;
    }
    refresh(state, service).await
}

pub fn update_draft<H: StateHandle>(state: &mut H, field: DraftField, value: impl Into<String>) {
    state.update(|s| s.update_draft(field, value));
}

/// Submit the draft report. `None` (and no network call) when either field is
/// blank or another request is in flight.
pub async fn submit_report<H, S>(state: &mut H, service: &S) -> Option<Notification>
where
    H: StateHandle,
    S: AnalysisService + ?Sized,
{
    let request = state.update(|s| s.begin_report())?;

    info!("Submitting report for {}", request.location);
    let result = service
        .analyze_report(&request)
        .await
        .and_then(|analysis| analysis.into_result());

    Some(state.update(|s| s.finish_report(result)))
}
