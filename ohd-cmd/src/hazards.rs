//! One hazard fetch, printed for a terminal.

use log::info;
use ohd_core::controller::{self, StateHandle};
use ohd_core::location::BeachLocation;
use ohd_core::service::AnalysisService;
use ohd_core::snapshot::HazardSnapshot;
use ohd_core::view_state::ViewState;
use ohd_utils::timestamps::display_timestamp;
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

/// Select `location`, fetch its snapshot and print it.
///
/// A failed fetch still prints (the fallback snapshot carries the error);
/// the process exit status stays zero, as the dashboard stays usable.
pub async fn run_hazards<S: AnalysisService>(
    service: &S,
    location: BeachLocation,
    json: bool,
) -> anyhow::Result<()> {
    let mut state = Rc::new(RefCell::new(ViewState::new()));
    controller::select_location(&mut state, service, location).await;

    let snapshot = state
        .read(|s| s.snapshot.clone())
        .ok_or_else(|| anyhow::anyhow!("No snapshot for {}", location))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_snapshot(&snapshot));
    }
    info!("Done: {}", location);
    Ok(())
}

/// Plain-text rendering of a snapshot: banner, map pins, safe areas, hazards.
pub fn render_snapshot(snapshot: &HazardSnapshot) -> String {
    let mut out = String::new();
    let level = snapshot.overall_risk_level;

    if level.is_alert() {
        let _ = writeln!(out, "!!! HIGH RISK ALERT for {} !!!", snapshot.location);
    }
    let _ = writeln!(out, "{} - risk {}", snapshot.location, level);
    if !snapshot.general_conditions.is_empty() {
        let _ = writeln!(out, "Conditions: {}", snapshot.general_conditions);
    }
    let _ = writeln!(out, "Last updated: {}", display_timestamp(snapshot.updated_at()));
    if let Some(err) = &snapshot.error {
        let _ = writeln!(out, "Error: {}", err);
    }

    let markers = snapshot.map_markers();
    if !markers.is_empty() {
        let _ = writeln!(out, "\nMap markers ({}):", markers.len());
        for m in &markers {
            let _ = writeln!(out, "  [{}] {} at {:.4},{:.4}", m.severity, m.kind, m.lat, m.lng);
        }
    }

    if !snapshot.safe_areas.is_empty() {
        let _ = writeln!(out, "\nSafe areas:");
        for area in &snapshot.safe_areas {
            let _ = writeln!(out, "  - {}", area);
        }
    }

    let _ = writeln!(out, "\nActive hazards ({}):", snapshot.hazards.len());
    for hazard in &snapshot.hazards {
        let _ = writeln!(
            out,
            "  [{}] {}: {}",
            hazard.severity, hazard.kind, hazard.description
        );
        if !hazard.location_specific.is_empty() {
            let _ = writeln!(out, "      where: {}", hazard.location_specific);
        }
        let _ = writeln!(
            out,
            "      source: {} ({} credibility)",
            hazard.source, hazard.credibility
        );
        if !hazard.recommended_action.is_empty() {
            let _ = writeln!(out, "      action: {}", hazard.recommended_action);
        }
    }
    out
}
