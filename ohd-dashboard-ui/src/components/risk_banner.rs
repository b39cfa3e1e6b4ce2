//! Overall risk banner for the current snapshot.

use super::{risk_colors, ErrorDisplay};
use dioxus::prelude::*;
use ohd_core::snapshot::HazardSnapshot;
use ohd_utils::timestamps::display_timestamp;

#[derive(Props, Clone, PartialEq)]
pub struct RiskBannerProps {
    pub snapshot: HazardSnapshot,
}

/// Location, overall risk level, general conditions and last update time.
/// HIGH and EXTREME switch to alert styling. A snapshot carrying an error
/// (including the fallback after a failed fetch) shows it below the banner.
#[component]
pub fn RiskBanner(props: RiskBannerProps) -> Element {
    let snapshot = &props.snapshot;
    let level = snapshot.overall_risk_level;
    let (background, foreground) = risk_colors(level);
    let border_width = if level.is_alert() { 3 } else { 1 };
    let style = format!(
        "padding: 12px 16px; margin: 8px 0; border-radius: 6px; background: {}; color: {}; border: {}px solid {};",
        background, foreground, border_width, foreground
    );
    let heading = if level.is_alert() {
        format!("WARNING: {} RISK", level)
    } else {
        format!("{} RISK", level)
    };
    let updated = display_timestamp(snapshot.updated_at());

    rsx! {
        div {
            style: "{style}",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{heading}"
            }
            p {
                style: "margin: 0 0 4px 0; font-weight: bold;",
                "{snapshot.location}"
            }
            if !snapshot.general_conditions.is_empty() {
                p {
                    style: "margin: 0 0 4px 0;",
                    "{snapshot.general_conditions}"
                }
            }
            if !updated.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; opacity: 0.8;",
                    "Last updated: {updated}"
                }
            }
        }
        if let Some(err) = snapshot.error.as_ref() {
            ErrorDisplay { message: err.clone() }
        }
    }
}
