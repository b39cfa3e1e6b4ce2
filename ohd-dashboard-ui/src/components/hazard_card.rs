//! Card for a single active hazard.

use super::{credibility_color, risk_colors};
use dioxus::prelude::*;
use ohd_core::hazard::Hazard;

#[derive(Props, Clone, PartialEq)]
pub struct HazardCardProps {
    pub hazard: Hazard,
}

#[component]
pub fn HazardCard(props: HazardCardProps) -> Element {
    let hazard = &props.hazard;
    let (badge_bg, badge_fg) = risk_colors(hazard.severity);
    let badge_style = format!(
        "padding: 2px 8px; border-radius: 10px; font-size: 12px; font-weight: bold; background: {}; color: {};",
        badge_bg, badge_fg
    );
    let credibility_style = format!(
        "font-weight: bold; color: {};",
        credibility_color(hazard.credibility)
    );
    let kind = if hazard.kind.is_empty() {
        "Unspecified hazard".to_string()
    } else {
        hazard.kind.clone()
    };

    rsx! {
        div {
            style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px; margin: 8px 0;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;",
                strong { style: "text-transform: capitalize;", "{kind}" }
                span { style: "{badge_style}", "{hazard.severity}" }
            }
            p { style: "margin: 0 0 6px 0;", "{hazard.description}" }
            if !hazard.location_specific.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #555;",
                    "Location: {hazard.location_specific}"
                }
            }
            if !hazard.reported_time.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #555;",
                    "Reported: {hazard.reported_time}"
                }
            }
            p {
                style: "margin: 0; font-size: 13px; color: #555;",
                "Source: {hazard.source} ("
                span { style: "{credibility_style}", "{hazard.credibility}" }
                " credibility)"
            }
            if !hazard.recommended_action.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; padding: 6px 8px; background: #E3F2FD; border-radius: 4px; font-size: 13px;",
                    strong { "Recommended action: " }
                    "{hazard.recommended_action}"
                }
            }
        }
    }
}
