use super::HazardCard;
use dioxus::prelude::*;
use ohd_core::hazard::Hazard;

#[derive(Props, Clone, PartialEq)]
pub struct HazardListProps {
    pub hazards: Vec<Hazard>,
}

/// Every hazard in the snapshot, including ones that cannot be placed on the map.
#[component]
pub fn HazardList(props: HazardListProps) -> Element {
    let count = props.hazards.len();

    rsx! {
        div {
            style: "margin: 12px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "Active Hazards ({count})"
            }
            if props.hazards.is_empty() {
                p {
                    style: "margin: 0; color: #666;",
                    "No active hazards reported."
                }
            }
            for hazard in props.hazards.iter() {
                HazardCard { hazard: hazard.clone() }
            }
        }
    }
}
