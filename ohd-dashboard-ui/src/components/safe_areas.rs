use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SafeAreasProps {
    pub areas: Vec<String>,
}

/// Areas the analysis reports as safe, in the order received.
#[component]
pub fn SafeAreas(props: SafeAreasProps) -> Element {
    if props.areas.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin: 12px 0; padding: 8px 12px; background: #E8F5E9; border-radius: 4px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px; color: #2E7D32;",
                "Safe Areas"
            }
            ul {
                style: "margin: 0; padding-left: 20px;",
                for area in props.areas.iter() {
                    li { "{area}" }
                }
            }
        }
    }
}
