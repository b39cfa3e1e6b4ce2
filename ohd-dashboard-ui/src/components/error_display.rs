//! Inline notice for a snapshot that carries an error.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Failure message recorded on the snapshot
    pub message: String,
    #[props(default = "Check that the analysis service is reachable, then use Refresh to try again.".to_string())]
    pub hint: String,
}

/// The dashboard stays interactive after a failed fetch; this explains why
/// the picture is empty.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 10px 14px; margin: 8px 0; background: #FFEBEE; color: #B71C1C; border-left: 4px solid #C62828; border-radius: 4px;",
            strong { "Hazard data unavailable: " }
            "{props.message}"
            if !props.hint.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #7f0000;",
                    "{props.hint}"
                }
            }
        }
    }
}
