//! Loading spinner component.

use dioxus::prelude::*;

/// Shown until the first snapshot arrives.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Analyzing ocean conditions..."
        }
    }
}
