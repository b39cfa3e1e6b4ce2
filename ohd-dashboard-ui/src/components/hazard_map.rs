//! Map of hazards that carry usable coordinates.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use log::debug;
use ohd_core::coordinates::MapMarker;

/// DOM id for the Leaflet map container div.
pub const MAP_CONTAINER_ID: &str = "hazard-map";

/// Markers of the current snapshot.
///
/// Draft edits and loading transitions also write the view signal; the memo
/// only notifies its readers when the marker list itself changes.
pub fn use_map_markers(state: AppState) -> Memo<Vec<MapMarker>> {
    use_memo(move || {
        state
            .view
            .read()
            .snapshot
            .as_ref()
            .map(|s| s.map_markers())
            .unwrap_or_default()
    })
}

/// Leaflet container. Only mounted when the snapshot has at least one
/// placeable hazard; the map is rebuilt only when its markers change.
#[component]
pub fn HazardMap() -> Element {
    let state = use_context::<AppState>();
    let markers = use_map_markers(state);

    use_effect(move || {
        let markers = markers.read();
        debug!("Rendering {} map marker(s)", markers.len());
        if markers.is_empty() {
            js_bridge::destroy_map(MAP_CONTAINER_ID);
        } else {
            js_bridge::render_hazard_map(MAP_CONTAINER_ID, &markers);
        }
    });

    use_drop(|| js_bridge::destroy_map(MAP_CONTAINER_ID));

    rsx! {
        div {
            style: "margin: 12px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "Hazard Map"
            }
            div {
                id: MAP_CONTAINER_ID,
                style: "height: 320px; width: 100%; border-radius: 6px; border: 1px solid #e0e0e0;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use ohd_core::controller::{self, StateHandle};
    use ohd_core::hazard::{Hazard, RiskLevel};
    use ohd_core::report::DraftField;
    use ohd_core::snapshot::HazardSnapshot;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    thread_local! {
        static STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
        static EFFECT_RUNS: Cell<usize> = const { Cell::new(0) };
    }

    /// Same subscription as `HazardMap`, with the JS calls swapped for a counter.
    fn counting_map() -> Element {
        let state = use_context_provider(AppState::new);
        use_hook(|| STATE.with(|cell| *cell.borrow_mut() = Some(state)));
        let markers = use_map_markers(state);
        use_effect(move || {
            let _ = markers.read().len();
            EFFECT_RUNS.with(|runs| runs.set(runs.get() + 1));
        });
        rsx! {}
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..5 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(50)) => {}
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn snapshot_at(coordinates: &str) -> HazardSnapshot {
        let mut snapshot = HazardSnapshot::fallback("Venice Beach, California", "");
        snapshot.error = None;
        snapshot.overall_risk_level = RiskLevel::High;
        snapshot.hazards = vec![Hazard {
            kind: "riptide".to_string(),
            severity: RiskLevel::High,
            coordinates: Some(coordinates.to_string()),
            ..Hazard::default()
        }];
        snapshot
    }

    #[tokio::test]
    async fn test_map_effect_ignores_draft_edits() {
        EFFECT_RUNS.with(|runs| runs.set(0));
        let mut dom = VirtualDom::new(counting_map);
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let mut state = STATE.with(|cell| *cell.borrow()).unwrap();
        let before = EFFECT_RUNS.with(Cell::get);

        dom.in_runtime(|| {
            for text in ["R", "Ri", "Rip"] {
                controller::update_draft(&mut state, DraftField::Text, text);
            }
        });
        settle(&mut dom).await;
        assert_eq!(EFFECT_RUNS.with(Cell::get), before);

        dom.in_runtime(|| {
            state.update(|s| {
                s.begin_hazard_fetch();
                s.finish_hazard_fetch(snapshot_at("33.98,-118.47"));
            });
        });
        settle(&mut dom).await;
        let after_fetch = EFFECT_RUNS.with(Cell::get);
        assert_eq!(after_fetch, before + 1);

        // Same markers again: the map stays as it is
        dom.in_runtime(|| {
            state.update(|s| {
                s.begin_hazard_fetch();
                s.finish_hazard_fetch(snapshot_at("33.98,-118.47"));
            });
        });
        settle(&mut dom).await;
        assert_eq!(EFFECT_RUNS.with(Cell::get), after_fetch);
    }
}
