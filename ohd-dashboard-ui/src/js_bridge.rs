//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map functions live in `assets/js/hazard-map.js` and are loaded
//! at runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. Leaflet itself (`L`) is loaded by a `<script>` tag in the host
//! page and may arrive after the WASM module, hence the polling.

use ohd_core::coordinates::{map_center, MapMarker};

static HAZARD_MAP_JS: &str = include_str!("../assets/js/hazard-map.js");

/// Zoom level that fits a single beach.
pub const DEFAULT_ZOOM: u8 = 12;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('OHD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal. JSON string syntax is valid JS.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the map script with a wait-for-Leaflet polling loop. Call once
/// at app startup.
///
/// The script defines `renderHazardMap(...)` via `function` declarations. To
/// keep them global (not block-scoped inside the setInterval callback) they
/// are evaluated with an indirect `eval()` once `L` is ready, then promoted
/// to `window.*` explicitly.
pub fn init_map_scripts() {
    let store_js = format!("window.__ohdMapScripts = {};", js_string_literal(HAZARD_MAP_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__ohdMapScripts);
                    delete window.__ohdMapScripts;
                    if (typeof renderHazardMap !== 'undefined') window.renderHazardMap = renderHazardMap;
                    if (typeof destroyHazardMap !== 'undefined') window.destroyHazardMap = destroyHazardMap;
                    window.__ohdMapReady = true;
                    console.log('OHD hazard map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Build the `renderHazardMap` config: centered on the first marker.
pub fn map_config_json(markers: &[MapMarker]) -> Option<String> {
    let center = map_center(markers)?;
    Some(
        serde_json::json!({
            "center": center,
            "zoom": DEFAULT_ZOOM,
        })
        .to_string(),
    )
}

/// Give up waiting for Leaflet after this many 100 ms polls.
pub const MAP_POLL_ATTEMPTS: u32 = 300;

/// Script that clears any pending render poll for `id_literal`.
fn cancel_poll_js(id_literal: &str) -> String {
    format!(
        "window.__ohdMapPolls = window.__ohdMapPolls || {{}}; \
         if (window.__ohdMapPolls[{id}]) {{ clearInterval(window.__ohdMapPolls[{id}]); \
         delete window.__ohdMapPolls[{id}]; }}",
        id = id_literal
    )
}

/// Script rendering `markers` into `container_id` once Leaflet, the map script
/// and the container element are all present. At most one poll runs per
/// container and it stops after [`MAP_POLL_ATTEMPTS`].
fn render_map_js(container_id: &str, markers: &[MapMarker]) -> Option<String> {
    let config_json = map_config_json(markers)?;
    let markers_json = serde_json::to_string(markers).unwrap_or_else(|_| "[]".to_string());
    let markers_literal = js_string_literal(&markers_json);
    let config_literal = js_string_literal(&config_json);
    let id_literal = js_string_literal(container_id);
    let cancel = cancel_poll_js(&id_literal);
    Some(format!(
        r#"
        (function() {{
            {cancel}
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__ohdMapReady &&
                    typeof window.renderHazardMap !== 'undefined' &&
                    document.getElementById({id_literal})) {{
                    clearInterval(poll);
                    delete window.__ohdMapPolls[{id_literal}];
                    try {{
                        window.renderHazardMap({id_literal}, {markers_literal}, {config_literal});
                    }} catch(e) {{ console.error('[OHD] renderHazardMap error:', e); }}
                }} else if (attempts >= {MAP_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    delete window.__ohdMapPolls[{id_literal}];
                    console.warn('[OHD] Leaflet not available, hazard map not rendered');
                }}
            }}, 100);
            window.__ohdMapPolls[{id_literal}] = poll;
        }})();
        "#,
    ))
}

/// Render the hazard map into `container_id`. Does nothing when there are no
/// markers.
pub fn render_hazard_map(container_id: &str, markers: &[MapMarker]) {
    if let Some(js) = render_map_js(container_id, markers) {
        call_js(&js);
    }
}

fn destroy_map_js(container_id: &str) -> String {
    let id_literal = js_string_literal(container_id);
    format!(
        "{} if (typeof window.destroyHazardMap !== 'undefined') window.destroyHazardMap({});",
        cancel_poll_js(&id_literal),
        id_literal
    )
}

/// Tear down the map in the given container, if any, and stop a render that
/// is still waiting for Leaflet.
pub fn destroy_map(container_id: &str) {
    call_js(&destroy_map_js(container_id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohd_core::hazard::RiskLevel;

    fn marker(lat: f64, lng: f64) -> MapMarker {
        MapMarker {
            hazard_index: 0,
            lat,
            lng,
            kind: "riptide".to_string(),
            severity: RiskLevel::High,
            description: "It's \"strong\"\nnear the pier".to_string(),
        }
    }

    #[test]
    fn test_config_centers_on_first_marker() {
        assert!(map_config_json(&[]).is_none());
        let config: serde_json::Value =
            serde_json::from_str(&map_config_json(&[marker(34.01, -118.49), marker(1.0, 2.0)]).unwrap())
                .unwrap();
        assert_eq!(config["center"]["lat"], 34.01);
        assert_eq!(config["center"]["lng"], -118.49);
        assert_eq!(config["zoom"], DEFAULT_ZOOM);
    }

    #[test]
    fn test_string_literal_survives_quotes_and_newlines() {
        let json = serde_json::to_string(&[marker(0.0, 0.0)]).unwrap();
        let literal = js_string_literal(&json);
        assert!(!literal.contains('\n'));
        // Decoding the literal as JSON gives back the input text
        let decoded: String = serde_json::from_str(&literal).unwrap();
        assert_eq!(decoded, json);
    }

    #[test]
    fn test_render_replaces_pending_poll_and_gives_up() {
        assert!(render_map_js("hazard-map", &[]).is_none());

        let js = render_map_js("hazard-map", &[marker(34.01, -118.49)]).unwrap();
        let cancel_at = js.find("clearInterval(window.__ohdMapPolls[\"hazard-map\"])").unwrap();
        let start_at = js.find("setInterval").unwrap();
        assert!(cancel_at < start_at);
        assert!(js.contains("window.__ohdMapPolls[\"hazard-map\"] = poll;"));
        assert!(js.contains(&format!("attempts >= {}", MAP_POLL_ATTEMPTS)));
    }

    #[test]
    fn test_destroy_cancels_pending_poll() {
        let js = destroy_map_js("hazard-map");
        assert!(js.contains("clearInterval(window.__ohdMapPolls[\"hazard-map\"])"));
        assert!(js.contains("window.destroyHazardMap(\"hazard-map\")"));
    }
}
