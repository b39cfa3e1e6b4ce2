use serde::{Deserialize, Serialize};

use crate::coordinates::{map_markers, MapMarker};
use crate::hazard::{Hazard, RiskLevel};
use ohd_utils::timestamps::now_timestamp;

/// `general_conditions` of a snapshot synthesized after a failed fetch.
pub const FALLBACK_CONDITIONS: &str = "Error fetching data";

/// The complete hazard picture for one location as of one fetch.
///
/// Replaced wholesale on every fetch, successful or not.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HazardSnapshot {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub analysis_time: String,
    pub overall_risk_level: RiskLevel,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
    #[serde(default)]
    pub safe_areas: Vec<String>,
    #[serde(default)]
    pub general_conditions: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set by the service when it post-processes the analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl HazardSnapshot {
    /// A valid-but-degraded snapshot standing in for a failed fetch, so the
    /// view never has to branch on an error type.
    pub fn fallback(location: &str, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = "request failed".to_string();
        }
        let now = now_timestamp();
        HazardSnapshot {
            location: location.to_string(),
            analysis_time: now.clone(),
            overall_risk_level: RiskLevel::Low,
            hazards: Vec::new(),
            safe_areas: Vec::new(),
            general_conditions: FALLBACK_CONDITIONS.to_string(),
            last_updated: now,
            error: Some(message),
            processed_at: None,
            source: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn map_markers(&self) -> Vec<MapMarker> {
        map_markers(&self.hazards)
    }

    /// True when at least one hazard carries coordinates that parse.
    pub fn has_map_markers(&self) -> bool {
        self.hazards.iter().any(|h| h.map_position().is_some())
    }

    /// Prefer `last_updated`, fall back to `analysis_time`.
    pub fn updated_at(&self) -> &str {
        if self.last_updated.trim().is_empty() {
            &self.analysis_time
        } else {
            &self.last_updated
        }
    }
}
