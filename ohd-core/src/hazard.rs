use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coordinates::Coordinates;

/// Severity scale shared by the overall risk level and individual hazards.
///
/// The service writes these upper-case; anything outside the documented set
/// (the service's own degraded answer uses "UNKNOWN") maps to `Unknown`
/// instead of failing the whole response.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
    #[default]
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Extreme => "EXTREME",
            RiskLevel::Unknown => "UNKNOWN",
        }
    }

    /// HIGH and EXTREME warrant an alert.
    pub fn is_alert(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Extreme)
    }
}

impl From<&str> for RiskLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => RiskLevel::Low,
            "MEDIUM" => RiskLevel::Medium,
            "HIGH" => RiskLevel::High,
            "EXTREME" => RiskLevel::Extreme,
            _ => RiskLevel::Unknown,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        RiskLevel::from(value.as_str())
    }
}

impl From<RiskLevel> for String {
    fn from(value: RiskLevel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far the service trusts the source of a hazard report.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Credibility {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Credibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Credibility::Low => "LOW",
            Credibility::Medium => "MEDIUM",
            Credibility::High => "HIGH",
            Credibility::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for Credibility {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => Credibility::Low,
            "MEDIUM" => Credibility::Medium,
            "HIGH" => Credibility::High,
            _ => Credibility::Unknown,
        }
    }
}

impl From<String> for Credibility {
    fn from(value: String) -> Self {
        Credibility::from(value.as_str())
    }
}

impl From<Credibility> for String {
    fn from(value: Credibility) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Credibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported ocean condition (rip current, shark sighting, ...).
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hazard {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub severity: RiskLevel,
    pub location_specific: String,
    pub reported_time: String,
    pub source: String,
    pub credibility: Credibility,
    pub recommended_action: String,
    /// "lat,lng" when the service could place the hazard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

impl Hazard {
    /// Parsed coordinates, if present and valid for map display.
    pub fn map_position(&self) -> Option<Coordinates> {
        self.coordinates.as_deref()?.parse().ok()
    }
}
