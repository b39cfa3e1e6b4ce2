//! Reusable Dioxus RSX components for the hazard dashboard.

mod error_display;
mod hazard_card;
mod hazard_list;
mod hazard_map;
mod loading_spinner;
mod location_selector;
mod refresh_button;
mod report_form;
mod risk_banner;
mod safe_areas;

pub use error_display::ErrorDisplay;
pub use hazard_card::HazardCard;
pub use hazard_list::HazardList;
pub use hazard_map::HazardMap;
pub use loading_spinner::LoadingSpinner;
pub use location_selector::LocationSelector;
pub use refresh_button::RefreshButton;
pub use report_form::ReportForm;
pub use risk_banner::RiskBanner;
pub use safe_areas::SafeAreas;

use ohd_core::hazard::{Credibility, RiskLevel};

/// (background, foreground) colors for a severity badge or banner.
pub fn risk_colors(level: RiskLevel) -> (&'static str, &'static str) {
    match level {
        RiskLevel::Low => ("#E8F5E9", "#2E7D32"),
        RiskLevel::Medium => ("#FFF8E1", "#F57F17"),
        RiskLevel::High => ("#FFF3E0", "#E65100"),
        RiskLevel::Extreme => ("#FFEBEE", "#C62828"),
        RiskLevel::Unknown => ("#F5F5F5", "#616161"),
    }
}

pub fn credibility_color(credibility: Credibility) -> &'static str {
    match credibility {
        Credibility::High => "#2E7D32",
        Credibility::Medium => "#F57F17",
        Credibility::Low => "#C62828",
        Credibility::Unknown => "#616161",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_distinct_colors() {
        let levels = [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Extreme,
            RiskLevel::Unknown,
        ];
        let mut foregrounds: Vec<&str> = levels.iter().map(|l| risk_colors(*l).1).collect();
        foregrounds.sort();
        foregrounds.dedup();
        assert_eq!(foregrounds.len(), levels.len());
    }
}
