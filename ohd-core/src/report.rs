//! User-submitted hazard reports: the draft, the request, the analysis and
//! the one-shot notification shown afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::hazard::Credibility;

/// Shown when a report submission fails for any reason.
pub const REPORT_FAILURE_MESSAGE: &str = "Failed to submit report. Please try again.";

/// In-progress, unsubmitted user report.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ReportDraft {
    pub location: String,
    pub text: String,
}

impl ReportDraft {
    /// Both fields must contain something other than whitespace.
    pub fn is_submittable(&self) -> bool {
        !self.location.trim().is_empty() && !self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.location.clear();
        self.text.clear();
    }

    pub fn to_request(&self) -> Option<ReportRequest> {
        if !self.is_submittable() {
            return None;
        }
        Some(ReportRequest {
            report: self.text.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

/// Which draft input changed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DraftField {
    Location,
    Text,
}

/// Body of `POST /analyze-user-report`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub report: String,
    pub location: String,
}

/// The service's classification of a user report.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub is_hazard: bool,
    #[serde(default)]
    pub urgency: String,
    #[serde(default)]
    pub recommended_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<Credibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_verification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_specific: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
    /// Present when the service could not analyze the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportAnalysis {
    /// Turn an in-band service error into a [`ClientError`].
    pub fn into_result(self) -> Result<ReportAnalysis, ClientError> {
        match self.error {
            Some(e) => Err(ClientError::Service(e)),
            None => Ok(self),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// One-shot message surfaced after a report submission settles.
#[derive(Debug, PartialEq, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl Notification {
    pub fn for_analysis(analysis: &ReportAnalysis) -> Self {
        let mut lines = vec![
            format!("Hazard detected: {}", if analysis.is_hazard { "Yes" } else { "No" }),
            format!("Urgency: {}", analysis.urgency),
            format!("Recommended action: {}", analysis.recommended_action),
        ];
        if let Some(summary) = analysis.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            lines.push(format!("Summary: {}", summary));
        }
        Notification {
            kind: NotificationKind::Success,
            title: "Report analyzed".to_string(),
            lines,
        }
    }

    pub fn failure() -> Self {
        Notification {
            kind: NotificationKind::Failure,
            title: REPORT_FAILURE_MESSAGE.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    /// Title and lines joined for a plain-text alert.
    pub fn message(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(json: &str) -> ReportAnalysis {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn draft_requires_both_fields() {
        let mut draft = ReportDraft::default();
        assert!(!draft.is_submittable());

        draft.text = "Shark 100 yards out".to_string();
        assert!(!draft.is_submittable());
        assert!(draft.to_request().is_none());

        draft.location = "   ".to_string();
        assert!(!draft.is_submittable());

        draft.location = " Malibu ".to_string();
        let request = draft.to_request().unwrap();
        assert_eq!(request.location, "Malibu");
        assert_eq!(request.report, "Shark 100 yards out");

        draft.clear();
        assert_eq!(draft, ReportDraft::default());
    }

    #[test]
    fn analysis_with_minimal_fields() {
        let a = analysis(r#"{"is_hazard": true, "urgency": "HIGH", "recommended_action": "Leave the water"}"#);
        assert!(a.is_hazard);
        assert!(a.summary.is_none());
        assert!(a.clone().into_result().is_ok());
    }

    #[test]
    fn analysis_with_in_band_error() {
        let a = analysis(r#"{"error": "quota exceeded", "is_hazard": false}"#);
        assert_eq!(
            a.into_result(),
            Err(ClientError::Service("quota exceeded".to_string()))
        );
    }

    #[test]
    fn analysis_extended_fields() {
        let a = analysis(
            r#"{
                "is_hazard": true,
                "hazard_type": "shark",
                "urgency": "CRITICAL",
                "credibility": "medium",
                "recommended_action": "Alert lifeguards",
                "requires_verification": true,
                "location_specific": "Zuma",
                "summary": "Large shark sighted near shore"
            }"#,
        );
        assert_eq!(a.credibility, Some(Credibility::Medium));
        assert_eq!(a.requires_verification, Some(true));
        let n = Notification::for_analysis(&a);
        assert!(n.is_success());
        assert_eq!(n.lines.len(), 4);
        assert!(n.message().contains("Urgency: CRITICAL"));
    }

    #[test]
    fn notification_messages() {
        let a = analysis(r#"{"is_hazard": false, "urgency": "LOW", "recommended_action": "None"}"#);
        let n = Notification::for_analysis(&a);
        assert_eq!(
            n.message(),
            "Report analyzed\nHazard detected: No\nUrgency: LOW\nRecommended action: None"
        );

        let f = Notification::failure();
        assert!(!f.is_success());
        assert_eq!(f.message(), REPORT_FAILURE_MESSAGE);
    }
}
