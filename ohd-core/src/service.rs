//! The boundary to the external hazard-analysis service.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::report::{ReportAnalysis, ReportRequest};
use crate::snapshot::HazardSnapshot;

/// `POST /analyze-hazards`
pub const ANALYZE_HAZARDS_PATH: &str = "/analyze-hazards";
/// `POST /analyze-user-report`
pub const ANALYZE_REPORT_PATH: &str = "/analyze-user-report";

/// The two calls the dashboard makes.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// one thread.
#[async_trait(?Send)]
pub trait AnalysisService {
    async fn analyze_hazards(&self, location: &str) -> Result<HazardSnapshot, ClientError>;

    async fn analyze_report(&self, request: &ReportRequest) -> Result<ReportAnalysis, ClientError>;
}
