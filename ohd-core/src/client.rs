//! reqwest implementation of [`AnalysisService`].
//!
//! Both calls are `POST` with a JSON body (`Content-Type: application/json`)
//! against a fixed base URL. Any transport error, non-2xx status or body that
//! fails to parse is reduced to a [`ClientError`]; no call is retried.

use async_trait::async_trait;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use crate::error::ClientError;
use crate::report::{ReportAnalysis, ReportRequest};
use crate::service::{AnalysisService, ANALYZE_HAZARDS_PATH, ANALYZE_REPORT_PATH};
use crate::snapshot::HazardSnapshot;

/// Where the analysis service listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout. Only enforced on native targets; in the browser the
/// platform's fetch decides.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, PartialEq, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join the base URL and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Cheap to clone: the underlying reqwest client is reference counted.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpAnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);

        let request = self.client.post(&url).json(body);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.config.timeout);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("POST {} returned {}", url, status);
            return Err(ClientError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("POST {} returned a body that does not parse: {}", url, e);
            ClientError::Decode(e.to_string())
        })
    }
}

#[derive(Serialize)]
struct HazardRequest<'a> {
    location: &'a str,
}

#[async_trait(?Send)]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze_hazards(&self, location: &str) -> Result<HazardSnapshot, ClientError> {
        self.post_json(ANALYZE_HAZARDS_PATH, &HazardRequest { location })
            .await
    }

    async fn analyze_report(&self, request: &ReportRequest) -> Result<ReportAnalysis, ClientError> {
        self.post_json(ANALYZE_REPORT_PATH, request).await
    }
}
