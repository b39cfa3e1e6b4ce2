//! Core types and request plumbing for the ocean hazard dashboard.
//!
//! This crate provides:
//! - `hazard` / `snapshot` / `report`: the JSON shapes exchanged with the analysis service
//! - `coordinates`: "lat,lng" parsing and map marker selection
//! - `location`: the fixed beach catalog offered by the selector
//! - `view_state`: the synchronous request/response state machine
//! - `controller`: async operations tying the state machine to an [`service::AnalysisService`]
//! - `client` (feature `api`): the reqwest implementation of that service

pub mod controller;
pub mod coordinates;
pub mod error;
pub mod hazard;
pub mod location;
pub mod report;
pub mod service;
pub mod snapshot;
pub mod view_state;

#[cfg(feature = "api")]
pub mod client;

#[cfg(test)]
mod tests {
    // Fails to build if the test target loses the `api` feature
    #[test]
    fn test_client_is_built_for_tests() {
        let config = crate::client::ClientConfig::default();
        assert_eq!(config.base_url, crate::client::DEFAULT_BASE_URL);
    }
}
