//! Command implementations for the OHD CLI.
//!
//! Each subcommand drives the same view-state controller the dashboard uses,
//! against the same analysis service endpoints.

use clap::{Args, Subcommand};
use ohd_core::client::{ClientConfig, HttpAnalysisClient, DEFAULT_BASE_URL};
use ohd_core::location::BeachLocation;
use std::time::Duration;

pub mod hazards;
pub mod report;

/// Where to reach the analysis service.
#[derive(Args, Debug)]
pub struct ServiceArgs {
    /// Base URL of the hazard analysis service
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl ServiceArgs {
    pub fn client(&self) -> HttpAnalysisClient {
        HttpAnalysisClient::new(
            ClientConfig::new(self.base_url.as_str())
                .with_timeout(Duration::from_secs(self.timeout_secs)),
        )
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the beaches the dashboard offers
    Locations,

    /// Fetch the current hazard snapshot for a beach
    Hazards {
        /// Beach name or short id (e.g. "malibu")
        #[arg(short = 'l', long)]
        location: String,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a free-text hazard report
    Report {
        /// Where the hazard was observed
        #[arg(short = 'l', long)]
        location: String,

        /// What was observed
        #[arg(short = 't', long)]
        text: String,
    },
}

pub async fn run(command: Command, service: ServiceArgs) -> anyhow::Result<()> {
    match command {
        Command::Locations => {
            print!("{}", render_locations());
            Ok(())
        }
        Command::Hazards { location, json } => {
            let location = resolve_location(&location)?;
            hazards::run_hazards(&service.client(), location, json).await
        }
        Command::Report { location, text } => {
            report::run_report(&service.client(), &location, &text).await
        }
    }
}

/// Accept either the full beach name or its short id.
pub fn resolve_location(input: &str) -> anyhow::Result<BeachLocation> {
    BeachLocation::from_name(input.trim())
        .or_else(|| BeachLocation::from_slug(input))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown beach '{}'. Run `ohd-cli locations` for the list.",
                input
            )
        })
}

fn render_locations() -> String {
    BeachLocation::ALL
        .iter()
        .map(|b| format!("{:<14} {}\n", b.slug(), b.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_location() {
        assert_eq!(
            resolve_location("Venice Beach, California").unwrap(),
            BeachLocation::Venice
        );
        assert_eq!(resolve_location("huntington").unwrap(), BeachLocation::Huntington);
        assert!(resolve_location("Redondo").is_err());
    }

    #[test]
    fn test_render_locations_lists_all() {
        let out = render_locations();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("santa-monica"));
        assert!(out.contains("Huntington Beach, California"));
    }
}
