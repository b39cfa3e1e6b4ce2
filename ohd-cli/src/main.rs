//! OHD CLI - Command line tool for the ocean hazard analysis service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ohd-cli",
    version,
    about = "Ocean hazard dashboard toolkit"
)]
struct Cli {
    #[command(flatten)]
    service: ohd_cmd::ServiceArgs,

    #[command(subcommand)]
    command: ohd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ohd_cmd::run(cli.command, cli.service).await
}
