//! WattWise CLI - Household energy tracker
//!
//! Usage:
//!   wattwise serve --port 3000                       Start the dashboard server
//!   wattwise catalog                                 Show appliance draws and base loads
//!   wattwise estimate --size 2BHK --appliance AC     Estimate one day's consumption
//!   wattwise report --input energy_consumption.csv   Analyze an exported history

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&host, port, static_dir.as_deref()).await,
        Commands::Catalog => commands::cmd_catalog(),
        Commands::Estimate {
            size,
            appliances,
            hours,
            json,
        } => commands::cmd_estimate(size, &appliances, &hours, json),
        Commands::Report { input, json } => commands::cmd_report(&input, json),
    }
}
