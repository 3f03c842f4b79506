//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wattwise_core::DwellingSize;

/// WattWise - Track and trim household electricity use
#[derive(Parser)]
#[command(name = "wattwise")]
#[command(about = "Household energy consumption tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard web server
    ///
    /// The session lives in memory; export your history before stopping
    /// the server.
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory with the dashboard UI build
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show appliance draws and base energy per dwelling size
    Catalog,

    /// Estimate one day's consumption without recording it
    Estimate {
        /// Dwelling size (1BHK, 2BHK, 3BHK)
        #[arg(short, long)]
        size: DwellingSize,

        /// Appliance used today (repeatable)
        #[arg(short, long = "appliance")]
        appliances: Vec<String>,

        /// Usage hours for an adjustable appliance, e.g. AC=6 (repeatable)
        #[arg(long, value_parser = parse_usage_hours)]
        hours: Vec<(String, f64)>,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze an exported CSV history (read-only)
    Report {
        /// CSV file produced by the dashboard export
        #[arg(short, long)]
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a `NAME=HOURS` pair
pub fn parse_usage_hours(s: &str) -> Result<(String, f64), String> {
    let (name, hours) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=HOURS, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing appliance name in '{}'", s));
    }
    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| format!("invalid hours '{}' for {}", hours.trim(), name))?;
    if !hours.is_finite() {
        return Err(format!("invalid hours '{}' for {}", hours, name));
    }
    Ok((name.to_string(), hours))
}
