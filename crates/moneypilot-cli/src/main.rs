//! MoneyPilot CLI - Financial health reports from a profile file
//!
//! Usage:
//!   moneypilot summary --profile me.json        Full health report
//!   moneypilot score --profile me.json          Score with status label
//!   moneypilot projection --profile me.toml     24-month savings projection
//!   moneypilot config                           Show effective configuration

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use moneypilot_core::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
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

    let settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Summary { profile, json } => commands::cmd_summary(&profile, &settings, json),
        Commands::Score {
            profile,
            json,
            breakdown,
        } => commands::cmd_score(&profile, json, breakdown),
        Commands::Metrics { profile, json } => commands::cmd_metrics(&profile, &settings, json),
        Commands::Projection { profile, json } => {
            commands::cmd_projection(&profile, &settings, json)
        }
        Commands::Recommendations { profile, json } => {
            commands::cmd_recommendations(&profile, json)
        }
        Commands::Config => commands::cmd_config(&settings, cli.config.as_deref()),
    }
}
