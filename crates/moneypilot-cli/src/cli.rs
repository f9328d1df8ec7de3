//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MoneyPilot - Know where your finances stand
#[derive(Parser)]
#[command(name = "moneypilot")]
#[command(about = "Personal financial health reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to MONEYPILOT_CONFIG, then ~/.config/moneypilot/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full health report: score, metrics, projection and recommendations
    Summary {
        /// Profile file (.json or .toml)
        #[arg(short, long)]
        profile: PathBuf,

        /// Print the JSON payload instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Health score and status label
    Score {
        /// Profile file (.json or .toml)
        #[arg(short, long)]
        profile: PathBuf,

        /// Print the JSON payload instead of a report
        #[arg(long)]
        json: bool,

        /// Show how each factor contributed
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Derived ratios (savings rate, expense rate, debt, emergency fund)
    Metrics {
        /// Profile file (.json or .toml)
        #[arg(short, long)]
        profile: PathBuf,

        /// Print the JSON payload instead of a report
        #[arg(long)]
        json: bool,
    },

    /// 24-month savings projection toward the goal
    Projection {
        /// Profile file (.json or .toml)
        #[arg(short, long)]
        profile: PathBuf,

        /// Print the JSON payload instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Prioritized recommendations
    Recommendations {
        /// Profile file (.json or .toml)
        #[arg(short, long)]
        profile: PathBuf,

        /// Print the JSON payload instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}
