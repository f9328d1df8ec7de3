//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `health` - Health engine reports (summary, score, metrics, projection, recommendations)
//! - `config` - Effective configuration display

pub mod config;
pub mod health;

// Re-export command functions for main.rs
pub use config::*;
pub use health::*;

use std::path::Path;

use anyhow::{Context, Result};
use moneypilot_core::FinancialProfile;
use serde::Serialize;
use tracing::debug;

/// Load and normalize a profile file
pub fn load_profile(path: &Path) -> Result<FinancialProfile> {
    debug!(path = %path.display(), "Loading profile");
    FinancialProfile::load(path)
        .with_context(|| format!("Failed to load profile {}", path.display()))
}

/// Pretty-print a payload as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

/// Format an amount with the currency code and thousands separators
pub fn format_money(amount: f64, currency: &str) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{}{} {}.{}", sign, currency, grouped, cents)
}
