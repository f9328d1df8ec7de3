//! Configuration display command

use std::path::Path;

use anyhow::{Context, Result};
use moneypilot_core::config::{default_config_path, CONFIG_ENV};
use moneypilot_core::Settings;

pub fn cmd_config(settings: &Settings, explicit: Option<&Path>) -> Result<()> {
    let env_path = std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty());
    let override_path = default_config_path();

    println!();
    println!("⚙️  MoneyPilot Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    for line in config_sources(explicit, env_path.as_deref(), override_path.as_deref()) {
        println!("   {}", line);
    }
    println!();

    print!("{}", render_config(settings)?);
    Ok(())
}

/// Config sources in resolution order, the one in effect marked with ✓
pub fn config_sources(
    explicit: Option<&Path>,
    env_path: Option<&str>,
    override_path: Option<&Path>,
) -> Vec<String> {
    let override_exists = override_path.is_some_and(|p| p.exists());
    let active = if explicit.is_some() {
        0
    } else if env_path.is_some() {
        1
    } else if override_exists {
        2
    } else {
        3
    };
    let mark = |i: usize| if i == active { "✓" } else { " " };

    let mut lines = Vec::new();
    if let Some(path) = explicit {
        lines.push(format!("{} --config: {}", mark(0), path.display()));
    }
    lines.push(format!(
        "{} {}: {}",
        mark(1),
        CONFIG_ENV,
        env_path.unwrap_or("(not set)")
    ));
    if let Some(path) = override_path {
        let state = if override_exists { "found" } else { "not found" };
        lines.push(format!("{} Override: {} ({})", mark(2), path.display(), state));
    }
    lines.push(format!("{} Embedded defaults", mark(3)));
    lines
}

/// Effective settings as TOML
pub fn render_config(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize configuration")
}
