//! Configuration loading
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a three-layer resolution:
//! 1. Explicit path (`--config` flag or `MONEYPILOT_CONFIG`)
//! 2. Override in the config dir (~/.config/moneypilot/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/moneypilot.toml");

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "MONEYPILOT_CONFIG";

/// Longest verification code we will generate
const MAX_CODE_LENGTH: usize = 32;

/// Longest verification code lifetime (one week)
const MAX_TTL_MINUTES: i64 = 7 * 24 * 60;

/// How amounts are shown to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySettings {
    /// ISO currency code
    pub currency: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: "COP".to_string(),
        }
    }
}

/// Verification code policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationSettings {
    pub code_length: usize,
    pub ttl_minutes: i64,
    pub max_attempts: u32,
}

impl VerificationSettings {
    /// Lifetime of an issued code
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.ttl_minutes)
    }
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            code_length: 6,
            ttl_minutes: 10,
            max_attempts: 5,
        }
    }
}

/// Resolved application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    pub display: DisplaySettings,
    pub verification: VerificationSettings,
}

impl Settings {
    /// Load settings using the standard resolution order
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let path = explicit
            .map(Path::to_path_buf)
            .or(env_path)
            .or_else(|| default_config_path().filter(|p| p.exists()));

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("Using embedded default configuration");
                parse_config(DEFAULT_CONFIG)
            }
        }
    }

    /// Load settings from a specific file; the file must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loading configuration");
        parse_config(&content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("moneypilot").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    verification: Option<RawVerification>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVerification {
    code_length: Option<usize>,
    ttl_minutes: Option<i64>,
    max_attempts: Option<u32>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<Settings> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut settings = Settings::default();

    if let Some(display) = raw.display {
        if let Some(currency) = display.currency {
            let currency = currency.trim().to_uppercase();
            if currency.is_empty() {
                return Err(Error::Config("display.currency must not be empty".into()));
            }
            settings.display.currency = currency;
        }
    }

    if let Some(verification) = raw.verification {
        if let Some(length) = verification.code_length {
            if length == 0 || length > MAX_CODE_LENGTH {
                return Err(Error::Config(format!(
                    "verification.code_length must be between 1 and {}, got {}",
                    MAX_CODE_LENGTH, length
                )));
            }
            settings.verification.code_length = length;
        }
        if let Some(ttl) = verification.ttl_minutes {
            if ttl <= 0 || ttl > MAX_TTL_MINUTES {
                return Err(Error::Config(format!(
                    "verification.ttl_minutes must be between 1 and {}, got {}",
                    MAX_TTL_MINUTES, ttl
                )));
            }
            settings.verification.ttl_minutes = ttl;
        }
        if let Some(attempts) = verification.max_attempts {
            if attempts == 0 {
                return Err(Error::Config(
                    "verification.max_attempts must be at least 1".into(),
                ));
            }
            settings.verification.max_attempts = attempts;
        }
    }

    Ok(settings)
}
