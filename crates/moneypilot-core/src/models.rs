//! Domain models for MoneyPilot
//!
//! Profiles arrive from upstream storage in a loose shape: any numeric field may be
//! missing or null, and `income_sources` has drifted between a list of bare names
//! and a list of `{name, amount}` objects. [`RawProfile`] captures that shape and
//! [`RawProfile::normalize`] is the single place where it becomes a
//! [`FinancialProfile`] the health engine can trust.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A named income source with its monthly amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub name: String,
    pub amount: f64,
}

/// An income source as stored upstream, before sanitation
#[derive(Debug, Clone, PartialEq)]
pub enum RawIncomeSource {
    /// Legacy entry holding only the source name
    Bare(String),
    /// Entry with a name and an amount that may be missing, non-numeric or non-finite
    Detailed { name: String, amount: Option<f64> },
    /// Anything else (numbers, nested lists, objects without a name)
    Unrecognized,
}

impl RawIncomeSource {
    /// Classify an arbitrary JSON value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(name) => Self::Bare(name),
            Value::Object(map) => match map.get("name") {
                Some(Value::String(name)) => Self::Detailed {
                    name: name.clone(),
                    amount: map.get("amount").and_then(json_number),
                },
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    /// Sanitize into an [`IncomeSource`], dropping unrecognized entries
    pub fn normalize(self) -> Option<IncomeSource> {
        match self {
            Self::Bare(name) => Some(IncomeSource { name, amount: 0.0 }),
            Self::Detailed { name, amount } => Some(IncomeSource {
                name,
                amount: money(amount),
            }),
            Self::Unrecognized => None,
        }
    }
}

/// A financial profile as supplied by the data-access layer
///
/// Accepts both the English field names and the legacy wire names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(
        default,
        alias = "ingreso_mensual_estimado",
        deserialize_with = "lenient_number"
    )]
    pub monthly_income: Option<f64>,
    #[serde(
        default,
        alias = "gastos_fijos_mensuales",
        deserialize_with = "lenient_number"
    )]
    pub fixed_monthly_expenses: Option<f64>,
    #[serde(
        default,
        alias = "gastos_variables_mensuales",
        deserialize_with = "lenient_number"
    )]
    pub variable_monthly_expenses: Option<f64>,
    #[serde(default, alias = "ahorro_actual", deserialize_with = "lenient_number")]
    pub current_savings: Option<f64>,
    #[serde(default, alias = "deuda_total", deserialize_with = "lenient_number")]
    pub total_debt: Option<f64>,
    #[serde(
        default,
        alias = "ahorro_planificado_mensual",
        deserialize_with = "lenient_number"
    )]
    pub planned_monthly_savings: Option<f64>,
    #[serde(
        default,
        alias = "monto_meta_ahorro",
        deserialize_with = "lenient_number"
    )]
    pub savings_goal_amount: Option<f64>,
    #[serde(
        default,
        alias = "plazo_meta_ahorro_meses",
        deserialize_with = "lenient_number"
    )]
    pub savings_goal_term_months: Option<f64>,
    #[serde(default, alias = "fuentes_ingreso", deserialize_with = "lenient_sources")]
    pub income_sources: Vec<RawIncomeSource>,
}

impl RawProfile {
    /// Parse a profile from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a profile from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile file, choosing the parser by extension (`.json` or `.toml`)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?),
            _ => Err(Error::InvalidProfile(format!(
                "Unsupported profile format: {} (expected .json or .toml)",
                path.display()
            ))),
        }
    }

    /// Coerce every field into a well-formed [`FinancialProfile`]
    ///
    /// Missing, null, NaN, infinite, negative and sub-cent values all become zero;
    /// amounts above [`MAX_AMOUNT`] are clamped to it.
    pub fn normalize(self) -> FinancialProfile {
        let income_sources: Vec<IncomeSource> = self
            .income_sources
            .into_iter()
            .filter_map(RawIncomeSource::normalize)
            .collect();

        FinancialProfile {
            monthly_income: money(self.monthly_income),
            fixed_monthly_expenses: money(self.fixed_monthly_expenses),
            variable_monthly_expenses: money(self.variable_monthly_expenses),
            current_savings: money(self.current_savings),
            total_debt: money(self.total_debt),
            planned_monthly_savings: money(self.planned_monthly_savings),
            savings_goal_amount: money(self.savings_goal_amount),
            // Float-to-int `as` saturates, so oversized terms cap at u32::MAX
            savings_goal_term_months: money(self.savings_goal_term_months) as u32,
            income_sources,
        }
    }
}

/// A user's self-reported financial inputs, sanitized
///
/// Deserializing goes through [`RawProfile`], so a `FinancialProfile` built from
/// JSON or TOML is always normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProfile")]
pub struct FinancialProfile {
    pub monthly_income: f64,
    pub fixed_monthly_expenses: f64,
    pub variable_monthly_expenses: f64,
    pub current_savings: f64,
    pub total_debt: f64,
    pub planned_monthly_savings: f64,
    pub savings_goal_amount: f64,
    pub savings_goal_term_months: u32,
    pub income_sources: Vec<IncomeSource>,
}

impl From<RawProfile> for FinancialProfile {
    fn from(raw: RawProfile) -> Self {
        raw.normalize()
    }
}

impl FinancialProfile {
    /// Load and normalize a profile file (`.json` or `.toml`)
    pub fn load(path: &Path) -> Result<Self> {
        Ok(RawProfile::from_path(path)?.normalize())
    }

    /// Fixed plus variable monthly expenses
    pub fn total_expenses(&self) -> f64 {
        self.fixed_monthly_expenses + self.variable_monthly_expenses
    }
}

/// Largest amount accepted at the boundary; larger values are clamped to it
///
/// Keeps every sum and ratio the engine derives finite, so the JSON payload never
/// degrades a number into `null`.
pub const MAX_AMOUNT: f64 = 1e15;

/// Smallest non-zero amount (one cent); anything below counts as zero
pub const MIN_AMOUNT: f64 = 0.01;

/// Missing, non-finite, negative and sub-cent amounts become zero
fn money(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= MIN_AMOUNT => v.min(MAX_AMOUNT),
        _ => 0.0,
    }
}

/// Numbers only; booleans, strings and nulls are treated as absent
fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_number))
}

fn lenient_sources<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<RawIncomeSource>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().map(RawIncomeSource::from_value).collect(),
        _ => Vec::new(),
    })
}
