//! Core types for the Financial Health Engine
//!
//! Output types serialize to the field names the existing frontend expects, which
//! is why several Rust fields carry a `serde(rename)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::IncomeSource;

/// Ratios and totals derived from a financial profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    #[serde(rename = "ingreso_mensual")]
    pub monthly_income: f64,
    #[serde(rename = "gastos_fijos_mensuales")]
    pub fixed_monthly_expenses: f64,
    #[serde(rename = "gastos_variables_mensuales")]
    pub variable_monthly_expenses: f64,
    #[serde(rename = "gastos_totales")]
    pub total_expenses: f64,
    #[serde(rename = "ahorro_actual")]
    pub current_savings: f64,
    #[serde(rename = "ahorro_planificado_mensual")]
    pub planned_monthly_savings: f64,
    #[serde(rename = "deuda_total")]
    pub total_debt: f64,
    /// Planned monthly savings as a percentage of income
    #[serde(rename = "porcentaje_ahorro")]
    pub savings_rate_pct: f64,
    /// Total expenses as a percentage of income
    #[serde(rename = "porcentaje_gastos")]
    pub expense_rate_pct: f64,
    /// Total debt in months of income
    #[serde(rename = "ratio_deuda")]
    pub debt_ratio: f64,
    /// Months of total expenses covered by current savings
    #[serde(rename = "meses_emergencia")]
    pub emergency_months: f64,
    #[serde(rename = "disponible_mensual")]
    pub disposable_income: f64,
    #[serde(rename = "fuentes_ingreso")]
    pub income_sources: Vec<IncomeSource>,
}

/// Display label for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl HealthStatus {
    /// Map a 0-100 score to its label
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsAttention,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excellent" => Ok(Self::Excellent),
            "Good" => Ok(Self::Good),
            "Fair" => Ok(Self::Fair),
            "Needs Attention" => Ok(Self::NeedsAttention),
            _ => Err(format!("Unknown health status: {}", s)),
        }
    }
}

/// Per-factor contributions to the health score, before rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Savings rate factor (0-30)
    pub savings: f64,
    /// Expense rate factor (5-30)
    pub expenses: f64,
    /// Debt ratio factor (5-20)
    pub debt: f64,
    /// Emergency fund factor (0-20)
    pub emergency_fund: f64,
}

impl ScoreBreakdown {
    /// Unrounded sum of all factors
    pub fn total(&self) -> f64 {
        self.savings + self.expenses + self.debt + self.emergency_fund
    }

    /// Final integer score, rounded and clamped to 0-100
    pub fn score(&self) -> u8 {
        self.total().round().clamp(0.0, 100.0) as u8
    }
}

/// A financial health score with its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: u8,
    pub status: HealthStatus,
    pub calculated_at: DateTime<Utc>,
}

impl HealthScore {
    pub fn new(score: u8, calculated_at: DateTime<Utc>) -> Self {
        Self {
            score,
            status: HealthStatus::from_score(score),
            calculated_at,
        }
    }
}

/// One month of the savings projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    #[serde(rename = "mes_index")]
    pub month_index: u32,
    #[serde(rename = "ahorro_acumulado")]
    pub accumulated_savings: f64,
    #[serde(rename = "meta")]
    pub goal_amount: f64,
}

/// Linear savings trajectory toward the goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    #[serde(rename = "proyeccion")]
    pub points: Vec<ProjectionPoint>,
    /// `None` when no monthly saving is planned (goal unreachable)
    #[serde(rename = "meses_para_meta")]
    pub months_to_goal: Option<u64>,
}

/// Area a recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Savings,
    Debt,
    EmergencyFund,
    Expenses,
    General,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Debt => "debt",
            Self::EmergencyFund => "emergency_fund",
            Self::Expenses => "expenses",
            Self::General => "general",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "savings" => Ok(Self::Savings),
            "debt" => Ok(Self::Debt),
            "emergency_fund" => Ok(Self::EmergencyFund),
            "expenses" => Ok(Self::Expenses),
            "general" => Ok(Self::General),
            _ => Err(format!("Unknown recommendation category: {}", s)),
        }
    }
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
}

impl RecommendationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Sort rank (lower = shown first)
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// A single piece of advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub message: String,
    pub priority: RecommendationPriority,
}

impl Recommendation {
    pub fn new(
        category: RecommendationCategory,
        priority: RecommendationPriority,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            priority,
        }
    }
}

/// Wrapper matching the `{"recommendations": [...]}` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
}

/// Everything the engine produces for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub score: HealthScore,
    pub metrics: HealthMetrics,
    pub projection: SavingsProjection,
    pub recommendations: RecommendationSet,
}
