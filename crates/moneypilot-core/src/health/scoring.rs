//! Score Calculator
//!
//! Four independent factors, each capped at its weight:
//!
//! | Factor         | Weight | Full marks        |
//! |----------------|--------|-------------------|
//! | Savings rate   | 30     | >= 20% of income  |
//! | Expense rate   | 30     | <= 70% of income  |
//! | Debt ratio     | 20     | <= 3 months       |
//! | Emergency fund | 20     | >= 6 months       |

use super::types::{HealthMetrics, ScoreBreakdown};

pub const SAVINGS_WEIGHT: f64 = 30.0;
pub const EXPENSES_WEIGHT: f64 = 30.0;
pub const DEBT_WEIGHT: f64 = 20.0;
pub const EMERGENCY_WEIGHT: f64 = 20.0;

/// Compute the 0-100 health score
pub fn score(metrics: &HealthMetrics) -> u8 {
    breakdown(metrics).score()
}

/// Compute each factor's contribution
pub fn breakdown(metrics: &HealthMetrics) -> ScoreBreakdown {
    ScoreBreakdown {
        savings: savings_points(metrics.savings_rate_pct),
        expenses: expense_points(metrics.expense_rate_pct),
        debt: debt_points(metrics.debt_ratio),
        emergency_fund: emergency_points(metrics.emergency_months),
    }
}

fn savings_points(rate_pct: f64) -> f64 {
    if rate_pct >= 20.0 {
        SAVINGS_WEIGHT
    } else if rate_pct >= 15.0 {
        25.0
    } else if rate_pct >= 10.0 {
        20.0
    } else {
        // Linear up to the 10% band
        (rate_pct / 10.0 * 20.0).max(0.0)
    }
}

fn expense_points(rate_pct: f64) -> f64 {
    if rate_pct <= 70.0 {
        EXPENSES_WEIGHT
    } else if rate_pct <= 80.0 {
        20.0
    } else if rate_pct <= 90.0 {
        10.0
    } else {
        5.0
    }
}

fn debt_points(months_of_income: f64) -> f64 {
    if months_of_income <= 3.0 {
        DEBT_WEIGHT
    } else if months_of_income <= 6.0 {
        15.0
    } else if months_of_income <= 12.0 {
        10.0
    } else {
        5.0
    }
}

fn emergency_points(months: f64) -> f64 {
    if months >= 6.0 {
        EMERGENCY_WEIGHT
    } else if months >= 3.0 {
        15.0
    } else if months >= 1.0 {
        10.0
    } else {
        (months * 10.0).max(0.0)
    }
}
