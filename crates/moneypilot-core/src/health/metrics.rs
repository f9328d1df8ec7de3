//! Metrics Analyzer
//!
//! Derives the normalized ratios every other step of the engine reads.

use crate::models::FinancialProfile;

use super::types::HealthMetrics;

/// Derive health metrics from a profile
///
/// Every ratio whose divisor is zero comes back as zero.
pub fn analyze(profile: &FinancialProfile) -> HealthMetrics {
    let income = profile.monthly_income;
    let total_expenses = profile.total_expenses();

    let (savings_rate_pct, expense_rate_pct, debt_ratio) = if income > 0.0 {
        (
            profile.planned_monthly_savings / income * 100.0,
            total_expenses / income * 100.0,
            profile.total_debt / income,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let emergency_months = if total_expenses > 0.0 {
        profile.current_savings / total_expenses
    } else {
        0.0
    };

    HealthMetrics {
        monthly_income: income,
        fixed_monthly_expenses: profile.fixed_monthly_expenses,
        variable_monthly_expenses: profile.variable_monthly_expenses,
        total_expenses,
        current_savings: profile.current_savings,
        planned_monthly_savings: profile.planned_monthly_savings,
        total_debt: profile.total_debt,
        savings_rate_pct,
        expense_rate_pct,
        debt_ratio,
        emergency_months,
        disposable_income: income - total_expenses,
        income_sources: profile.income_sources.clone(),
    }
}
