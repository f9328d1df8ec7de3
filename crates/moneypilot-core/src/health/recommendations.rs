//! Recommendation Generator
//!
//! Each check runs independently. Messages embed the triggering metric with one
//! decimal place; downstream consumers match on that text.

use super::types::{
    HealthMetrics, Recommendation, RecommendationCategory, RecommendationPriority,
};

/// Savings rate (percent of income) below which saving more is advised
pub const TARGET_SAVINGS_RATE_PCT: f64 = 20.0;
/// Debt above this many months of income is flagged
pub const MAX_DEBT_MONTHS: f64 = 6.0;
/// Emergency fund below this many months of expenses is flagged
pub const MIN_EMERGENCY_MONTHS: f64 = 3.0;
/// Expenses above this percent of income are flagged
pub const MAX_EXPENSE_RATE_PCT: f64 = 80.0;

/// Generate recommendations, most urgent first
///
/// Never empty: a healthy profile gets a single congratulatory message.
pub fn recommend(metrics: &HealthMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.savings_rate_pct < TARGET_SAVINGS_RATE_PCT {
        recs.push(Recommendation::new(
            RecommendationCategory::Savings,
            RecommendationPriority::Medium,
            format!(
                "Increase your savings rate ({:.1}%). Aim for at least 20%.",
                metrics.savings_rate_pct
            ),
        ));
    }

    if metrics.debt_ratio > MAX_DEBT_MONTHS {
        recs.push(Recommendation::new(
            RecommendationCategory::Debt,
            RecommendationPriority::High,
            format!(
                "Your debt equals {:.1} months of income. Consider paying it down.",
                metrics.debt_ratio
            ),
        ));
    }

    if metrics.emergency_months < MIN_EMERGENCY_MONTHS {
        recs.push(Recommendation::new(
            RecommendationCategory::EmergencyFund,
            RecommendationPriority::Medium,
            format!(
                "Your emergency fund covers {:.1} months of expenses. Ideal: 3-6 months.",
                metrics.emergency_months
            ),
        ));
    }

    if metrics.expense_rate_pct > MAX_EXPENSE_RATE_PCT {
        recs.push(Recommendation::new(
            RecommendationCategory::Expenses,
            RecommendationPriority::High,
            format!(
                "You are spending {:.1}% of your income. Cut back on variable expenses.",
                metrics.expense_rate_pct
            ),
        ));
    }

    if recs.is_empty() {
        recs.push(Recommendation::new(
            RecommendationCategory::General,
            RecommendationPriority::Low,
            "Excellent financial balance. Keep your habits and consider diversifying your investments.",
        ));
    }

    // Stable: ties keep check order
    recs.sort_by_key(|r| r.priority.rank());

    recs
}
