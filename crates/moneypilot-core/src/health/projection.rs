//! Savings Projector

use crate::models::FinancialProfile;

use super::types::{ProjectionPoint, SavingsProjection};

/// Number of months projected after the current one
pub const PROJECTION_MONTHS: u32 = 24;

/// Project savings linearly over the next 24 months
///
/// No compounding and no expense deduction: month `i` holds
/// `current_savings + planned_monthly_savings * i`.
pub fn project(profile: &FinancialProfile) -> SavingsProjection {
    let points = (0..=PROJECTION_MONTHS)
        .map(|month_index| ProjectionPoint {
            month_index,
            accumulated_savings: profile.current_savings
                + profile.planned_monthly_savings * f64::from(month_index),
            goal_amount: profile.savings_goal_amount,
        })
        .collect();

    SavingsProjection {
        points,
        months_to_goal: months_to_goal(profile),
    }
}

/// Months of planned saving needed to reach the goal
///
/// `None` when nothing is saved monthly; zero once the goal is already met.
/// Normalized profiles keep the count near 1e17 at most. A hand-built profile
/// whose quotient overflows saturates at `u64::MAX`.
pub fn months_to_goal(profile: &FinancialProfile) -> Option<u64> {
    if profile.planned_monthly_savings <= 0.0 {
        return None;
    }

    let remaining = profile.savings_goal_amount - profile.current_savings;
    let months = (remaining / profile.planned_monthly_savings).ceil().max(0.0);
    // Float-to-int `as` saturates, and +inf maps to u64::MAX
    Some(months as u64)
}
