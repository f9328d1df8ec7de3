//! Summary Builder - composes every engine step into one result

use chrono::{DateTime, Utc};

use crate::models::FinancialProfile;

use super::metrics::analyze;
use super::projection::project;
use super::recommendations::recommend;
use super::scoring::score;
use super::types::{HealthScore, HealthSummary, RecommendationSet};

/// Build the full health summary, stamped with the current time
pub fn summarize(profile: &FinancialProfile) -> HealthSummary {
    summarize_at(profile, Utc::now())
}

/// Build the full health summary with an explicit `calculated_at`
///
/// Identical inputs always produce identical output.
pub fn summarize_at(profile: &FinancialProfile, calculated_at: DateTime<Utc>) -> HealthSummary {
    let metrics = analyze(profile);
    let health_score = HealthScore::new(score(&metrics), calculated_at);
    let projection = project(profile);
    let recommendations = recommend(&metrics);

    tracing::debug!(
        score = health_score.score,
        status = health_score.status.as_str(),
        months_to_goal = ?projection.months_to_goal,
        recommendations = recommendations.len(),
        "Financial health summary computed"
    );

    HealthSummary {
        score: health_score,
        metrics,
        projection,
        recommendations: RecommendationSet { recommendations },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::types::HealthStatus;
    use chrono::TimeZone;

    #[test]
    fn test_summary_composes_all_steps() {
        let profile = FinancialProfile {
            monthly_income: 5_000_000.0,
            fixed_monthly_expenses: 1_500_000.0,
            variable_monthly_expenses: 1_000_000.0,
            current_savings: 2_000_000.0,
            total_debt: 1_000_000.0,
            planned_monthly_savings: 500_000.0,
            savings_goal_amount: 10_000_000.0,
            ..Default::default()
        };
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

        let summary = summarize_at(&profile, at);

        assert_eq!(summary.score.score, 78);
        assert_eq!(summary.score.status, HealthStatus::Good);
        assert_eq!(summary.score.calculated_at, at);
        assert_eq!(summary.metrics, analyze(&profile));
        assert_eq!(summary.projection, project(&profile));
        assert_eq!(
            summary.recommendations.recommendations,
            recommend(&summary.metrics)
        );
    }

    #[test]
    fn test_wire_shape() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let summary = summarize_at(&FinancialProfile::default(), at);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["score"]["score"], 50);
        assert_eq!(json["score"]["status"], "Fair");
        assert!(json["score"]["calculated_at"].is_string());
        assert_eq!(json["metrics"]["ingreso_mensual"], 0.0);
        assert_eq!(json["metrics"]["meses_emergencia"], 0.0);
        assert!(json["metrics"]["fuentes_ingreso"].is_array());
        assert_eq!(json["projection"]["proyeccion"].as_array().unwrap().len(), 25);
        assert_eq!(json["projection"]["proyeccion"][3]["mes_index"], 3);
        assert!(json["projection"]["proyeccion"][3]["ahorro_acumulado"].is_number());
        assert!(json["projection"]["proyeccion"][3]["meta"].is_number());
        assert!(json["projection"]["meses_para_meta"].is_null());
        assert!(json["recommendations"]["recommendations"].is_array());
    }
}
