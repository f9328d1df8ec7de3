//! Integration tests for moneypilot-core
//!
//! These tests exercise the full profile file → normalize → summarize workflow.

use std::io::Write;

use chrono::{TimeZone, Utc};
use moneypilot_core::{
    health::{breakdown, months_to_goal},
    summarize, summarize_at, Error, FinancialProfile, HealthStatus, RawProfile,
    RecommendationCategory, RecommendationPriority, Settings, VerificationCodeStore,
    VerificationError,
};

/// Reference profile as the legacy API stored it (Spanish field names)
fn legacy_profile_json() -> &'static str {
    r#"{
        "ingreso_mensual_estimado": 5000000,
        "gastos_fijos_mensuales": 1500000,
        "gastos_variables_mensuales": 1000000,
        "ahorro_actual": 2000000,
        "deuda_total": 1000000,
        "ahorro_planificado_mensual": 500000,
        "monto_meta_ahorro": 10000000,
        "plazo_meta_ahorro_meses": 12,
        "fuentes_ingreso": [
            {"name": "Salary", "amount": 4500000},
            "Freelance",
            {"name": "Rent", "amount": "n/a"},
            42
        ]
    }"#
}

fn reference_profile() -> FinancialProfile {
    serde_json::from_str(legacy_profile_json()).expect("Failed to parse reference profile")
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

#[test]
fn test_reference_scenario() {
    let profile = reference_profile();
    let summary = summarize(&profile);

    let metrics = &summary.metrics;
    assert_eq!(metrics.total_expenses, 2_500_000.0);
    assert!((metrics.savings_rate_pct - 10.0).abs() < 1e-9);
    assert!((metrics.expense_rate_pct - 50.0).abs() < 1e-9);
    assert!((metrics.debt_ratio - 0.2).abs() < 1e-9);
    assert!((metrics.emergency_months - 0.8).abs() < 1e-9);
    assert_eq!(metrics.disposable_income, 2_500_000.0);

    let parts = breakdown(metrics);
    assert_eq!(parts.savings, 20.0);
    assert_eq!(parts.expenses, 30.0);
    assert_eq!(parts.debt, 20.0);
    assert!((parts.emergency_fund - 8.0).abs() < 1e-9);

    assert_eq!(summary.score.score, 78);
    assert_eq!(summary.score.status, HealthStatus::Good);

    assert_eq!(summary.projection.points.len(), 25);
    assert_eq!(summary.projection.months_to_goal, Some(16));

    // Savings rate 10% and emergency fund 0.8 months both trip a check
    let categories: Vec<_> = summary
        .recommendations
        .recommendations
        .iter()
        .map(|r| r.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            RecommendationCategory::Savings,
            RecommendationCategory::EmergencyFund
        ]
    );
}

#[test]
fn test_income_sources_sanitized_on_load() {
    let profile = reference_profile();

    assert_eq!(profile.income_sources.len(), 3);
    assert_eq!(profile.income_sources[0].name, "Salary");
    assert_eq!(profile.income_sources[0].amount, 4_500_000.0);
    assert_eq!(profile.income_sources[1].name, "Freelance");
    assert_eq!(profile.income_sources[1].amount, 0.0);
    assert_eq!(profile.income_sources[2].name, "Rent");
    assert_eq!(profile.income_sources[2].amount, 0.0);

    let summary = summarize(&profile);
    assert_eq!(summary.metrics.income_sources, profile.income_sources);
}

#[test]
fn test_zero_income_scenario() {
    let profile = FinancialProfile::default();
    let summary = summarize(&profile);

    assert_eq!(summary.metrics.savings_rate_pct, 0.0);
    assert_eq!(summary.metrics.expense_rate_pct, 0.0);
    assert_eq!(summary.metrics.debt_ratio, 0.0);
    assert_eq!(summary.metrics.emergency_months, 0.0);
    assert_eq!(breakdown(&summary.metrics).emergency_fund, 0.0);
    assert_eq!(summary.projection.months_to_goal, None);
}

#[test]
fn test_no_planned_savings_has_no_goal_date() {
    let profile = FinancialProfile {
        savings_goal_amount: 1_000_000.0,
        ..Default::default()
    };

    assert_eq!(months_to_goal(&profile), None);
    let summary = summarize(&profile);
    assert!(summary
        .projection
        .points
        .iter()
        .all(|p| p.accumulated_savings == 0.0 && p.goal_amount == 1_000_000.0));
}

#[test]
fn test_stressed_profile() {
    let profile = FinancialProfile {
        monthly_income: 1_000_000.0,
        fixed_monthly_expenses: 700_000.0,
        variable_monthly_expenses: 250_000.0,
        total_debt: 15_000_000.0,
        ..Default::default()
    };
    let summary = summarize(&profile);

    // 0 + 5 + 5 + 0
    assert_eq!(summary.score.score, 10);
    assert_eq!(summary.score.status, HealthStatus::NeedsAttention);

    let recs = &summary.recommendations.recommendations;
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0].category, RecommendationCategory::Debt);
    assert_eq!(recs[1].category, RecommendationCategory::Expenses);
    assert!(recs[..2]
        .iter()
        .all(|r| r.priority == RecommendationPriority::High));
    assert!(recs[2..]
        .iter()
        .all(|r| r.priority == RecommendationPriority::Medium));
    assert!(recs[0].message.contains("15.0 months"));
    assert!(recs[1].message.contains("95.0%"));
}

#[test]
fn test_healthy_profile_gets_congratulated() {
    let profile = FinancialProfile {
        monthly_income: 10_000_000.0,
        fixed_monthly_expenses: 3_000_000.0,
        variable_monthly_expenses: 2_000_000.0,
        current_savings: 40_000_000.0,
        planned_monthly_savings: 2_500_000.0,
        savings_goal_amount: 30_000_000.0,
        ..Default::default()
    };
    let summary = summarize(&profile);

    assert_eq!(summary.score.score, 100);
    assert_eq!(summary.score.status, HealthStatus::Excellent);
    assert_eq!(summary.projection.months_to_goal, Some(0));

    let recs = &summary.recommendations.recommendations;
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].category, RecommendationCategory::General);
    assert_eq!(recs[0].priority, RecommendationPriority::Low);
}

// =============================================================================
// Determinism and Wire Shape
// =============================================================================

#[test]
fn test_summarize_is_idempotent() {
    let profile = reference_profile();
    let mut first = summarize(&profile);
    let second = summarize(&profile);

    first.score.calculated_at = second.score.calculated_at;
    assert_eq!(first, second);

    let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    assert_eq!(summarize_at(&profile, at), summarize_at(&profile, at));
}

#[test]
fn test_summary_wire_shape() {
    let at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    let summary = summarize_at(&reference_profile(), at);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["score"]["score"], 78);
    assert_eq!(json["score"]["status"], "Good");
    assert!(json["score"]["calculated_at"]
        .as_str()
        .unwrap()
        .starts_with("2026-01-15T12:00:00"));

    for key in [
        "ingreso_mensual",
        "gastos_fijos_mensuales",
        "gastos_variables_mensuales",
        "gastos_totales",
        "ahorro_actual",
        "ahorro_planificado_mensual",
        "deuda_total",
        "porcentaje_ahorro",
        "porcentaje_gastos",
        "ratio_deuda",
        "meses_emergencia",
        "disponible_mensual",
        "fuentes_ingreso",
    ] {
        assert!(json["metrics"].get(key).is_some(), "missing metrics.{}", key);
    }

    let points = json["projection"]["proyeccion"].as_array().unwrap();
    assert_eq!(points.len(), 25);
    assert_eq!(points[24]["mes_index"], 24);
    assert_eq!(points[24]["ahorro_acumulado"], 14_000_000.0);
    assert_eq!(points[24]["meta"], 10_000_000.0);
    assert_eq!(json["projection"]["meses_para_meta"], 16);

    let recs = json["recommendations"]["recommendations"].as_array().unwrap();
    assert_eq!(recs[0]["category"], "savings");
    assert_eq!(recs[0]["priority"], "medium");
    assert_eq!(recs[1]["category"], "emergency_fund");
}

// =============================================================================
// Profile Files
// =============================================================================

#[test]
fn test_json_and_toml_profiles_agree() {
    let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(json, "{}", legacy_profile_json()).unwrap();

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        toml,
        r#"
monthly_income = 5000000
fixed_monthly_expenses = 1500000
variable_monthly_expenses = 1000000
current_savings = 2000000
total_debt = 1000000
planned_monthly_savings = 500000
savings_goal_amount = 10000000
savings_goal_term_months = 12
income_sources = [
    {{ name = "Salary", amount = 4500000 }},
    "Freelance",
    {{ name = "Rent", amount = "n/a" }},
]
"#
    )
    .unwrap();

    let from_json = FinancialProfile::load(json.path()).unwrap();
    let from_toml = FinancialProfile::load(toml.path()).unwrap();
    assert_eq!(from_json, from_toml);
}

#[test]
fn test_unsupported_profile_extension() {
    let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    let result = RawProfile::from_path(file.path());
    assert!(matches!(result, Err(Error::InvalidProfile(_))));
}

#[test]
fn test_malformed_json_profile() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(
        FinancialProfile::load(file.path()),
        Err(Error::Json(_))
    ));
}

// =============================================================================
// Verification Store with Loaded Settings
// =============================================================================

#[test]
fn test_verification_store_from_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[verification]\ncode_length = 8\nmax_attempts = 1").unwrap();

    let settings = Settings::load(Some(config.path())).unwrap();
    let store = VerificationCodeStore::new(&settings.verification);
    let code = store.issue("someone@example.com");
    assert_eq!(code.len(), 8);

    let wrong = if code == "00000000" { "11111111" } else { "00000000" };
    assert_eq!(
        store.verify("someone@example.com", wrong),
        Err(VerificationError::TooManyAttempts)
    );
    assert_eq!(
        store.verify("someone@example.com", &code),
        Err(VerificationError::NotFound)
    );
}
