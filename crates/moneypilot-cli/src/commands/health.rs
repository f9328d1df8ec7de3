//! Health report commands
//!
//! Each command loads a profile, runs the matching engine step and prints either
//! a human-readable report or the JSON payload (`--json`).

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use moneypilot_core::health::breakdown as score_breakdown;
use moneypilot_core::{
    analyze, project, recommend, score, summarize, HealthMetrics, HealthScore, HealthStatus,
    HealthSummary, Recommendation, RecommendationSet, SavingsProjection, ScoreBreakdown,
    Settings,
};

use super::{format_money, load_profile, print_json};

const RULE: &str = "   ─────────────────────────────────────────────────────────────";

pub fn cmd_summary(profile_path: &Path, settings: &Settings, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let summary = summarize(&profile);

    if json {
        return print_json(&summary);
    }

    print!("{}", render_summary(&summary, &settings.display.currency));
    Ok(())
}

pub fn cmd_score(profile_path: &Path, json: bool, breakdown: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let metrics = analyze(&profile);
    let health_score = HealthScore::new(score(&metrics), Utc::now());
    let parts = breakdown.then(|| score_breakdown(&metrics));

    if json {
        let mut value = serde_json::to_value(&health_score).context("Failed to serialize score")?;
        if let (Some(parts), Some(object)) = (&parts, value.as_object_mut()) {
            object.insert(
                "breakdown".to_string(),
                serde_json::to_value(parts).context("Failed to serialize breakdown")?,
            );
        }
        return print_json(&value);
    }

    print!("{}", render_score(&health_score, parts.as_ref()));
    Ok(())
}

pub fn cmd_metrics(profile_path: &Path, settings: &Settings, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let metrics = analyze(&profile);

    if json {
        return print_json(&metrics);
    }

    print!("{}", render_metrics(&metrics, &settings.display.currency));
    Ok(())
}

pub fn cmd_projection(profile_path: &Path, settings: &Settings, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let projection = project(&profile);

    if json {
        return print_json(&projection);
    }

    print!(
        "{}",
        render_projection(&projection, &settings.display.currency)
    );
    Ok(())
}

pub fn cmd_recommendations(profile_path: &Path, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let recommendations = recommend(&analyze(&profile));

    if json {
        return print_json(&RecommendationSet { recommendations });
    }

    print!("{}", render_recommendations(&recommendations));
    Ok(())
}

pub fn render_summary(summary: &HealthSummary, currency: &str) -> String {
    [
        render_score(&summary.score, None),
        render_metrics(&summary.metrics, currency),
        render_goal(&summary.projection, currency),
        render_recommendations(&summary.recommendations.recommendations),
    ]
    .concat()
}

pub fn render_score(health_score: &HealthScore, parts: Option<&ScoreBreakdown>) -> String {
    let mut lines = header(status_icon(health_score), "Financial Health Score");
    lines.push(format!(
        "   Score: {}/100 ({})",
        health_score.score, health_score.status
    ));

    if let Some(parts) = parts {
        lines.push(String::new());
        lines.push(format!("   Savings rate:     {:>5.1} / 30", parts.savings));
        lines.push(format!("   Expense rate:     {:>5.1} / 30", parts.expenses));
        lines.push(format!("   Debt load:        {:>5.1} / 20", parts.debt));
        lines.push(format!("   Emergency fund:   {:>5.1} / 20", parts.emergency_fund));
    }
    join(lines)
}

pub fn render_metrics(metrics: &HealthMetrics, currency: &str) -> String {
    let money = |amount: f64| format_money(amount, currency);

    let mut lines = header("📊", "Metrics");
    lines.push(format!("   Income:           {}", money(metrics.monthly_income)));
    lines.push(format!("   Expenses:         {}", money(metrics.total_expenses)));
    lines.push(format!(
        "     fixed {} / variable {}",
        money(metrics.fixed_monthly_expenses),
        money(metrics.variable_monthly_expenses)
    ));
    lines.push(format!("   Disposable:       {}", money(metrics.disposable_income)));
    lines.push(String::new());
    lines.push(format!("   Savings rate:     {:.1}%", metrics.savings_rate_pct));
    lines.push(format!("   Expense rate:     {:.1}%", metrics.expense_rate_pct));
    lines.push(format!(
        "   Debt:             {:.1} months of income",
        metrics.debt_ratio
    ));
    lines.push(format!(
        "   Emergency fund:   {:.1} months of expenses",
        metrics.emergency_months
    ));

    if !metrics.income_sources.is_empty() {
        lines.push(String::new());
        lines.push("   💼 Income sources".to_string());
        lines.extend(
            metrics
                .income_sources
                .iter()
                .map(|source| format!("     {:<24} {}", source.name, money(source.amount))),
        );
    }
    join(lines)
}

pub fn render_projection(projection: &SavingsProjection, currency: &str) -> String {
    let table = projection.points.iter().map(|point| {
        let progress = if point.goal_amount > 0.0 {
            format!(
                "{:>5.1}%",
                (point.accumulated_savings / point.goal_amount * 100.0).min(999.9)
            )
        } else {
            "    -".to_string()
        };
        format!(
            "   Month {:>2}   {:>24}   {}",
            point.month_index,
            format_money(point.accumulated_savings, currency),
            progress
        )
    });

    let mut lines = vec![String::new()];
    lines.extend(table);
    render_goal(projection, currency) + &join(lines)
}

fn render_goal(projection: &SavingsProjection, currency: &str) -> String {
    let goal = projection.points.first().map_or(0.0, |p| p.goal_amount);

    let mut lines = header(
        "🎯",
        &format!("Savings Goal: {}", format_money(goal, currency)),
    );
    lines.push(match projection.months_to_goal {
        Some(0) => "   ✅ Goal already reached".to_string(),
        Some(months) => format!("   Reached in {} months at the planned rate", months),
        None => "   ⚠️  No planned monthly savings, goal not reachable".to_string(),
    });
    join(lines)
}

pub fn render_recommendations(recommendations: &[Recommendation]) -> String {
    let mut lines = header("💡", "Recommendations");
    lines.extend(recommendations.iter().map(|rec| {
        format!(
            "   [{}] {}",
            rec.priority.as_str().to_uppercase(),
            rec.message
        )
    }));
    join(lines)
}

/// Blank line, icon + title, rule
fn header(icon: &str, title: &str) -> Vec<String> {
    vec![String::new(), format!("{} {}", icon, title), RULE.to_string()]
}

/// Join report lines, each terminated by a newline
fn join(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn status_icon(health_score: &HealthScore) -> &'static str {
    match health_score.status {
        HealthStatus::Excellent => "🟢",
        HealthStatus::Good => "🟡",
        HealthStatus::Fair => "🟠",
        HealthStatus::NeedsAttention => "🔴",
    }
}
