//! Financial Health Engine
//!
//! Pure, synchronous functions that turn a [`FinancialProfile`] into an
//! assessment. Nothing here performs I/O or keeps state between calls.
//!
//! ## Steps
//!
//! - **Metrics Analyzer** (`analyze`) - Derives savings, expense, debt and
//!   emergency-fund ratios
//! - **Score Calculator** (`score`) - Weighted 0-100 score from the metrics
//! - **Savings Projector** (`project`) - 24-month linear savings trajectory
//! - **Recommendation Generator** (`recommend`) - Prioritized advice from
//!   threshold breaches
//! - **Summary Builder** (`summarize`) - All of the above in one payload
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moneypilot_core::{summarize, FinancialProfile};
//!
//! let profile = FinancialProfile::load(Path::new("profile.json"))?;
//! let summary = summarize(&profile);
//! println!("{} ({})", summary.score.score, summary.score.status);
//! ```
//!
//! [`FinancialProfile`]: crate::models::FinancialProfile

pub mod metrics;
pub mod projection;
pub mod recommendations;
pub mod scoring;
pub mod summary;
pub mod types;

pub use metrics::analyze;
pub use projection::{months_to_goal, project, PROJECTION_MONTHS};
pub use recommendations::recommend;
pub use scoring::{breakdown, score};
pub use summary::{summarize, summarize_at};
pub use types::{
    HealthMetrics, HealthScore, HealthStatus, HealthSummary, ProjectionPoint, Recommendation,
    RecommendationCategory, RecommendationPriority, RecommendationSet, SavingsProjection,
    ScoreBreakdown,
};
