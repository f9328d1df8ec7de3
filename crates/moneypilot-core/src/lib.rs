//! MoneyPilot Core Library
//!
//! Shared functionality for the MoneyPilot personal finance backend:
//! - Financial profile boundary types and normalization
//! - Financial health engine (metrics, score, projection, recommendations)
//! - Configuration loading with embedded defaults
//! - Keyed verification code store with expiry

pub mod config;
pub mod error;
pub mod health;
pub mod models;
pub mod verification;

pub use config::{DisplaySettings, Settings, VerificationSettings};
pub use error::{Error, Result};
pub use health::{
    analyze, project, recommend, score, summarize, summarize_at, HealthMetrics, HealthScore,
    HealthStatus, HealthSummary, ProjectionPoint, Recommendation, RecommendationCategory,
    RecommendationPriority, RecommendationSet, SavingsProjection, ScoreBreakdown,
};
pub use models::{
    FinancialProfile, IncomeSource, RawIncomeSource, RawProfile, MAX_AMOUNT, MIN_AMOUNT,
};
pub use verification::{VerificationCodeStore, VerificationError};
