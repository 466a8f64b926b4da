use chrono::{DateTime, Utc};
use healthcoach_core::BudgetTier;
use serde::{Deserialize, Serialize};

/// Recommendations generated from compressed trends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub timestamp: DateTime<Utc>,
    pub budget_mode: BudgetTier,
    /// One-paragraph health digest the recommendations are based on
    pub health_twin: String,
    pub recommendations: Vec<String>,
    /// Supporting reasoning, reported at the HIGH tier only
    pub reasoning: Vec<String>,
    /// Trend keys that were analyzed
    pub data_sources: Vec<String>,
    pub recommendation_count: usize,
    /// Whether the remote service produced the recommendations
    pub api_generated: bool,
}
