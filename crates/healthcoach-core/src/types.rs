//! Core types for budget-aware health data processing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Budget tier controlling retention depth and output verbosity
///
/// Serialized as `"LOW"`, `"BALANCED"` or `"HIGH"`. Unrecognized names fall
/// through to [`BudgetTier::High`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BudgetTier {
    /// Short summary, single recommendation, minimal retention
    #[default]
    Low,
    /// Moderate detail, up to three recommendations
    Balanced,
    /// Detailed insights with reasoning, comprehensive retention
    High,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Low, BudgetTier::Balanced, BudgetTier::High];

    /// Resolve a tier name, case-insensitively. Anything unrecognized is HIGH.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "LOW" => BudgetTier::Low,
            "BALANCED" => BudgetTier::Balanced,
            "HIGH" => BudgetTier::High,
            other => {
                tracing::warn!(tier = %other, "unrecognized budget tier, using HIGH");
                BudgetTier::High
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "LOW",
            BudgetTier::Balanced => "BALANCED",
            BudgetTier::High => "HIGH",
        }
    }

    /// Age in days at which sleep and vitals entries are reported as discarded
    pub fn retention_cutoff_days(&self) -> i64 {
        match self {
            BudgetTier::Low => 7,
            BudgetTier::Balanced => 14,
            BudgetTier::High => 30,
        }
    }

    /// Recency window for heart rate trends
    pub fn vitals_window_days(&self) -> i64 {
        self.retention_cutoff_days()
    }

    /// Exercise types kept at this tier (lowercase)
    pub fn exercise_allow_list(&self) -> &'static [&'static str] {
        match self {
            BudgetTier::Low => &["cardio", "strength"],
            BudgetTier::Balanced => &["cardio", "strength", "flexibility"],
            BudgetTier::High => &["cardio", "strength", "flexibility", "sports", "other"],
        }
    }

    /// Maximum number of recommendations, `None` for unbounded
    pub fn recommendation_limit(&self) -> Option<usize> {
        match self {
            BudgetTier::Low => Some(1),
            BudgetTier::Balanced => Some(3),
            BudgetTier::High => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BudgetTier::Low => "Short summary + 1 recommendation, minimal data retention",
            BudgetTier::Balanced => {
                "Moderate detail + 2-3 recommendations, balanced data retention"
            }
            BudgetTier::High => "Detailed insights + reasoning, comprehensive data retention",
        }
    }
}

impl From<String> for BudgetTier {
    fn from(name: String) -> Self {
        BudgetTier::from_name(&name)
    }
}

impl From<BudgetTier> for String {
    fn from(tier: BudgetTier) -> Self {
        tier.as_str().to_string()
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health data category, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sleep,
    Exercise,
    Nutrition,
    Vitals,
}

impl Category {
    /// Fixed processing and log order
    pub const ALL: [Category; 4] = [
        Category::Sleep,
        Category::Exercise,
        Category::Nutrition,
        Category::Vitals,
    ];

    /// Key used for this category in the raw document
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Exercise => "exercise",
            Category::Nutrition => "nutrition",
            Category::Vitals => "vitals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_name() {
        assert_eq!(BudgetTier::from_name("LOW"), BudgetTier::Low);
        assert_eq!(BudgetTier::from_name("balanced"), BudgetTier::Balanced);
        assert_eq!(BudgetTier::from_name(" High "), BudgetTier::High);
    }

    #[test]
    fn test_unknown_tier_falls_through_to_high() {
        assert_eq!(BudgetTier::from_name("MEDIUM"), BudgetTier::High);
        assert_eq!(BudgetTier::from_name(""), BudgetTier::High);
    }

    #[test]
    fn test_tier_tables() {
        let cutoffs: Vec<i64> = BudgetTier::ALL
            .iter()
            .map(|t| t.retention_cutoff_days())
            .collect();
        assert_eq!(cutoffs, vec![7, 14, 30]);
        assert_eq!(BudgetTier::Balanced.vitals_window_days(), 14);
        assert_eq!(BudgetTier::Low.exercise_allow_list(), &["cardio", "strength"]);
        assert_eq!(BudgetTier::High.exercise_allow_list().len(), 5);
        assert_eq!(BudgetTier::Low.recommendation_limit(), Some(1));
        assert_eq!(BudgetTier::High.recommendation_limit(), None);
    }

    #[test]
    fn test_tier_serde() {
        let json = serde_json::to_string(&BudgetTier::Balanced).unwrap();
        assert_eq!(json, "\"BALANCED\"");

        let parsed: BudgetTier = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, BudgetTier::Low);

        let unknown: BudgetTier = serde_json::from_str("\"EXTREME\"").unwrap();
        assert_eq!(unknown, BudgetTier::High);
    }

    #[test]
    fn test_category_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["sleep", "exercise", "nutrition", "vitals"]);
    }
}
