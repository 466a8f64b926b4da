use crate::CompressError;
use chrono::{DateTime, Utc};
use healthcoach_core::BudgetTier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepTrend {
    pub avg_duration_hours: f64,
    pub data_points: usize,
    pub trend_period_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTrend {
    pub avg_daily_minutes: f64,
    pub total_sessions: usize,
    pub trend_period_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTrend {
    pub avg_daily_calories: f64,
    pub data_points: usize,
    pub trend_period_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateTrend {
    pub avg: f64,
    pub data_points: usize,
}

/// Aggregate statistics per category; absent categories are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<HeartRateTrend>,
}

impl Trends {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of trends present
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Keys of the trends present, in serialization order
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.sleep.is_some() {
            keys.push("sleep");
        }
        if self.exercise.is_some() {
            keys.push("exercise");
        }
        if self.nutrition.is_some() {
            keys.push("nutrition");
        }
        if self.heart_rate.is_some() {
            keys.push("heart_rate");
        }
        keys
    }

    /// Sum of samples, sessions and readings across all trends
    pub fn total_data_points(&self) -> usize {
        self.sleep.as_ref().map_or(0, |t| t.data_points)
            + self.exercise.as_ref().map_or(0, |t| t.total_sessions)
            + self.nutrition.as_ref().map_or(0, |t| t.data_points)
            + self.heart_rate.as_ref().map_or(0, |t| t.data_points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionSummary {
    pub total_data_points: usize,
    /// `"<retained>:<discarded>"` label counts, not a size ratio
    pub compression_ratio: String,
}

/// The measured part of a compressed artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedBody {
    pub compression_timestamp: DateTime<Utc>,
    pub budget_mode: BudgetTier,
    pub summary: CompressionSummary,
    pub trends: Trends,
    pub retained_fields: Vec<String>,
    pub discarded_fields: Vec<String>,
}

/// Word-count sizes recorded during compression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeReport {
    pub raw_size: usize,
    pub compressed_size: usize,
    pub digest_size: usize,
}

impl SizeReport {
    /// Percentage size reduction from raw to compressed
    ///
    /// Undefined for an empty raw document, which is reported as
    /// [`CompressError::EmptyInput`] rather than 0%.
    pub fn reduction_percent(&self) -> Result<f64, CompressError> {
        if self.raw_size == 0 {
            return Err(CompressError::EmptyInput);
        }
        let raw = self.raw_size as f64;
        Ok((raw - self.compressed_size as f64) / raw * 100.0)
    }
}

/// Output of one compression pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedArtifact {
    #[serde(flatten)]
    pub body: CompressedBody,
    pub explainability_log: Vec<String>,
    pub health_summary_text: String,
    #[serde(default)]
    pub sizes: SizeReport,
}

impl CompressedArtifact {
    pub fn trends(&self) -> &Trends {
        &self.body.trends
    }

    pub fn budget_mode(&self) -> BudgetTier {
        self.body.budget_mode
    }

    pub fn reduction_percent(&self) -> Result<f64, CompressError> {
        self.sizes.reduction_percent()
    }
}
