//! Compression orchestrator
//!
//! Runs trend aggregation and retention for each category in the fixed order
//! sleep, exercise, nutrition, vitals, then measures and explains the result.

use crate::digest::health_digest;
use crate::explain::ExplainabilityLog;
use crate::retention::{self, Discard};
use crate::trends;
use crate::types::{CompressedArtifact, CompressedBody, CompressionSummary, SizeReport, Trends};
use crate::CompressError;
use chrono::{DateTime, Utc};
use healthcoach_core::{BudgetTier, Category, RawHealthDocument};
use healthcoach_telemetry::{estimate_size_of, word_count};

/// Compresses raw health documents into trend artifacts for one budget tier
#[derive(Debug, Clone, Copy)]
pub struct Compressor {
    tier: BudgetTier,
}

/// Labels and log lines accumulated across categories
#[derive(Default)]
struct Outcome {
    trends: Trends,
    retained: Vec<String>,
    discarded: Vec<String>,
    log: ExplainabilityLog,
}

impl Outcome {
    fn retain(&mut self, label: &str, detail: String) {
        self.retained.push(label.to_string());
        self.log.retained(detail);
    }

    fn discard(&mut self, discard: Option<Discard>) {
        if let Some(discard) = discard {
            self.log.discarded(&discard);
            self.discarded.push(discard.label);
        }
    }
}

impl Compressor {
    pub fn new(tier: BudgetTier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> BudgetTier {
        self.tier
    }

    /// Compress a parsed document relative to `now`
    ///
    /// Only aggregate statistics reach the artifact, never per-record values.
    pub fn compress(
        &self,
        doc: &RawHealthDocument,
        now: DateTime<Utc>,
    ) -> Result<CompressedArtifact, CompressError> {
        let tier = self.tier;
        let mut out = Outcome::default();

        if let Some(sleep) = &doc.sleep {
            if let Some(trend) = trends::sleep_trend(&sleep.records, now) {
                out.retain(
                    "sleep_duration_trend",
                    format!(
                        "sleep duration trend ({} days) - avg {:.1} hours/night",
                        trend.data_points, trend.avg_duration_hours
                    ),
                );
                out.trends.sleep = Some(trend);
                out.discard(retention::sleep_discards(&sleep.records, now, tier));
            }
            out.log.skipped(Category::Sleep, sleep.skipped);
        }

        if let Some(exercise) = &doc.exercise {
            if let Some(trend) = trends::exercise_trend(&exercise.records, now) {
                out.retain(
                    "exercise_frequency_trend",
                    format!(
                        "exercise frequency trend ({} sessions) - avg {:.1} minutes/day",
                        trend.total_sessions, trend.avg_daily_minutes
                    ),
                );
                out.trends.exercise = Some(trend);
                out.discard(retention::exercise_discards(&exercise.records, now, tier));
            }
            out.log.skipped(Category::Exercise, exercise.skipped);
        }

        if let Some(nutrition) = &doc.nutrition {
            if let Some(trend) = trends::nutrition_trend(&nutrition.records, now) {
                out.retain(
                    "calorie_intake_trend",
                    format!(
                        "calorie intake trend ({} days) - avg {:.0} calories/day",
                        trend.data_points, trend.avg_daily_calories
                    ),
                );
                out.trends.nutrition = Some(trend);
                out.discard(retention::nutrition_discards(tier));
            }
            out.log.skipped(Category::Nutrition, nutrition.skipped);
        }

        if let Some(vitals) = &doc.vitals {
            if let Some(trend) = trends::heart_rate_trend(&vitals.records, now, tier) {
                out.retain(
                    "heart_rate_trend",
                    format!(
                        "heart rate trend ({} readings) - avg {:.1} bpm",
                        trend.data_points, trend.avg
                    ),
                );
                out.trends.heart_rate = Some(trend);
            }
            // Age-based vitals retention does not depend on a heart rate trend
            out.discard(retention::vitals_discards(&vitals.records, now, tier));
            out.log.skipped(Category::Vitals, vitals.skipped);
        }

        let summary = CompressionSummary {
            total_data_points: out.trends.total_data_points(),
            compression_ratio: format!("{}:{}", out.retained.len(), out.discarded.len()),
        };
        let body = CompressedBody {
            compression_timestamp: now,
            budget_mode: tier,
            summary,
            trends: out.trends,
            retained_fields: out.retained,
            discarded_fields: out.discarded,
        };

        let health_summary_text = health_digest(&body.trends);
        let sizes = SizeReport {
            raw_size: doc.raw_size,
            compressed_size: estimate_size_of(&body)?,
            digest_size: word_count(&health_summary_text),
        };
        match sizes.reduction_percent() {
            Ok(percent) => tracing::info!(
                raw = sizes.raw_size,
                compressed = sizes.compressed_size,
                reduction_percent = percent,
                "compressed health data"
            ),
            Err(e) => tracing::warn!(error = %e, "compressed empty health document"),
        }

        Ok(CompressedArtifact {
            body,
            explainability_log: out.log.finish(&sizes),
            health_summary_text,
            sizes,
        })
    }
}

/// Parse a raw JSON document and compress it in one step
pub fn compress_health_data(
    raw: &serde_json::Value,
    tier: BudgetTier,
    now: DateTime<Utc>,
) -> Result<CompressedArtifact, CompressError> {
    let doc = RawHealthDocument::from_value(raw)?;
    Compressor::new(tier).compress(&doc, now)
}
