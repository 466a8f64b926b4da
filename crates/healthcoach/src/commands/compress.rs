use super::resolve_tier;
use anyhow::Context;
use chrono::Utc;
use healthcoach_compress::{CompressedArtifact, Compressor, Trends};
use healthcoach_core::{BudgetTier, Config, RawHealthDocument};
use std::path::Path;

/// Read and parse a health data file
pub fn load_document(path: &Path) -> anyhow::Result<RawHealthDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read health data from {}", path.display()))?;
    let document = RawHealthDocument::from_json_str(&json)
        .with_context(|| format!("invalid health data in {}", path.display()))?;
    Ok(document)
}

pub fn compress_file(path: &Path, tier: BudgetTier) -> anyhow::Result<CompressedArtifact> {
    let document = load_document(path)?;
    let artifact = Compressor::new(tier).compress(&document, Utc::now())?;
    Ok(artifact)
}

/// One line per trend, in trend-key order
pub fn format_trends(trends: &Trends) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(sleep) = &trends.sleep {
        lines.push(format!(
            "sleep: {:.1} hours/night over {} nights ({} day window)",
            sleep.avg_duration_hours, sleep.data_points, sleep.trend_period_days
        ));
    }
    if let Some(exercise) = &trends.exercise {
        lines.push(format!(
            "exercise: {:.1} minutes/day from {} sessions ({} day window)",
            exercise.avg_daily_minutes, exercise.total_sessions, exercise.trend_period_days
        ));
    }
    if let Some(nutrition) = &trends.nutrition {
        lines.push(format!(
            "nutrition: {:.0} calories/day over {} days ({} day window)",
            nutrition.avg_daily_calories, nutrition.data_points, nutrition.trend_period_days
        ));
    }
    if let Some(heart_rate) = &trends.heart_rate {
        lines.push(format!(
            "heart_rate: {:.1} bpm from {} readings",
            heart_rate.avg, heart_rate.data_points
        ));
    }
    lines
}

pub fn print_artifact(artifact: &CompressedArtifact, show_log: bool) {
    let body = &artifact.body;
    let tier = artifact.budget_mode();

    println!("Compressed Health Data ({})", tier);
    println!("========================");
    println!("{}", tier.description());
    println!();
    println!("Data points: {}", body.summary.total_data_points);
    println!("Retained:discarded: {}", body.summary.compression_ratio);
    match artifact.reduction_percent() {
        Ok(percent) => println!(
            "Size: {} -> {} words ({:.1}% reduction)",
            artifact.sizes.raw_size, artifact.sizes.compressed_size, percent
        ),
        Err(e) => println!("Size: {} words ({})", artifact.sizes.compressed_size, e),
    }

    println!("\nTrends:");
    let trends = format_trends(artifact.trends());
    if trends.is_empty() {
        println!("  (none)");
    }
    for line in &trends {
        println!("  {}", line);
    }

    if !body.discarded_fields.is_empty() {
        println!("\nDiscarded fields: {}", body.discarded_fields.join(", "));
    }

    println!("\nHealth summary: {}", artifact.health_summary_text);

    if show_log {
        println!("\nExplainability log:");
        for line in &artifact.explainability_log {
            println!("  - {}", line);
        }
    }
}

pub fn run(config: &Config, input: &Path, budget: Option<&str>, json: bool) -> anyhow::Result<()> {
    let tier = resolve_tier(config, budget);
    let artifact = compress_file(input, tier)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&artifact)?);
    } else {
        print_artifact(&artifact, config.show_explainability_log);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthcoach_compress::{HeartRateTrend, SleepTrend};

    #[test]
    fn test_format_trends() {
        let trends = Trends {
            sleep: Some(SleepTrend {
                avg_duration_hours: 7.4,
                data_points: 20,
                trend_period_days: 30,
            }),
            heart_rate: Some(HeartRateTrend {
                avg: 72.0,
                data_points: 5,
            }),
            ..Default::default()
        };

        let lines = format_trends(&trends);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("sleep: 7.4 hours/night"));
        assert_eq!(lines[1], "heart_rate: 72.0 bpm from 5 readings");
    }

    #[test]
    fn test_format_trends_empty() {
        assert!(format_trends(&Trends::default()).is_empty());
    }

    #[test]
    fn test_compress_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("health.json");
        let date = (Utc::now() - chrono::Duration::days(2)).to_rfc3339();
        let doc = serde_json::json!({
            "sleep": [{"date": date, "duration_hours": 8.0}]
        });
        std::fs::write(&path, doc.to_string()).unwrap();

        let artifact = compress_file(&path, BudgetTier::Low).unwrap();
        assert_eq!(artifact.trends().keys(), vec!["sleep"]);
        assert_eq!(artifact.body.retained_fields, vec!["sleep_duration_trend"]);
    }

    #[test]
    fn test_compress_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(compress_file(&dir.path().join("nope.json"), BudgetTier::Low).is_err());
    }

    #[test]
    fn test_compress_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(compress_file(&path, BudgetTier::High).is_err());
    }
}
