use super::open_store;
use healthcoach_compress::{MemoryStats, StoredSummary};
use healthcoach_core::Config;

fn format_stats(stats: &MemoryStats) -> String {
    format!(
        "Stored summaries: {}\n\
         Last updated: {}\n\
         Current state: {}\n\
         File size: {} bytes",
        stats.total_summaries_stored,
        stats.last_updated.format("%Y-%m-%d %H:%M"),
        if stats.has_current_state { "yes" } else { "no" },
        stats.file_size_bytes
    )
}

fn format_summary(summary: &StoredSummary) -> String {
    let trends = summary.trends.keys();
    format!(
        "{} | {} | points:{} ratio:{} trends:[{}]",
        summary.timestamp.format("%Y-%m-%d %H:%M"),
        summary.budget_mode,
        summary.summary.total_data_points,
        summary.summary.compression_ratio,
        trends.join(", ")
    )
}

pub fn run(config: &Config, stats: bool, limit: usize) -> anyhow::Result<()> {
    let store = open_store(config)?;

    if stats {
        println!("{}", format_stats(&store.stats()));
        return Ok(());
    }

    let summaries = store.history(limit);
    if summaries.is_empty() {
        println!("No compression history");
        return Ok(());
    }

    println!("Recent Summaries (last {})", summaries.len());
    println!("=========================");
    for summary in summaries.iter().rev() {
        println!("  {}", format_summary(summary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use healthcoach_compress::{CompressionSummary, Trends};
    use healthcoach_core::BudgetTier;

    #[test]
    fn test_format_summary() {
        let summary = StoredSummary {
            timestamp: chrono::Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            budget_mode: BudgetTier::Balanced,
            summary: CompressionSummary {
                total_data_points: 0,
                compression_ratio: "0:0".to_string(),
            },
            trends: Trends::default(),
            retained_fields: vec![],
            discarded_fields: vec![],
        };

        assert_eq!(
            format_summary(&summary),
            "2026-03-01 09:30 | BALANCED | points:0 ratio:0:0 trends:[]"
        );
    }

    #[test]
    fn test_format_stats() {
        let stats = MemoryStats {
            total_summaries_stored: 3,
            last_updated: chrono::Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            has_current_state: true,
            file_size_bytes: 1024,
        };

        let text = format_stats(&stats);
        assert!(text.contains("Stored summaries: 3"));
        assert!(text.contains("Current state: yes"));
        assert!(text.contains("1024 bytes"));
    }

    #[test]
    fn test_history_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.memory_file = Some(dir.path().join("memory.json"));
        assert!(run(&config, false, 5).is_ok());
        assert!(run(&config, true, 5).is_ok());
    }
}
