use super::compress::{compress_file, print_artifact};
use super::recommend::{generate, print_recommendations};
use super::{open_store, resolve_tier};
use healthcoach_core::Config;
use std::path::Path;

/// Full pipeline: compress, store, recommend from the stored state
pub fn run(config: &Config, input: &Path, budget: Option<&str>) -> anyhow::Result<()> {
    let tier = resolve_tier(config, budget);
    tracing::info!(tier = %tier, input = %input.display(), "starting health coach run");

    let artifact = compress_file(input, tier)?;
    print_artifact(&artifact, config.show_explainability_log);

    let store = open_store(config)?;
    store.store(&artifact)?;
    println!("\nStored compressed summary in {}", store.path().display());

    // Recommendations only ever see the stored trends
    let trends = match store.current_state() {
        Some(state) => state.trends,
        None => artifact.trends().clone(),
    };
    let recs = generate(config, &trends, tier)?;
    println!();
    print_recommendations(&recs);

    let stats = store.stats();
    println!("\nExecution Summary");
    println!("=================");
    println!("Budget mode: {}", tier);
    println!("Data points analyzed: {}", artifact.body.summary.total_data_points);
    println!("Trends retained: {}", artifact.trends().len());
    println!("Recommendations: {}", recs.recommendation_count);
    println!("Summaries in memory: {}", stats.total_summaries_stored);
    Ok(())
}
