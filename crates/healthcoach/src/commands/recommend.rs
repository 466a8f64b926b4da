use super::{open_store, resolve_tier};
use healthcoach_advise::{Recommendations, Recommender};
use healthcoach_compress::Trends;
use healthcoach_core::{BudgetTier, Config};

/// Generate recommendations, driving the async client on a local runtime
pub fn generate(
    config: &Config,
    trends: &Trends,
    tier: BudgetTier,
) -> anyhow::Result<Recommendations> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let recommender = Recommender::from_config(config);
    Ok(runtime.block_on(recommender.recommend(trends, tier)))
}

pub fn print_recommendations(recs: &Recommendations) {
    println!("Health Twin");
    println!("===========");
    println!("{}", recs.health_twin);

    println!("\nRecommendations ({})", recs.budget_mode);
    for (i, rec) in recs.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }

    if !recs.reasoning.is_empty() {
        println!("\nReasoning:");
        for line in &recs.reasoning {
            println!("  - {}", line);
        }
    }

    if !recs.data_sources.is_empty() {
        println!("\nData sources: {}", recs.data_sources.join(", "));
    }
    println!(
        "Source: {}",
        if recs.api_generated {
            "remote API"
        } else {
            "deterministic rules"
        }
    );
}

pub fn run(config: &Config, budget: Option<&str>) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let Some(state) = store.current_state() else {
        println!("No stored health state. Run `healthcoach run --input <file>` first.");
        return Ok(());
    };

    let tier = resolve_tier(config, budget);
    let recs = generate(config, &state.trends, tier)?;
    print_recommendations(&recs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthcoach_compress::SleepTrend;

    #[test]
    fn test_generate_with_fallback() {
        let mut config = Config::new();
        config.use_fallback = true;
        let trends = Trends {
            sleep: Some(SleepTrend {
                avg_duration_hours: 5.5,
                data_points: 10,
                trend_period_days: 30,
            }),
            ..Default::default()
        };

        let recs = generate(&config, &trends, BudgetTier::Low).unwrap();
        assert!(!recs.api_generated);
        assert_eq!(recs.recommendation_count, 1);
        assert_eq!(recs.data_sources, vec!["sleep"]);
    }
}
