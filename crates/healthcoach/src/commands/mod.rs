pub mod clear;
pub mod compress;
pub mod history;
pub mod recommend;
pub mod run;
pub mod version;

use healthcoach_compress::MemoryStore;
use healthcoach_core::{BudgetTier, Config};
use healthcoach_telemetry::Paths;
use std::path::Path;

/// Load config from `path`, or from the data directory when omitted
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load(&Paths::new()?.config_file())?,
    };
    Ok(config)
}

/// Open the memory store configured for this run
pub fn open_store(config: &Config) -> anyhow::Result<MemoryStore> {
    let path = config.memory_path(|| Paths::new().map(|paths| paths.memory_file()))?;
    MemoryStore::open(path, config.max_stored_summaries)
}

/// Budget tier from a command-line override, else from config
pub fn resolve_tier(config: &Config, budget: Option<&str>) -> BudgetTier {
    budget.map_or(config.budget_mode, BudgetTier::from_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tier_prefers_override() {
        let config = Config::new();
        assert_eq!(resolve_tier(&config, None), BudgetTier::Low);
        assert_eq!(resolve_tier(&config, Some("balanced")), BudgetTier::Balanced);
        assert_eq!(resolve_tier(&config, Some("MAX")), BudgetTier::High);
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config.max_stored_summaries, 10);
    }

    #[test]
    fn test_open_store_uses_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.memory_file = Some(dir.path().join("memory.json"));

        let store = open_store(&config).unwrap();
        assert_eq!(store.path(), dir.path().join("memory.json"));
        assert!(store.path().exists());
    }
}
