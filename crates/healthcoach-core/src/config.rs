//! Configuration for the health coach pipeline

use crate::{BudgetTier, CoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.scaledown.xyz";

/// Environment variable overriding the remote API key
pub const API_KEY_ENV: &str = "HEALTHCOACH_API_KEY";

/// Environment variable overriding the remote API base URL
pub const API_URL_ENV: &str = "HEALTHCOACH_API_URL";

/// Pipeline configuration, passed explicitly to every component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Retention depth and output verbosity
    pub budget_mode: BudgetTier,

    /// Remote text-generation API key
    pub api_key: String,

    /// Remote text-generation base URL
    pub api_base_url: String,

    /// Skip the remote service and use deterministic recommendations
    pub use_fallback: bool,

    /// Compressed summaries kept in memory history
    pub max_stored_summaries: usize,

    /// Memory file location (defaults to the data directory)
    pub memory_file: Option<PathBuf>,

    /// Remote request timeout
    pub request_timeout_secs: u64,

    /// Print the explainability log after compression
    pub show_explainability_log: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            budget_mode: BudgetTier::Low,
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_fallback: false,
            max_stored_summaries: 10,
            memory_file: None,
            request_timeout_secs: 30,
            show_explainability_log: true,
        }
    }

    /// Load configuration from a JSON file, then apply environment overrides
    ///
    /// A missing file yields the defaults. Fields absent from the file keep
    /// their default values.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let mut config = match healthcoach_telemetry::read_json::<Config>(path)? {
            Some(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            None => Self::new(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = key.trim().to_string();
            }
        }
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
    }

    /// Resolve the memory file; `default` is only consulted when unset
    pub fn memory_path<E>(
        &self,
        default: impl FnOnce() -> Result<PathBuf, E>,
    ) -> Result<PathBuf, E> {
        match &self.memory_file {
            Some(path) => Ok(path.clone()),
            None => default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
