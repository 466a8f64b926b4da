use crate::client::LlmClient;
use crate::prompt::{build_recommendation_prompt, parse_api_response};
use crate::rules::deterministic_recommendations;
use crate::Recommendations;
use healthcoach_compress::{health_digest, Trends};
use healthcoach_core::{BudgetTier, Config};
use std::time::Duration;

/// Generates recommendations remotely when configured, deterministically otherwise
pub struct Recommender {
    client: Option<LlmClient>,
}

impl Recommender {
    /// Local threshold rules only
    pub fn deterministic() -> Self {
        Self { client: None }
    }

    pub fn with_client(client: LlmClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.use_fallback {
            tracing::info!("using deterministic recommendations (configured)");
            return Self::deterministic();
        }

        let timeout = Duration::from_secs(config.request_timeout_secs);
        match LlmClient::new(&config.api_base_url, &config.api_key, timeout) {
            Ok(client) => Self::with_client(client),
            Err(e) => {
                tracing::warn!(error = %e, "could not build API client, using deterministic recommendations");
                Self::deterministic()
            }
        }
    }

    pub fn uses_remote(&self) -> bool {
        self.client.is_some()
    }

    /// Recommend from compressed trends; remote failures fall back to local rules
    pub async fn recommend(&self, trends: &Trends, tier: BudgetTier) -> Recommendations {
        let twin = health_digest(trends);
        let Some(client) = &self.client else {
            return deterministic_recommendations(trends, tier, &twin);
        };

        let prompt = build_recommendation_prompt(trends, tier, &twin);
        match client.generate(&prompt).await {
            Ok(text) => parse_api_response(&text, tier, trends, &twin),
            Err(e) => {
                tracing::warn!(error = %e, "API call failed, falling back to deterministic recommendations");
                deterministic_recommendations(trends, tier, &twin)
            }
        }
    }
}
