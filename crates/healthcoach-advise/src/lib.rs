//! Budget-aware health recommendations from compressed trends
//!
//! Uses the remote text-generation service when configured and falls back to
//! deterministic threshold rules otherwise.

pub mod client;
mod prompt;
mod recommender;
mod rules;
mod types;

pub use client::{extract_recommendations, validate_api_key, LlmClient, LlmError};
pub use prompt::{build_recommendation_prompt, parse_api_response};
pub use recommender::Recommender;
pub use rules::deterministic_recommendations;
pub use types::Recommendations;
