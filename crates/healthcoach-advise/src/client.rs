//! Remote text-generation client with API key validation

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

const GENERATION_MODEL: &str = "gpt-4o";
const GENERATION_CONTEXT: &str =
    "Generate personalized health recommendations based on health data";
const MIN_KEY_LEN: usize = 20;

const PLACEHOLDER_KEYS: &[&str] = &[
    "your_api_key_here",
    "set_your_api_key",
    "example_key",
    "test_key",
    "demo_key",
    "sk-your-api-key-here",
];
const PLACEHOLDER_FRAGMENTS: &[&str] = &[
    "your_api_key",
    "set_your",
    "example_key",
    "test_key",
    "demo_key",
];

/// Lines echoing the prompt rather than answering it
const PROMPT_ECHOES: &[&str] = &[
    "health twin",
    "budget mode",
    "detailed health",
    "recommendation requirements",
];
const RESPONSE_MARKERS: &[&str] = &[
    "RECOMMENDATIONS:",
    "Recommendations:",
    "Here are",
    "Based on",
    "1.",
    "- ",
];

static KEY_CHARSET_RE: OnceLock<Regex> = OnceLock::new();
static LIST_MARKER_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("invalid API key configuration: {0}")]
    InvalidApiKey(&'static str),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no generated output found in API response")]
    EmptyOutput,
}

/// Reject missing, placeholder and malformed API keys before any request
pub fn validate_api_key(key: &str) -> Result<(), LlmError> {
    if key.is_empty() {
        return Err(LlmError::InvalidApiKey("no API key configured"));
    }

    let cleaned = key.trim().to_lowercase();
    if PLACEHOLDER_KEYS.contains(&cleaned.as_str()) {
        return Err(LlmError::InvalidApiKey("placeholder API key"));
    }
    if PLACEHOLDER_FRAGMENTS.iter().any(|f| cleaned.contains(f)) {
        return Err(LlmError::InvalidApiKey("placeholder API key pattern"));
    }
    if key.len() < MIN_KEY_LEN {
        return Err(LlmError::InvalidApiKey("API key too short"));
    }

    let re = KEY_CHARSET_RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_\-.]+$").unwrap());
    if !re.is_match(key) {
        return Err(LlmError::InvalidApiKey("API key format invalid"));
    }
    Ok(())
}

/// Remove a leading `1.`, `-`, `•` or `*` list marker
pub fn strip_list_marker(line: &str) -> String {
    let re = LIST_MARKER_RE.get_or_init(|| Regex::new(r"^(\d+\.|[-•*])\s*").unwrap());
    re.replace(line, "").trim().to_string()
}

/// Extract clean recommendations from generated text as a numbered list
pub fn extract_recommendations(response: &str) -> String {
    let mut text = response.trim();
    if let Some(start) = RESPONSE_MARKERS
        .iter()
        .filter_map(|marker| text.find(marker))
        .min()
    {
        text = &text[start..];
    }

    let recommendations: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
        .filter(|line| {
            let lower = line.to_lowercase();
            !PROMPT_ECHOES.iter().any(|echo| lower.contains(echo))
        })
        .map(strip_list_marker)
        .filter(|line| {
            line.chars().count() > 10
                && !["Generate", "Based on", "Provide"]
                    .iter()
                    .any(|prefix| line.starts_with(prefix))
        })
        .collect();

    if !recommendations.is_empty() {
        return recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| format!("{}. {}", i + 1, rec))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let sentence = text
        .split('.')
        .map(str::trim)
        .find(|s| s.chars().count() > 20)
        .unwrap_or_else(|| text.split('.').next().unwrap_or_default().trim());
    format!("1. {sentence}.")
}

/// Client for the remote text-generation service
pub struct LlmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Generate recommendation text for `prompt`
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        validate_api_key(&self.api_key)?;

        let response = self
            .http
            .post(format!("{}/compress/raw/", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "context": GENERATION_CONTEXT,
                "prompt": prompt,
                "model": GENERATION_MODEL,
                "scaledown": {"rate": "auto"}
            }))
            .send()
            .await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "recommendation API responded");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await?;
        let output = body["results"]["compressed_prompt"].as_str().unwrap_or("");
        if output.trim().is_empty() {
            return Err(LlmError::EmptyOutput);
        }

        let recommendations = extract_recommendations(output);
        let preview: String = recommendations.chars().take(60).collect();
        tracing::debug!(preview = %preview, "generated recommendations");
        Ok(recommendations)
    }
}
