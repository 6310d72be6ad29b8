//! Provider configuration.
//!
//! Environment-driven: the only required value is the API credential; the
//! endpoint, model and timeout have working defaults and exist for local
//! or self-hosted endpoints.

use serde::{Deserialize, Serialize};

const ENV_API_KEY: &str = "TOGETHER_API_KEY";
const ENV_ENDPOINT: &str = "MENTOR_ENDPOINT";
const ENV_MODEL: &str = "MENTOR_MODEL";
const ENV_TIMEOUT_SECS: &str = "MENTOR_TIMEOUT_SECS";

pub const DEFAULT_ENDPOINT: &str = "https://api.together.xyz";
pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Placeholder shipped in setup instructions; an unset key often still
/// carries it verbatim
const PLACEHOLDER_API_KEY: &str = "your_together_ai_api_key_here";

/// Configuration errors, detected before any network call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TOGETHER_API_KEY is not set")]
    MissingApiKey,

    #[error("TOGETHER_API_KEY still holds the placeholder value")]
    PlaceholderApiKey,
}

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Load configuration from the environment. Fails fast on a missing or
    /// placeholder credential so no request is ever attempted with one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = validate_api_key(std::env::var(ENV_API_KEY).ok().as_deref())?;

        let endpoint = std::env::var(ENV_ENDPOINT)
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();

        let model = std::env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = std::env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            endpoint,
            model,
            api_key,
            timeout_secs,
        })
    }
}

/// Check a raw credential value: present, non-blank, and not the shipped
/// placeholder.
pub fn validate_api_key(value: Option<&str>) -> Result<String, ConfigError> {
    let key = value.map(str::trim).unwrap_or_default();
    if key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    if key == PLACEHOLDER_API_KEY {
        return Err(ConfigError::PlaceholderApiKey);
    }
    Ok(key.to_string())
}
