//! Completion provider client.
//!
//! One outbound HTTP call to a hosted chat-completions endpoint. The
//! `CompletionProvider` trait is the seam that keeps the pipeline testable
//! without a network; `FakeCompletionProvider` backs the tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;

/// Sampling temperature used for every hint request
const TEMPERATURE: f32 = 0.7;

/// Provider call errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("provider returned no usable reply")]
    EmptyReply,
}

/// Generic completion provider
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Turn a prompt into a single free-form reply
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Extract the first choice's trimmed content, treating an absent or
    /// blank field as no reply at all.
    fn reply(self) -> Result<String, ProviderError> {
        let content = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let content = content.trim();
        if content.is_empty() {
            return Err(ProviderError::EmptyReply);
        }
        Ok(content.to_string())
    }
}

/// Provider implementation backed by an HTTP chat-completions endpoint
pub struct HttpCompletionProvider {
    config: LlmConfig,
    client: reqwest::Client,
}

impl HttpCompletionProvider {
    pub fn new(config: LlmConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.config.endpoint);

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.config.timeout_secs)
                } else {
                    ProviderError::Http(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "hint provider returned an error status");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Http(format!("failed to parse response: {e}")))?;

        parsed.reply()
    }
}

/// Scripted provider for tests: returns queued responses in order, then
/// repeats the last one.
pub struct FakeCompletionProvider {
    responses: std::sync::Mutex<Vec<Result<String, ProviderError>>>,
    call_count: std::sync::Mutex<usize>,
}

impl FakeCompletionProvider {
    pub fn new(responses: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            call_count: std::sync::Mutex::new(0),
        }
    }

    /// A provider that always returns the given reply
    pub fn always(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    /// A provider that always fails with the given error
    pub fn always_error(error: ProviderError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl CompletionProvider for FakeCompletionProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ProviderError::EmptyReply);
        }
        if responses.len() == 1 {
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}
