//! HTTP client for the external text-generation API.
//!
//! Speaks the OpenAI-style chat-completions wire format over `reqwest`.
//! The missing-credential check happens here, at call time, so a handler
//! fails before mutating any letter when the key is absent.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::DraftConfig;

/// System instruction sent with every drafting request.
const SYSTEM_INSTRUCTION: &str = "You are a professional legal assistant. \
Draft clear, formal legal correspondence on behalf of the sender. \
Use a respectful, firm tone and plain language.";

/// Errors from the drafting API client.
#[derive(Debug, Error)]
pub enum DraftClientError {
    /// No API key configured.
    #[error("drafting API key is not configured")]
    MissingApiKey,
    /// Transport-level failure.
    #[error("drafting API request failed: {0}")]
    Request(String),
    /// Non-success HTTP status from the API.
    #[error("drafting API returned status {0}")]
    Status(u16),
    /// The API answered but produced no usable text.
    #[error("drafting API returned empty content")]
    EmptyContent,
}

impl From<DraftClientError> for crate::AppError {
    fn from(err: DraftClientError) -> Self {
        match err {
            DraftClientError::MissingApiKey => Self::Configuration(err.to_string()),
            DraftClientError::Request(_)
            | DraftClientError::Status(_)
            | DraftClientError::EmptyContent => Self::ExternalService(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Client for the external text-generation API.
#[derive(Clone)]
pub struct DraftClient {
    config: DraftConfig,
    http: reqwest::Client,
}

impl std::fmt::Debug for DraftClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftClient")
            .field("api_url", &self.config.api_url)
            .field("model", &self.config.model)
            .finish()
    }
}

impl DraftClient {
    /// Creates a new drafting client.
    #[must_use]
    pub fn new(config: DraftConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Returns true when an API key is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Sends a drafting prompt and returns the trimmed completion text.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` before any network call when no credential is
    /// configured, `Status`/`Request` on upstream failure, and `EmptyContent`
    /// when the API answers without usable text.
    pub async fn generate(&self, prompt: &str) -> Result<String, DraftClientError> {
        let Some(api_key) = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
        else {
            return Err(DraftClientError::MissingApiKey);
        };

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        debug!(model = %self.config.model, prompt_bytes = prompt.len(), "requesting draft");

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DraftClientError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DraftClientError::Status(response.status().as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| DraftClientError::Request(e.to_string()))?;

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(DraftClientError::EmptyContent)?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        let client = DraftClient::new(DraftConfig {
            api_key: None,
            // Unroutable on purpose: the call must fail before any request.
            api_url: "http://127.0.0.1:1/v1/chat/completions".to_string(),
            model: "test-model".to_string(),
        });
        assert!(!client.has_credentials());
        let result = client.generate("draft something").await;
        assert!(matches!(result, Err(DraftClientError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_blank_api_key_treated_as_missing() {
        let client = DraftClient::new(DraftConfig {
            api_key: Some("   ".to_string()),
            api_url: "http://127.0.0.1:1/v1/chat/completions".to_string(),
            model: "test-model".to_string(),
        });
        let result = client.generate("draft something").await;
        assert!(matches!(result, Err(DraftClientError::MissingApiKey)));
    }
}
