//! Remote text-completion provider interface and OpenAI implementation

use crate::config::AiConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Seam for the remote completion call. Injected into the analyzer so
/// tests can substitute a fake without process-wide state.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// One completion request. No internal retry; the caller owns the
    /// fallback policy.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    fn model_name(&self) -> &str;
}

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

pub struct OpenAiProvider {
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Fails with `Error::Configuration` when the env-supplied key is
    /// absent or implausibly short. The request timeout bounds the call so
    /// a hung provider cannot block the fallback path.
    pub fn from_config(config: &AiConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(Error::Configuration(format!(
                "AI provider not configured: set {} to a valid API key",
                config.api_key_env
            )));
        }
        let api_key = config
            .api_key()
            .ok_or_else(|| Error::Configuration(format!("{} is not set", config.api_key_env)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // Timeouts and connection failures are worth retrying later.
                Error::provider(format!("request failed: {}", e), true)
            })?;

        let status = response.status();
        if !status.is_success() {
            let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::provider(
                format!("HTTP {}: {}", status, truncate(&body, 200)),
                retryable,
            ));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::provider(format!("malformed response body: {}", e), false))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| Error::provider("no completion content in response", false))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
