//! OpenAI chat-completion provider.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Role tag for the single message we send.
const ROLE_USER: &str = "user";

/// OpenAI provider configuration.
#[derive(Clone)]
pub struct OpenAiProviderConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// OpenAI text provider.
pub struct OpenAiTextProvider {
    config: OpenAiProviderConfig,
    client: Client,
}

impl OpenAiTextProvider {
    pub fn new(config: OpenAiProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextProvider for OpenAiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "APIKEY is empty".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: ROLE_USER,
                content: prompt,
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to OpenAI API"
        );

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ProviderError::Unauthorized(error_text)
                }
                StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
                _ => ProviderError::ApiError(format!("OpenAI API error {}: {}", status, error_text)),
            });
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(ProviderError::EmptyResponse)?;

        let usage = api_response.usage.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            model: api_response
                .model
                .unwrap_or_else(|| self.config.model.clone()),
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
        })
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

// ============================================================================
// OpenAI API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    model: Option<String>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: i32,
    #[serde(default)]
    completion_tokens: i32,
}
