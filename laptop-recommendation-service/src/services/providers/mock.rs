//! Mock provider implementation for testing.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock text provider that answers with a fixed reply and records prompts.
pub struct MockTextProvider {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every call fails as if the upstream were unreachable.
    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let text = self.reply.clone().ok_or_else(|| {
            ProviderError::NetworkError("Mock text provider configured to fail".to_string())
        })?;

        Ok(ProviderResponse {
            output_tokens: text.len() as i32 / 4,
            text,
            model: self.model().to_string(),
            input_tokens: prompt.len() as i32 / 4,
        })
    }

    fn model(&self) -> &str {
        "mock"
    }
}
