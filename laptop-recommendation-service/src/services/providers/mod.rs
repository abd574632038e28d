//! Completion provider abstractions and implementations.
//!
//! Handlers only see the [`TextProvider`] trait, so the OpenAI backend can be
//! swapped for the mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use mock::MockTextProvider;
pub use openai::{OpenAiTextProvider, OpenAiProviderConfig};

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned no choices")]
    EmptyResponse,
}

/// Result of a single completion.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Text of the first returned choice.
    pub text: String,

    /// Model that produced the answer, as reported by the provider.
    pub model: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Trait for chat-completion providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` as a single user message and return the first choice.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Model identifier requests are sent with.
    fn model(&self) -> &str;
}
