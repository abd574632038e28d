use serde::Deserialize;
use service_core::config::{self as core_config, get_env, is_production};
use service_core::error::AppError;
use std::env;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Credential read from `APIKEY`.
    pub api_key: String,
    /// Fixed model identifier used for every completion.
    pub model: String,
    /// API root, without the `/chat/completions` suffix.
    pub base_url: String,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub otlp_endpoint: Option<String>,
}

impl RecommendationConfig {
    pub fn load() -> Result<Self, AppError> {
        // Also loads `.env`, so APIKEY may come from there.
        let common_config = core_config::Config::load()?;
        let is_prod = is_production();

        Ok(RecommendationConfig {
            common: common_config,
            openai: OpenAiConfig {
                api_key: get_env("APIKEY", None, is_prod)?,
                model: get_env("OPENAI_MODEL", Some(DEFAULT_OPENAI_MODEL), is_prod)?,
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), is_prod)?,
            },
            logging: LoggingConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            },
        })
    }
}
