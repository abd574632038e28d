#![allow(dead_code)]

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use laptop_recommendation_service::config::{
    LoggingConfig, OpenAiConfig, RecommendationConfig, DEFAULT_OPENAI_MODEL,
};
use laptop_recommendation_service::services::providers::TextProvider;
use laptop_recommendation_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Mutex};

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

pub fn test_config(base_url: &str, api_key: &str) -> RecommendationConfig {
    RecommendationConfig {
        // Use random port for testing (port 0)
        common: CoreConfig { port: 0 },
        openai: OpenAiConfig {
            api_key: api_key.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: base_url.to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            otlp_endpoint: None,
        },
    }
}

impl TestApp {
    /// Spawn the app around an injected provider.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config("http://127.0.0.1:1", "unused"), provider)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the app with the real OpenAI provider pointed at `base_url`.
    pub async fn spawn_with_openai(base_url: &str, api_key: &str) -> Self {
        let app = Application::build(test_config(base_url, api_key))
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_recommendation(&self, body: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/recommend-laptop", self.address))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// What the mock chat-completion server saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockUpstreamState {
    status: StatusCode,
    response: serde_json::Value,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn mock_chat_completions(
    State(state): State<MockUpstreamState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    state
        .captured
        .lock()
        .unwrap()
        .push(CapturedRequest { authorization, body });

    (state.status, Json(state.response.clone()))
}

pub struct MockUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    /// Spawn a chat-completion server answering every call with `response`.
    pub async fn spawn(status: StatusCode, response: serde_json::Value) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/v1/chat/completions", post(mock_chat_completions))
            .with_state(MockUpstreamState {
                status,
                response,
                captured: captured.clone(),
            });

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

pub fn completion_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 30, "completion_tokens": 12, "total_tokens": 42 }
    })
}
