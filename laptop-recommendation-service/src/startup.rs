//! Application startup and lifecycle management.

use crate::config::RecommendationConfig;
use crate::handlers;
use crate::services::providers::{OpenAiProviderConfig, OpenAiTextProvider, TextProvider};
use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub text_provider: Arc<dyn TextProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/recommend-laptop", post(handlers::recommend_laptop))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the OpenAI provider described by `config`.
    pub async fn build(config: RecommendationConfig) -> Result<Self, AppError> {
        let text_provider = OpenAiTextProvider::new(OpenAiProviderConfig {
            api_key: config.openai.api_key.clone(),
            model: config.openai.model.clone(),
            base_url: config.openai.base_url.clone(),
        })
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

        tracing::info!(
            model = %config.openai.model,
            base_url = %config.openai.base_url,
            "Initialized OpenAI text provider"
        );

        Self::build_with_provider(config, Arc::new(text_provider)).await
    }

    /// Build the application around an already constructed provider.
    pub async fn build_with_provider(
        config: RecommendationConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState { text_provider };

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Laptop recommendation service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
