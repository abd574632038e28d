use axum::{http::Uri, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "laptop-recommendation-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
