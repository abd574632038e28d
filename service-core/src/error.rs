use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

/// Error envelope returned to callers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    /// Envelope for a status code, e.g. `Status Bad Request` for 400.
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            message: format!("Status {}", status.canonical_reason().unwrap_or("Unknown")),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) | AppError::Upstream(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(anyhow::anyhow!(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Callers only ever see the generic envelope; the cause goes to the log.
        // Upstream failures are logged where they happen, with provider context.
        match &self {
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                tracing::error!(error = %self, "Request failed")
            }
            err => tracing::debug!(error = %err, "Request rejected"),
        }

        (status, Json(ErrorResponse::for_status(status))).into_response()
    }
}
