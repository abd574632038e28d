//! HTTP handlers for the laptop recommendation service.

pub mod health;
pub mod recommendation;

pub use health::{health_check, not_found};
pub use recommendation::recommend_laptop;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// JSON body extractor whose rejections become the service's 400 envelope.
///
/// An empty body, or a literal `null`, binds to `T::default()` regardless of
/// `Content-Type`. Any other body must be declared as JSON.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;

        if bytes.is_empty() || bytes.as_ref() == b"null" {
            return Ok(AppJson(T::default()));
        }

        if !is_json {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Expected request with `Content-Type: application/json`"
            )));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(AppJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
