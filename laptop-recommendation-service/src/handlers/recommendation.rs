use axum::{extract::State, Extension, Json};

use super::AppJson;
use crate::dtos::{LaptopRecommendationRequest, LaptopRecommendationResponse};
use crate::services::build_prompt;
use crate::startup::AppState;
use service_core::error::AppError;
use service_core::middleware::RequestId;

/// `POST /recommend-laptop`
///
/// Builds the prompt from the caller's preferences and relays the first
/// choice of the completion. Every upstream failure collapses into a 500.
#[tracing::instrument(
    skip(state, request_id, request),
    fields(request_id = %request_id.0, model = %state.text_provider.model())
)]
pub async fn recommend_laptop(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    AppJson(request): AppJson<LaptopRecommendationRequest>,
) -> Result<Json<LaptopRecommendationResponse>, AppError> {
    let prompt = build_prompt(&request);

    let response = state.text_provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Completion request failed");
        AppError::Upstream(e.to_string())
    })?;

    tracing::info!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Recommendation generated"
    );

    Ok(Json(LaptopRecommendationResponse::success(response.text)))
}
