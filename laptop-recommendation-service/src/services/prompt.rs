//! Prompt construction for laptop recommendations.

use crate::dtos::LaptopRecommendationRequest;

/// Render the single user message sent to the completion provider.
pub fn build_prompt(request: &LaptopRecommendationRequest) -> String {
    format!(
        "Recommend a laptop for {} use with a budget of {} Rupiah, {} RAM, {} CPU, {} screen size and {} Brand",
        request.purpose,
        request.budget,
        request.ram,
        request.cpu,
        request.screen_size,
        request.brand
    )
}
