pub mod recommendation;

pub use recommendation::{LaptopRecommendationRequest, LaptopRecommendationResponse};
