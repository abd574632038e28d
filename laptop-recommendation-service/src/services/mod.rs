pub mod prompt;
pub mod providers;

pub use prompt::build_prompt;
pub use providers::{ProviderError, ProviderResponse, TextProvider};
