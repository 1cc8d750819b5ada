mod anthropic;
pub mod mock;
mod traits;

pub use anthropic::{
    AnthropicConfig, AnthropicService, API_VERSION, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};
pub use mock::ScriptedService;
pub use traits::{GenerationError, GenerationService};
