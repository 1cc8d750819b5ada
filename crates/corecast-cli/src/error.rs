use corecast_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Ctrl-C or end of input. A clean exit, not a failure.
    #[error("interrupted by user")]
    Interrupted,

    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ANTHROPIC_API_KEY must be set in the environment or passed with --api-key")]
    MissingApiKey,

    #[error("--max-tokens must be greater than zero")]
    ZeroMaxTokens,

    #[error("invalid --message: {0}")]
    InvalidMessage(CoreError),

    #[error("invalid --platforms: {0}")]
    InvalidPlatforms(CoreError),
}
