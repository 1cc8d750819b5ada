use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("authentication rejected: {0}")]
    Unauthorized(String),

    #[error("rate limited or quota exceeded: {0}")]
    RateLimited(String),

    #[error("service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("unreadable response: {0}")]
    InvalidResponse(String),

    #[error("response contained no text")]
    EmptyResponse,
}

/// A remote text-completion endpoint.
///
/// One blocking call per attempt: a single user-role prompt in, a single
/// text blob out. Model and output-length cap are fixed by the
/// implementation's configuration. Failures are returned, never panicked,
/// and callers decide how to present them.
pub trait GenerationService {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<S: GenerationService + ?Sized> GenerationService for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}
