use crate::{verify, CoreMessage, Platform};

/// What one generation call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptContent {
    /// Text returned by the generation service.
    Generated(String),
    /// The call failed; holds the failure reason for display.
    Failed(String),
}

/// One generation-and-review cycle for a platform. Discarded unless accepted.
#[derive(Debug, Clone)]
pub struct GenerationAttempt {
    pub platform: Platform,
    /// 1-based attempt number for this platform.
    pub number: u32,
    pub content: AttemptContent,
    pub verified: bool,
}

impl GenerationAttempt {
    /// Verification is decided here, against `core`, and never recomputed.
    pub fn new(
        platform: Platform,
        core: &CoreMessage,
        number: u32,
        content: AttemptContent,
    ) -> Self {
        let verified = match &content {
            AttemptContent::Generated(text) => verify(text, core.as_str()),
            AttemptContent::Failed(_) => false,
        };
        Self {
            platform,
            number,
            content,
            verified,
        }
    }

    /// The text that would be stored on accept, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            AttemptContent::Generated(text) => Some(text),
            AttemptContent::Failed(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.content, AttemptContent::Failed(_))
    }

    /// Text shown to the operator. Failures are rendered here and nowhere earlier.
    pub fn display_text(&self) -> String {
        match &self.content {
            AttemptContent::Generated(text) => text.clone(),
            AttemptContent::Failed(reason) => format!("Error generating content: {reason}"),
        }
    }
}
