use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const DEFAULT_TONE: &str = "professional";

/// The text every accepted content block must contain verbatim.
///
/// Surrounding whitespace from console input is trimmed; the rest is kept
/// exactly, since verification is an exact substring match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CoreMessage(String);

impl CoreMessage {
    pub fn new(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyCoreMessage);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CoreMessage {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for CoreMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form style modifier passed through to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Tone(String);

impl Tone {
    /// Empty input selects [`DEFAULT_TONE`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self(DEFAULT_TONE.to_string())
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_message_rejects_blank() {
        assert_eq!(CoreMessage::new(""), Err(CoreError::EmptyCoreMessage));
        assert_eq!(CoreMessage::new("   \t"), Err(CoreError::EmptyCoreMessage));
    }

    #[test]
    fn core_message_trims_outer_whitespace_only() {
        let msg = CoreMessage::new("  Try  our new app \n").unwrap();
        assert_eq!(msg.as_str(), "Try  our new app");
    }

    #[test]
    fn tone_defaults_on_empty() {
        assert_eq!(Tone::parse("").as_str(), DEFAULT_TONE);
        assert_eq!(Tone::parse("   ").as_str(), DEFAULT_TONE);
        assert_eq!(Tone::parse(" humorous ").as_str(), "humorous");
    }

    #[test]
    fn deserialize_goes_through_validation() {
        assert!(serde_json::from_str::<CoreMessage>("\"\"").is_err());
        assert!(serde_json::from_str::<CoreMessage>("\"  \"").is_err());

        let core: CoreMessage = serde_json::from_str("\" Try our new app \"").unwrap();
        assert_eq!(core.as_str(), "Try our new app");

        let tone: Tone = serde_json::from_str("\"\"").unwrap();
        assert_eq!(tone.as_str(), DEFAULT_TONE);
    }

    #[test]
    fn serialize_is_the_plain_string() {
        let core = CoreMessage::new("Try our new app").unwrap();
        assert_eq!(serde_json::to_string(&core).unwrap(), "\"Try our new app\"");
    }
}
