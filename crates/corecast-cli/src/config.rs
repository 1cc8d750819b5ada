use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use corecast_core::{parse_selection, CoreMessage, Tone};
use corecast_service::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

use crate::session::Prefill;
use crate::transcript::DEFAULT_OUTPUT;
use crate::ConfigError;

#[derive(Debug, Parser)]
#[command(
    name = "corecast",
    about = "Turn one core message into platform-styled content that always contains it verbatim"
)]
pub struct Config {
    /// Generation service API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier sent with every request
    #[arg(long, env = "CORECAST_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Output-length cap per generation
    #[arg(long, env = "CORECAST_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Generation service base URL
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds. Unset waits indefinitely.
    #[arg(long, env = "CORECAST_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Core message; skips the interactive prompt
    #[arg(long)]
    pub message: Option<String>,

    /// Comma-separated platform numbers or names; skips the interactive prompt
    #[arg(long)]
    pub platforms: Option<String>,

    /// Tone; skips the interactive prompt
    #[arg(long)]
    pub tone: Option<String>,

    /// Filename offered as the default when saving
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the available platforms and their style guidelines, then exit
    #[arg(long)]
    pub list_platforms: bool,
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Validate flag-supplied session inputs with the same rules as the prompts.
    pub fn prefill(&self) -> Result<Prefill, ConfigError> {
        let core = self
            .message
            .as_deref()
            .map(CoreMessage::new)
            .transpose()
            .map_err(ConfigError::InvalidMessage)?;
        let platforms = self
            .platforms
            .as_deref()
            .map(parse_selection)
            .transpose()
            .map_err(ConfigError::InvalidPlatforms)?;
        let tone = self.tone.as_deref().map(Tone::parse);
        Ok(Prefill {
            core,
            platforms,
            tone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corecast_core::{CoreError, Platform};

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["corecast"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--api-key",
            "sk-test",
            "--model",
            "custom-model",
            "--max-tokens",
            "256",
            "--timeout",
            "30",
            "--output",
            "out.txt",
        ]);
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "custom-model");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn prefill_empty_when_no_flags() {
        let prefill = parse(&["--api-key", "k"]).prefill().unwrap();
        assert!(prefill.core.is_none());
        assert!(prefill.platforms.is_none());
        assert!(prefill.tone.is_none());
    }

    #[test]
    fn prefill_parses_values() {
        let config = parse(&[
            "--message",
            "Try our new app",
            "--platforms",
            "1,blog",
            "--tone",
            "",
        ]);
        let prefill = config.prefill().unwrap();
        assert_eq!(prefill.core.unwrap().as_str(), "Try our new app");
        assert_eq!(
            prefill.platforms.unwrap(),
            vec![Platform::Twitter, Platform::Blog]
        );
        assert_eq!(prefill.tone.unwrap().as_str(), "professional");
    }

    #[test]
    fn prefill_rejects_blank_message() {
        let err = parse(&["--message", "  "]).prefill().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidMessage(CoreError::EmptyCoreMessage)
        ));
    }

    #[test]
    fn prefill_rejects_unusable_platforms() {
        let err = parse(&["--platforms", "42,nope"]).prefill().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPlatforms(CoreError::NoPlatformsSelected)
        ));
    }
}
