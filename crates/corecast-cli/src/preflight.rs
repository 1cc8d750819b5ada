use corecast_service::AnthropicConfig;
use tracing::info;

use crate::config::Config;
use crate::ConfigError;

/// Check configuration before any interaction and build the service config.
pub fn check(config: &Config) -> Result<AnthropicConfig, ConfigError> {
    let api_key = check_api_key(config)?;
    if config.max_tokens == 0 {
        return Err(ConfigError::ZeroMaxTokens);
    }

    info!(
        "generation service: {} (model={}, max_tokens={})",
        config.base_url, config.model, config.max_tokens
    );
    Ok(AnthropicConfig {
        api_key,
        base_url: config.base_url.clone(),
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        timeout: config.request_timeout(),
    })
}

fn check_api_key(config: &Config) -> Result<String, ConfigError> {
    match config.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(ConfigError::MissingApiKey),
    }
}
