//! Configuration loading: optional TOML file overlaid by environment variables.

use crate::schema::Config;
use quotegraph_common::{QuoteGraphError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable holding the provider API key.
pub const ENV_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";
/// Environment variable holding the Discord bot token.
pub const ENV_DISCORD_TOKEN: &str = "DISCORD_TOKEN";
/// Environment variable pointing at an alternative config file.
pub const ENV_CONFIG_PATH: &str = "QUOTEGRAPH_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "quotegraph.toml";

/// Loads configuration from a TOML file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        QuoteGraphError::config_with_source(format!("failed to read {}", path.display()), e)
    })?;
    let config = toml::from_str(&contents)?;
    debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Applies environment overrides onto a base configuration.
///
/// Takes the lookup function as an argument so tests can inject variables
/// without mutating process state.
pub fn apply_env_overrides(mut config: Config, get: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(api_key) = get(ENV_API_KEY) {
        config.provider.api_key = api_key;
    }
    if let Some(token) = get(ENV_DISCORD_TOKEN) {
        config.discord.token = token;
    }
    config
}

/// Loads the effective configuration.
///
/// Reads `QUOTEGRAPH_CONFIG` (or `quotegraph.toml` if present) and overlays
/// environment variables, then validates the result.
pub fn load() -> Result<Config> {
    let base = match std::env::var(ENV_CONFIG_PATH).ok() {
        Some(path) => load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        None => {
            debug!("no config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(base, |key| std::env::var(key).ok());
    config.validate()?;
    info!("configuration loaded");
    Ok(config)
}
