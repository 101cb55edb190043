//! Configuration schema definitions using serde with defaults and validation.

use quotegraph_common::QuoteGraphError;
use serde::{Deserialize, Serialize};

/// Main configuration structure for QuoteGraph Bot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Market data provider configuration.
    pub provider: ProviderConfig,
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Chart rendering configuration.
    pub charts: ChartsConfig,
}

/// Market data provider (Alpha Vantage) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL of the provider API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Rate limit: requests per second.
    pub rate_limit_per_sec: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.alphavantage.co".to_string(),
            timeout_secs: 30,
            rate_limit_per_sec: 5,
        }
    }
}

/// Discord bot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
}

/// Chart rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Maximum number of x-axis labels drawn on a chart.
    pub label_budget: usize,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            label_budget: 21,
        }
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), QuoteGraphError> {
        if self.provider.api_key.is_empty() {
            return Err(QuoteGraphError::config(
                "provider API key cannot be empty (set ALPHA_VANTAGE_API_KEY)",
            ));
        }

        if self.discord.token.is_empty() {
            return Err(QuoteGraphError::config(
                "Discord token cannot be empty (set DISCORD_TOKEN)",
            ));
        }

        if self.provider.rate_limit_per_sec == 0 {
            return Err(QuoteGraphError::config(
                "provider rate limit must be greater than 0",
            ));
        }

        if self.charts.label_budget < 2 {
            return Err(QuoteGraphError::config(
                "chart label budget must be at least 2",
            ));
        }

        if self.charts.width < 100 || self.charts.height < 100 {
            return Err(QuoteGraphError::config(
                "chart dimensions must be at least 100x100",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_config() -> Config {
        let mut config = Config::default();
        config.provider.api_key = "key".to_string();
        config.discord.token = "token".to_string();
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider.base_url, "https://www.alphavantage.co");
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.charts.label_budget, 21);
        assert_eq!(config.charts.width, 1000);
    }

    #[test]
    fn test_validate_accepts_populated_config() {
        assert!(populated_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_secrets() {
        let mut config = populated_config();
        config.provider.api_key.clear();
        assert!(config.validate().is_err());

        let mut config = populated_config();
        config.discord.token.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_chart_settings() {
        let mut config = populated_config();
        config.charts.label_budget = 1;
        assert!(config.validate().is_err());

        let mut config = populated_config();
        config.charts.width = 10;
        assert!(config.validate().is_err());
    }
}
