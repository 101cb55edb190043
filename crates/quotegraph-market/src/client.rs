//! Alpha Vantage API client with connection pooling and rate limiting.
//!
//! A provider failure of any kind (invalid symbol, rate limit, network
//! error) surfaces as a single `Provider`/`Network` error for that request;
//! calls are never retried automatically.

use crate::interval::Interval;
use crate::models::{BatchQuote, CryptoBar, RawSeries};
use crate::quote::{CryptoQuote, Quote};
use governor::{DefaultDirectRateLimiter, Quota};
use quotegraph_common::{QuoteGraphError, Result};
use quotegraph_config::ProviderConfig;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::{num::NonZeroU32, sync::Arc, time::Duration};
use tracing::{debug, instrument, warn};

/// Configuration for the market data client.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Base URL of the provider API.
    pub base_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection pool max idle connections per host.
    pub max_idle_per_host: usize,
    /// Rate limit: requests per second.
    pub rate_limit_per_sec: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.alphavantage.co".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
            max_idle_per_host: 10,
            rate_limit_per_sec: 5,
        }
    }
}

impl MarketConfig {
    /// Create a new configuration with the minimum required parameters.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the rate limit.
    pub fn with_rate_limit(mut self, rate_limit_per_sec: u32) -> Self {
        self.rate_limit_per_sec = rate_limit_per_sec;
        self
    }
}

impl From<&ProviderConfig> for MarketConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
            rate_limit_per_sec: config.rate_limit_per_sec,
            ..Default::default()
        }
    }
}

/// Market data client with connection pooling and rate limiting.
///
/// Constructed once at startup and shared read-only across command handlers.
#[derive(Debug, Clone)]
pub struct MarketClient {
    client: Client,
    config: MarketConfig,
    rate_limiter: Arc<DefaultDirectRateLimiter>,
}

impl MarketClient {
    /// Create a new market client with the given configuration.
    pub fn new(config: MarketConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| QuoteGraphError::network_with_source("Failed to create HTTP client", e))?;

        let quota = Quota::per_second(
            NonZeroU32::new(config.rate_limit_per_sec)
                .ok_or_else(|| QuoteGraphError::config("Rate limit must be greater than 0"))?,
        );
        let rate_limiter = Arc::new(DefaultDirectRateLimiter::direct(quota));

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.config.base_url.trim_end_matches('/'))
    }

    /// Make an authenticated request and parse the JSON body.
    async fn request_json(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.rate_limiter.until_ready().await;

        let url = self.query_url();
        debug!("requesting {} with {} parameters", url, params.len());

        let mut query_params: Vec<(&str, &str)> = params.to_vec();
        query_params.push(("apikey", self.config.api_key.as_str()));

        let response = self
            .client
            .get(&url)
            .query(&query_params)
            .send()
            .await
            .map_err(QuoteGraphError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteGraphError::provider_with_status(
                format!("API returned {}", status),
                status.as_u16(),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| QuoteGraphError::network_with_source("Failed to read response body", e))?;

        Self::check_envelope(&body)?;
        Ok(body)
    }

    /// The provider reports failures inside a 200 response; map the in-body
    /// `"Error Message"` (bad call/symbol) and `"Note"` (throttling) payloads
    /// to provider errors.
    fn check_envelope(body: &Value) -> Result<()> {
        if let Some(message) = body.get("Error Message").and_then(Value::as_str) {
            return Err(QuoteGraphError::provider(message.to_string()));
        }
        if let Some(note) = body.get("Note").and_then(Value::as_str) {
            warn!("provider throttling note: {}", note);
            return Err(QuoteGraphError::provider(note.to_string()));
        }
        Ok(())
    }

    fn extract_object(body: &Value, key: &str) -> Result<Value> {
        body.get(key).cloned().ok_or_else(|| {
            QuoteGraphError::provider(format!("response contained no '{}' section", key))
        })
    }

    /// Fetch a full time series for a symbol at the given granularity.
    #[instrument(skip(self), fields(symbol = %symbol, interval = %interval))]
    pub async fn get_series(&self, symbol: &str, interval: Interval) -> Result<RawSeries> {
        let mut params = vec![("function", interval.function()), ("symbol", symbol)];
        if let Some(step) = interval.query_interval() {
            params.push(("interval", step));
        }
        if interval != Interval::Weekly {
            params.push(("outputsize", "full"));
        }

        let body = self.request_json(&params).await?;
        let series = Self::extract_object(&body, interval.series_key())?;
        let series: RawSeries = serde_json::from_value(series)
            .map_err(|e| QuoteGraphError::provider(format!("malformed series payload: {}", e)))?;

        debug!("fetched {} data points for {}", series.len(), symbol);
        Ok(series)
    }

    /// Fetch the most recent price data for an equity symbol.
    ///
    /// Uses the compact one-minute intraday series and takes its latest entry.
    #[instrument(skip(self), fields(symbol = %symbol))]
    pub async fn get_latest(&self, symbol: &str) -> Result<Quote> {
        let params = [
            ("function", "TIME_SERIES_INTRADAY"),
            ("symbol", symbol),
            ("interval", "1min"),
            ("outputsize", "compact"),
        ];

        let body = self.request_json(&params).await?;
        let series = Self::extract_object(&body, "Time Series (1min)")?;
        let series: RawSeries = serde_json::from_value(series)
            .map_err(|e| QuoteGraphError::provider(format!("malformed series payload: {}", e)))?;

        // Timestamps are ISO-ordered strings, so the lexicographic max is the
        // most recent entry.
        let (timestamp, bar) = series
            .into_iter()
            .max_by(|a, b| a.0.cmp(&b.0))
            .ok_or_else(|| QuoteGraphError::provider("no data returned for symbol"))?;

        Ok(Quote {
            symbol: symbol.to_string(),
            timestamp,
            bar,
        })
    }

    /// Fetch the most recent price data for a cryptocurrency in a market.
    #[instrument(skip(self), fields(symbol = %symbol, market = %market))]
    pub async fn get_crypto_latest(&self, symbol: &str, market: &str) -> Result<CryptoQuote> {
        let params = [
            ("function", "DIGITAL_CURRENCY_INTRADAY"),
            ("symbol", symbol),
            ("market", market),
        ];

        let body = self.request_json(&params).await?;
        let series = Self::extract_object(&body, "Time Series (Digital Currency Intraday)")?;
        let series: HashMap<String, HashMap<String, String>> = serde_json::from_value(series)
            .map_err(|e| QuoteGraphError::provider(format!("malformed series payload: {}", e)))?;

        let (timestamp, fields) = series
            .into_iter()
            .max_by(|a, b| a.0.cmp(&b.0))
            .ok_or_else(|| QuoteGraphError::provider("no data returned for symbol"))?;

        Ok(CryptoQuote {
            symbol: symbol.to_string(),
            market: market.to_string(),
            timestamp,
            bar: CryptoBar::from_fields(&fields)?,
        })
    }

    /// Fetch current quotes for a batch of equity symbols.
    #[instrument(skip(self), fields(count = symbols.len()))]
    pub async fn get_batch_quotes(&self, symbols: &[String]) -> Result<Vec<BatchQuote>> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }

        let joined = symbols.join(",");
        let params = [("function", "BATCH_STOCK_QUOTES"), ("symbols", &joined)];

        let body = self.request_json(&params).await?;
        let quotes = Self::extract_object(&body, "Stock Quotes")?;
        serde_json::from_value(quotes)
            .map_err(|e| QuoteGraphError::provider(format!("malformed quotes payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = MarketConfig::new("https://example.com", "test-key");
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.timeout_secs, 30); // default
    }

    #[test]
    fn test_config_builder() {
        let config = MarketConfig::new("https://example.com", "test-key")
            .with_timeout(60)
            .with_rate_limit(2);

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.rate_limit_per_sec, 2);
    }

    #[test]
    fn test_config_from_provider_config() {
        let mut provider = quotegraph_config::ProviderConfig::default();
        provider.api_key = "abc".to_string();
        provider.rate_limit_per_sec = 3;

        let config = MarketConfig::from(&provider);
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.rate_limit_per_sec, 3);
        assert_eq!(config.base_url, "https://www.alphavantage.co");
    }

    #[test]
    fn test_query_url() {
        let client =
            MarketClient::new(MarketConfig::new("https://example.com/", "test-key")).unwrap();
        assert_eq!(client.query_url(), "https://example.com/query");
    }

    #[test]
    fn test_rate_limit_validation() {
        let config = MarketConfig::new("https://example.com", "test-key").with_rate_limit(0);
        let result = MarketClient::new(config);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_client_creation() {
        let config = MarketConfig::new("https://example.com", "test-key");
        assert!(MarketClient::new(config).is_ok());
    }

    #[tokio::test]
    async fn test_rate_limiter_has_initial_capacity() {
        let config = MarketConfig::new("https://example.com", "test-key").with_rate_limit(10);
        let client = MarketClient::new(config).unwrap();
        client.rate_limiter.until_ready().await;
    }

    #[test]
    fn test_envelope_error_message_maps_to_provider_error() {
        let body = serde_json::json!({
            "Error Message": "Invalid API call. Please retry or visit the documentation."
        });

        let err = MarketClient::check_envelope(&body).unwrap_err();
        assert!(matches!(err, QuoteGraphError::Provider { .. }));
        assert!(err.to_string().contains("Invalid API call"));
    }

    #[test]
    fn test_envelope_note_maps_to_provider_error() {
        let body = serde_json::json!({
            "Note": "Our standard API call frequency is 5 calls per minute."
        });

        let err = MarketClient::check_envelope(&body).unwrap_err();
        assert!(matches!(err, QuoteGraphError::Provider { .. }));
    }

    #[test]
    fn test_envelope_accepts_data_payload() {
        let body = serde_json::json!({
            "Meta Data": {},
            "Time Series (Daily)": {}
        });

        assert!(MarketClient::check_envelope(&body).is_ok());
    }

    #[test]
    fn test_extract_object_missing_section() {
        let body = serde_json::json!({ "Meta Data": {} });
        let err = MarketClient::extract_object(&body, "Time Series (Daily)").unwrap_err();
        assert!(err.to_string().contains("Time Series (Daily)"));
    }
}
