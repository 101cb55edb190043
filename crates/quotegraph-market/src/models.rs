//! Typed response models for Alpha Vantage payloads.
//!
//! The provider serializes every numeric value as a string under keys like
//! `"1. open"`. Everything is decoded into plain numeric fields here so the
//! rest of the workspace is statically checked against these records instead
//! of string-keyed maps.

use quotegraph_common::{QuoteGraphError, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// A fetched time series: provider timestamp key to OHLCV bar.
///
/// No ordering is assumed; consumers sort by parsed timestamp.
pub type RawSeries = HashMap<String, Bar>;

fn de_f64_str<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<f64>().map_err(serde::de::Error::custom)
}

fn de_opt_f64_str<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<f64>().ok()))
}

/// A single OHLCV bar from an equity time series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bar {
    /// Opening price.
    #[serde(rename = "1. open", deserialize_with = "de_f64_str")]
    pub open: f64,
    /// High price.
    #[serde(rename = "2. high", deserialize_with = "de_f64_str")]
    pub high: f64,
    /// Low price.
    #[serde(rename = "3. low", deserialize_with = "de_f64_str")]
    pub low: f64,
    /// Closing price.
    #[serde(rename = "4. close", deserialize_with = "de_f64_str")]
    pub close: f64,
    /// Traded volume.
    #[serde(rename = "5. volume", deserialize_with = "de_f64_str")]
    pub volume: f64,
}

/// One entry from a batch quote response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchQuote {
    /// Ticker symbol.
    #[serde(rename = "1. symbol")]
    pub symbol: String,
    /// Most recent price.
    #[serde(rename = "2. price", deserialize_with = "de_f64_str")]
    pub price: f64,
    /// Traded volume; the provider reports `--` outside market hours.
    #[serde(rename = "3. volume", deserialize_with = "de_opt_f64_str", default)]
    pub volume: Option<f64>,
    /// Timestamp of the quote.
    #[serde(rename = "4. timestamp")]
    pub timestamp: String,
}

/// A single bar from a digital-currency intraday series.
///
/// Crypto field names embed the market code (e.g. `"1a. price (USD)"`), so
/// this record is built by prefix matching rather than serde renames.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoBar {
    /// Price in the requested market currency.
    pub price: f64,
    /// Traded volume.
    pub volume: f64,
    /// Market capitalization in USD.
    pub market_cap: f64,
}

impl CryptoBar {
    /// Decodes a crypto bar from the provider's raw field map.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let lookup = |prefix: &str| -> Result<f64> {
            fields
                .iter()
                .find(|(key, _)| key.starts_with(prefix))
                .ok_or_else(|| {
                    QuoteGraphError::provider(format!("missing '{}' field in crypto bar", prefix))
                })
                .and_then(|(key, value)| {
                    value.trim().parse::<f64>().map_err(|e| {
                        QuoteGraphError::provider(format!(
                            "non-numeric value '{}' for '{}': {}",
                            value, key, e
                        ))
                    })
                })
        };

        Ok(Self {
            price: lookup("1a. price")?,
            volume: lookup("2. volume")?,
            market_cap: lookup("3. market cap")?,
        })
    }
}
