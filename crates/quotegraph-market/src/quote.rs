//! Quote records and their chat-facing text rendering.
//!
//! Price fields render as currency with thousands separators; traded volume
//! renders as a plain integer.

use crate::models::{Bar, BatchQuote, CryptoBar};
use quotegraph_common::{format_usd, format_volume};

/// Most recent price data for an equity symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Timestamp of the most recent bar.
    pub timestamp: String,
    /// The most recent bar.
    pub bar: Bar,
}

impl Quote {
    /// Renders the quote as a multi-line chat message.
    pub fn format_text(&self) -> String {
        format!(
            "[{}]: {}\nopen: {}\nhigh: {}\nlow: {}\nclose: {}\nvolume: {}",
            self.timestamp,
            self.symbol,
            format_usd(self.bar.open),
            format_usd(self.bar.high),
            format_usd(self.bar.low),
            format_usd(self.bar.close),
            format_volume(self.bar.volume),
        )
    }
}

/// Most recent price data for a cryptocurrency in a given market.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoQuote {
    /// Currency symbol (e.g. BTC).
    pub symbol: String,
    /// Market currency code (e.g. USD).
    pub market: String,
    /// Timestamp of the most recent entry.
    pub timestamp: String,
    /// The most recent entry.
    pub bar: CryptoBar,
}

impl CryptoQuote {
    /// Renders the quote as a multi-line chat message.
    pub fn format_text(&self) -> String {
        format!(
            "[{}]: {} ({})\nprice: {}\nvolume: {}\nmarket cap: {}",
            self.timestamp,
            self.symbol,
            self.market,
            format_usd(self.bar.price),
            self.bar.volume,
            format_usd(self.bar.market_cap),
        )
    }
}

/// Renders a batch quote as a single summary line.
pub fn format_batch_quote(quote: &BatchQuote) -> String {
    match quote.volume {
        Some(volume) => format!(
            "{}: {} (volume {}, as of {})",
            quote.symbol,
            format_usd(quote.price),
            format_volume(volume),
            quote.timestamp,
        ),
        None => format!(
            "{}: {} (as of {})",
            quote.symbol,
            format_usd(quote.price),
            quote.timestamp,
        ),
    }
}
