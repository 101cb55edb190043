//! # QuoteGraph Market
//!
//! Alpha Vantage API client for QuoteGraph Bot: time-series fetches at a
//! chosen granularity, latest-quote lookups for equities and crypto, and
//! batch quotes. Responses are decoded into typed records once, at this
//! boundary, so downstream code never touches provider field names.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod interval;
pub mod models;
pub mod quote;

pub use client::{MarketClient, MarketConfig};
pub use interval::Interval;
pub use models::{Bar, BatchQuote, CryptoBar, RawSeries};
pub use quote::{format_batch_quote, CryptoQuote, Quote};
