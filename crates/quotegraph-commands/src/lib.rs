//! # QuoteGraph Commands
//!
//! Discord command implementations using the Poise framework for QuoteGraph
//! Bot: quote lookups for equities and crypto, batch price queries, and
//! chart plotting over a requested date range.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod crypto_current_price;
pub mod current_price;
pub mod framework;
pub mod pipeline;
pub mod plot_range;
pub mod plot_today;
pub mod price;

pub use framework::*;
