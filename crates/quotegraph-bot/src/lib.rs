//! # QuoteGraph Bot
//!
//! Discord bot serving stock and crypto quotes with rendered price charts.
//!
//! This is the main binary crate that wires configuration, the market-data
//! client, and the Poise command framework into a running application.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
