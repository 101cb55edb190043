//! # QuoteGraph Config
//!
//! Configuration schema and loading for QuoteGraph Bot.
//!
//! Configuration comes from an optional TOML file overlaid by environment
//! variables; the two secrets (`ALPHA_VANTAGE_API_KEY`, `DISCORD_TOKEN`)
//! are normally supplied through the environment only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod schema;

pub use loader::{apply_env_overrides, load, load_from_file};
pub use schema::{ChartsConfig, Config, DiscordConfig, ProviderConfig};
