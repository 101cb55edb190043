//! Poise framework setup and command registration logic.

use quotegraph_config::Config;
use quotegraph_market::MarketClient;
use std::sync::Arc;

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Shared market-data client; rate limiting lives inside it.
    pub market: Arc<MarketClient>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: vec![
            crate::crypto_current_price::crypto_current_price(),
            crate::current_price::current_price(),
            crate::plot_range::plot_range(),
            crate::plot_today::plot_today(),
            crate::price::price(),
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some("$".into()),
            ..Default::default()
        },
        ..Default::default()
    })
}
