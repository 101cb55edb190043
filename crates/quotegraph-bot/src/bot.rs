//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use poise::serenity_prelude as serenity;
use quotegraph_commands::{create_framework, Data};
use quotegraph_config::Config;
use quotegraph_market::{MarketClient, MarketConfig};
use std::sync::Arc;
use tracing::info;

/// Main bot structure.
pub struct QuoteGraphBot {
    config: Arc<Config>,
    market: Arc<MarketClient>,
}

impl QuoteGraphBot {
    /// Creates a new bot instance, building the shared market-data client.
    pub fn new(config: Config) -> BotResult<Self> {
        let market = MarketClient::new(MarketConfig::from(&config.provider))?;
        Ok(Self {
            config: Arc::new(config),
            market: Arc::new(market),
        })
    }

    /// Starts the bot and blocks until the gateway connection ends.
    pub async fn start(&self) -> BotResult<()> {
        let config = self.config.clone();
        let market = self.market.clone();

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(user = %ready.user.name, "connected to Discord");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    Ok(Data { config, market })
                })
            })
            .build();

        // MESSAGE_CONTENT is needed for the "$" prefix commands
        let intents =
            serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents)
            .framework(framework)
            .await
            .map_err(|e| BotError::Framework(format!("{e:?}")))?;

        client
            .start()
            .await
            .map_err(|e| BotError::Framework(format!("{e:?}")))?;
        Ok(())
    }
}
