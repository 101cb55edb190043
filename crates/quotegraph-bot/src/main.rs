//! Main entry point for QuoteGraph Bot.

use quotegraph_bot::{BotError, BotResult, QuoteGraphBot};
use quotegraph_common::logging::init_default_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    init_default_logging().map_err(|e| BotError::Framework(format!("logging setup: {e}")))?;

    info!("Starting QuoteGraph Bot");

    let config = quotegraph_config::load()?;

    let bot = QuoteGraphBot::new(config)?;

    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {}", e);
        return Err(e);
    }

    Ok(())
}
