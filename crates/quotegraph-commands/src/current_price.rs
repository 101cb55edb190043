//! Latest-quote command for a single equity symbol.

use crate::framework::{Context, Error};
use crate::pipeline::user_facing_message;
use quotegraph_common::utils::normalize_symbol;
use tracing::warn;

/// Get the most recent quote for a stock symbol.
#[poise::command(slash_command, prefix_command)]
pub async fn current_price(
    ctx: Context<'_>,
    #[description = "Stock symbol, e.g. AAPL"] symbol: String,
) -> Result<(), Error> {
    let symbol = match normalize_symbol(&symbol) {
        Ok(symbol) => symbol,
        Err(err) => {
            ctx.say(user_facing_message(&err)).await?;
            return Ok(());
        }
    };

    ctx.defer().await?;

    match ctx.data().market.get_latest(&symbol).await {
        Ok(quote) => {
            ctx.say(quote.format_text()).await?;
        }
        Err(err) => {
            warn!(%symbol, error = %err, "latest quote lookup failed");
            ctx.say(user_facing_message(&err)).await?;
        }
    }

    Ok(())
}
