//! Latest-quote command for a cryptocurrency symbol.

use crate::framework::{Context, Error};
use crate::pipeline::user_facing_message;
use quotegraph_common::utils::normalize_symbol;
use tracing::warn;

/// Get the most recent quote for a cryptocurrency.
#[poise::command(slash_command, prefix_command)]
pub async fn crypto_current_price(
    ctx: Context<'_>,
    #[description = "Crypto symbol, e.g. BTC"] symbol: String,
    #[description = "Quote market, defaults to USD"] market: Option<String>,
) -> Result<(), Error> {
    let symbol = match normalize_symbol(&symbol) {
        Ok(symbol) => symbol,
        Err(err) => {
            ctx.say(user_facing_message(&err)).await?;
            return Ok(());
        }
    };
    let market_code = market.as_deref().unwrap_or("USD").to_uppercase();

    ctx.defer().await?;

    match ctx.data().market.get_crypto_latest(&symbol, &market_code).await {
        Ok(quote) => {
            ctx.say(quote.format_text()).await?;
        }
        Err(err) => {
            warn!(%symbol, %market_code, error = %err, "crypto quote lookup failed");
            ctx.say(user_facing_message(&err)).await?;
        }
    }

    Ok(())
}
