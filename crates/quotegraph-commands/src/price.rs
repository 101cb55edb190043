//! Batch price command for one or more equity symbols.

use crate::framework::{Context, Error};
use crate::pipeline::user_facing_message;
use quotegraph_common::utils::normalize_symbol;
use quotegraph_market::format_batch_quote;
use tracing::warn;

/// Get current prices for one or more stock symbols.
#[poise::command(slash_command, prefix_command)]
pub async fn price(
    ctx: Context<'_>,
    #[description = "Space-separated stock symbols"] symbols: String,
) -> Result<(), Error> {
    let mut normalized = Vec::new();
    for raw in symbols.split_whitespace() {
        match normalize_symbol(raw) {
            Ok(symbol) => normalized.push(symbol),
            Err(err) => {
                ctx.say(user_facing_message(&err)).await?;
                return Ok(());
            }
        }
    }

    if normalized.is_empty() {
        ctx.say("Error: no symbols given.").await?;
        return Ok(());
    }

    ctx.defer().await?;

    match ctx.data().market.get_batch_quotes(&normalized).await {
        Ok(quotes) if quotes.is_empty() => {
            ctx.say("No quotes found for those symbols.").await?;
        }
        Ok(quotes) => {
            let lines: Vec<String> = quotes.iter().map(format_batch_quote).collect();
            ctx.say(lines.join("\n")).await?;
        }
        Err(err) => {
            warn!(error = %err, "batch quote lookup failed");
            ctx.say(user_facing_message(&err)).await?;
        }
    }

    Ok(())
}
