//! Chart command for today's intraday prices.

use crate::framework::{Context, Error};
use crate::pipeline::{build_range_chart, no_data_message, user_facing_message, PlotOutcome};
use chrono::Utc;
use poise::serenity_prelude as serenity;
use quotegraph_charts::DateRange;
use quotegraph_common::utils::normalize_symbol;
use tracing::warn;

/// Plot today's price chart for a stock symbol.
#[poise::command(slash_command, prefix_command)]
pub async fn plot_today(
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

    let range = DateRange::single_day(Utc::now().date_naive());
    let data = ctx.data();
    match build_range_chart(&data.market, &data.config.charts, &symbol, range).await {
        Ok(PlotOutcome::Png(png)) => {
            let reply = poise::CreateReply::default()
                .attachment(serenity::CreateAttachment::bytes(png, "chart.png"));
            ctx.send(reply).await?;
        }
        Ok(PlotOutcome::NoData) => {
            ctx.say(no_data_message()).await?;
        }
        Err(err) => {
            warn!(%symbol, error = %err, "today chart failed");
            ctx.say(user_facing_message(&err)).await?;
        }
    }

    Ok(())
}
