//! Chart command for an arbitrary date range.

use crate::framework::{Context, Error};
use crate::pipeline::{
    build_range_chart, no_data_message, parse_user_date, user_facing_message, PlotOutcome,
};
use poise::serenity_prelude as serenity;
use quotegraph_charts::DateRange;
use quotegraph_common::utils::normalize_symbol;
use tracing::warn;

/// Plot a price chart for a stock symbol over a date range.
#[poise::command(slash_command, prefix_command)]
pub async fn plot_range(
    ctx: Context<'_>,
    #[description = "Stock symbol, e.g. AAPL"] symbol: String,
    #[description = "Start date, MM-DD-YYYY"] start: String,
    #[description = "End date, MM-DD-YYYY"] end: String,
) -> Result<(), Error> {
    // all three arguments validate before anything is fetched
    let parsed = normalize_symbol(&symbol).and_then(|symbol| {
        let start = parse_user_date(&start)?;
        let end = parse_user_date(&end)?;
        Ok((symbol, DateRange::new(start, end)?))
    });
    let (symbol, range) = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            ctx.say(user_facing_message(&err)).await?;
            return Ok(());
        }
    };

    ctx.defer().await?;

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
            warn!(%symbol, ?range, error = %err, "range chart failed");
            ctx.say(user_facing_message(&err)).await?;
        }
    }

    Ok(())
}
