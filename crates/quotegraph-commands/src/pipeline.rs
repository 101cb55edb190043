//! The shared plotting pipeline behind the chart commands, plus user-input
//! parsing and error-to-reply mapping.

use chrono::NaiveDate;
use quotegraph_charts::{
    select_interval, window_series, ChartRenderer, DateRange, LineChartRenderer, WindowOutcome,
};
use quotegraph_config::ChartsConfig;
use quotegraph_market::MarketClient;
use quotegraph_common::{QuoteGraphError, Result};
use tracing::info;

/// Date format accepted from users in chart commands.
pub const USER_DATE_FORMAT: &str = "%m-%d-%Y";

/// Result of a chart request.
pub enum PlotOutcome {
    /// An encoded PNG ready to attach.
    Png(Vec<u8>),
    /// The range resolved fine but held no data points.
    NoData,
}

/// Parses a user-supplied `MM-DD-YYYY` date.
pub fn parse_user_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), USER_DATE_FORMAT).map_err(|_| {
        QuoteGraphError::invalid_input(format!(
            "could not parse '{}' as a date, expected MM-DD-YYYY",
            input.trim()
        ))
    })
}

/// Fetches, windows, and renders a chart for `symbol` over `range`.
///
/// The granularity follows from the range width; the fetched series is
/// trimmed to the window before rendering.
pub async fn build_range_chart(
    market: &MarketClient,
    charts: &ChartsConfig,
    symbol: &str,
    range: DateRange,
) -> Result<PlotOutcome> {
    let interval = select_interval(&range);
    info!(symbol, %interval, ?range, "building chart");

    let raw = market.get_series(symbol, interval).await?;

    match window_series(&raw, &range, interval, charts.label_budget) {
        WindowOutcome::Empty => Ok(PlotOutcome::NoData),
        WindowOutcome::Series(series) => {
            let renderer = LineChartRenderer::new(charts.width, charts.height);
            let png = renderer.render(&series, symbol)?;
            Ok(PlotOutcome::Png(png))
        }
    }
}

/// Maps an internal error to the reply a Discord user sees.
///
/// Input mistakes echo their own message back; provider and network failures
/// collapse to one retry hint so no upstream detail leaks into chat.
pub fn user_facing_message(error: &QuoteGraphError) -> String {
    match error {
        QuoteGraphError::InvalidInput { message, .. } => format!("Error: {message}"),
        QuoteGraphError::Provider { .. } | QuoteGraphError::Network { .. } => {
            "Couldn't retrieve data for this request, check your arguments and try again."
                .to_string()
        }
        _ => "Something went wrong while processing your request.".to_string(),
    }
}

/// Reply sent when a chart range holds no data points.
pub fn no_data_message() -> &'static str {
    "Not enough data to plot in this range."
}
