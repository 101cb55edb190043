//! # QuoteGraph Charts
//!
//! The chart-plotting pipeline core: resolving a requested date range to a
//! data granularity, windowing a fetched series to that range with a
//! down-sampled axis label set, and rendering the result to a PNG.
//!
//! Everything here is pure and request-scoped; safe under arbitrary
//! concurrent invocation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod interval;
pub mod renderer;
pub mod types;
pub mod window;

pub use interval::select_interval;
pub use renderer::{ChartRenderer, LineChartRenderer};
pub use types::{CalendarDelta, DateRange};
pub use window::{window_series, WindowOutcome, WindowedSeries};
