//! Series windowing and axis label down-sampling.
//!
//! A fetched series is filtered to the requested inclusive window and its
//! timestamps are thinned to a display budget for axis labeling. The label
//! set never filters data; it only decides which ticks get text.

use crate::types::DateRange;
use quotegraph_market::{Interval, RawSeries};
use tracing::{debug, warn};

/// Result of windowing a series to a date range.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowOutcome {
    /// At least one data point fell inside the window.
    Series(WindowedSeries),
    /// No data points in the window; an expected user-facing condition,
    /// not a failure.
    Empty,
}

/// A windowed series ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedSeries {
    /// Chronologically ascending (timestamp, closing value) pairs.
    pub points: Vec<(String, f64)>,
    /// Down-sampled axis labels as (point index, label text) pairs.
    pub labels: Vec<(usize, String)>,
}

impl WindowedSeries {
    /// The label text at a point index, if that index carries a label.
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, text)| text.as_str())
    }
}

/// Filters a fetched series to `range` and builds its axis label set.
///
/// Keys that do not parse with the interval's timestamp format are skipped
/// (provider payloads may carry metadata keys); entries are sorted by parsed
/// timestamp rather than trusting provider iteration order. Membership is
/// tested on the timestamp's calendar date, so both window bounds are
/// inclusive for date-only and intraday granularities alike.
pub fn window_series(
    raw: &RawSeries,
    range: &DateRange,
    interval: Interval,
    label_budget: usize,
) -> WindowOutcome {
    let mut entries = Vec::with_capacity(raw.len());
    for (key, bar) in raw {
        let Some(timestamp) = interval.parse_timestamp(key) else {
            warn!(%key, %interval, "skipping series key with unexpected format");
            continue;
        };
        if range.contains(timestamp.date()) {
            entries.push((timestamp, key.clone(), bar.close));
        }
    }

    if entries.is_empty() {
        debug!("no data points inside window {:?}", range);
        return WindowOutcome::Empty;
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let points: Vec<(String, f64)> = entries
        .into_iter()
        .map(|(_, key, close)| (key, close))
        .collect();
    let labels = sample_labels(&points, label_budget);

    WindowOutcome::Series(WindowedSeries { points, labels })
}

/// Uniform stride sample of point timestamps for axis labeling.
///
/// All timestamps are kept when the series fits the budget; otherwise every
/// `len / budget`-th timestamp is taken starting at index 0. The stride
/// floors, so the sampled count can exceed the budget (by one for most
/// series lengths).
fn sample_labels(points: &[(String, f64)], budget: usize) -> Vec<(usize, String)> {
    if points.len() <= budget {
        return points
            .iter()
            .enumerate()
            .map(|(i, (ts, _))| (i, ts.clone()))
            .collect();
    }

    let stride = (points.len() / budget.max(1)).max(1);
    points
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(i, (ts, _))| (i, ts.clone()))
        .collect()
}
