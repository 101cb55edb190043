//! End-to-end pipeline tests: range resolution, windowing, and rendering
//! over synthetic provider payloads.

use chrono::{Duration, NaiveDate};
use quotegraph_charts::{
    select_interval, window_series, ChartRenderer, DateRange, LineChartRenderer, WindowOutcome,
};
use quotegraph_market::{Bar, Interval, RawSeries};

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const LABEL_BUDGET: usize = 21;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bar(close: f64) -> Bar {
    Bar {
        open: close - 0.5,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1_000_000.0,
    }
}

/// One bar per day from `first` for `count` days, keyed `%Y-%m-%d`.
fn synthetic_daily(first: NaiveDate, count: i64) -> RawSeries {
    (0..count)
        .map(|i| {
            let day = first + Duration::days(i);
            (day.format("%Y-%m-%d").to_string(), bar(100.0 + i as f64))
        })
        .collect()
}

/// Intraday bars every 30 minutes across market hours on a single day.
fn synthetic_intraday(day: NaiveDate) -> RawSeries {
    (0..13)
        .map(|i| {
            let key = format!("{} {:02}:{:02}:00", day.format("%Y-%m-%d"), 9 + i / 2, (i % 2) * 30);
            (key, bar(50.0 + i as f64 * 0.25))
        })
        .collect()
}

#[test]
fn test_long_range_resolves_weekly_and_renders() {
    let range = DateRange::new(date(2017, 1, 1), date(2020, 1, 1)).unwrap();
    let interval = select_interval(&range);
    assert_eq!(interval, Interval::Weekly);

    // weekly bars keyed by date only
    let raw: RawSeries = (0..160)
        .map(|i| {
            let day = date(2016, 6, 1) + Duration::weeks(i);
            (day.format("%Y-%m-%d").to_string(), bar(200.0 + i as f64))
        })
        .collect();

    let outcome = window_series(&raw, &range, interval, LABEL_BUDGET);
    let WindowOutcome::Series(series) = outcome else {
        panic!("expected data in window");
    };

    // only the weeks inside the range survive
    assert!(series.points.len() < 160);
    assert!(series
        .points
        .iter()
        .all(|(ts, _)| ts.as_str() >= "2017-01-01" && ts.as_str() <= "2020-01-01"));

    let png = LineChartRenderer::new(640, 480)
        .render(&series, "IBM")
        .unwrap();
    assert_eq!(&png[..8], &PNG_MAGIC);
}

#[test]
fn test_month_range_resolves_daily_with_label_downsampling() {
    let range = DateRange::new(date(2020, 1, 1), date(2020, 4, 1)).unwrap();
    let interval = select_interval(&range);
    assert_eq!(interval, Interval::Daily);

    // a multi-year payload; the window trims it to the requested quarter
    let raw = synthetic_daily(date(2018, 1, 1), 1000);
    let outcome = window_series(&raw, &range, interval, LABEL_BUDGET);
    let WindowOutcome::Series(series) = outcome else {
        panic!("expected data in window");
    };

    // Jan 1 through Apr 1 inclusive
    assert_eq!(series.points.len(), 92);
    assert_eq!(series.points.first().unwrap().0, "2020-01-01");
    assert_eq!(series.points.last().unwrap().0, "2020-04-01");

    // 92 points over budget 21: stride 4, first label at index 0
    assert!(series.labels.len() < series.points.len());
    assert_eq!(series.labels[0].0, 0);
    for pair in series.labels.windows(2) {
        assert_eq!(pair[1].0 - pair[0].0, 92 / LABEL_BUDGET);
    }
}

#[test]
fn test_single_day_resolves_thirty_min_and_renders() {
    let day = date(2020, 6, 15);
    let range = DateRange::single_day(day);
    let interval = select_interval(&range);
    assert_eq!(interval, Interval::ThirtyMin);

    let mut raw = synthetic_intraday(day);
    // bars from the day before must not leak into the window
    raw.extend(synthetic_intraday(day - Duration::days(1)));

    let outcome = window_series(&raw, &range, interval, LABEL_BUDGET);
    let WindowOutcome::Series(series) = outcome else {
        panic!("expected data in window");
    };
    assert_eq!(series.points.len(), 13);

    let png = LineChartRenderer::new(640, 480)
        .render(&series, "TSLA")
        .unwrap();
    assert_eq!(&png[..8], &PNG_MAGIC);
}

#[test]
fn test_week_range_resolves_hourly() {
    let range = DateRange::new(date(2020, 6, 8), date(2020, 6, 15)).unwrap();
    assert_eq!(select_interval(&range), Interval::Hourly);
}

#[test]
fn test_range_with_no_data_reports_empty() {
    let range = DateRange::new(date(2020, 1, 1), date(2020, 1, 31)).unwrap();
    let raw = synthetic_daily(date(2021, 1, 1), 30);

    let outcome = window_series(&raw, &range, Interval::Daily, LABEL_BUDGET);
    assert_eq!(outcome, WindowOutcome::Empty);
}

#[test]
fn test_reversed_range_is_rejected_before_any_fetch() {
    let err = DateRange::new(date(2020, 2, 1), date(2020, 1, 1)).unwrap_err();
    assert!(err.is_user_error());
}
