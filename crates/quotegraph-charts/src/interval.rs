//! Date-range to data-granularity resolution.
//!
//! The thresholds force coarser bars as the requested span grows so a chart
//! stays legible and the point count stays within provider limits. They are
//! policy constants, not derived from any data-volume measurement.

use crate::types::{CalendarDelta, DateRange};
use quotegraph_market::Interval;

/// Picks the data granularity for a date range.
///
/// Evaluated in priority order, first match wins:
/// spans of two or more years plot weekly bars, a month or more plots daily,
/// five days or more plots hourly, and anything shorter plots
/// thirty-minute bars.
pub fn select_interval(range: &DateRange) -> Interval {
    let delta = CalendarDelta::between(range.start, range.end);

    if delta.years >= 2 {
        Interval::Weekly
    } else if delta.months >= 1 || delta.years >= 1 {
        Interval::Daily
    } else if delta.days >= 5 {
        Interval::Hourly
    } else {
        Interval::ThirtyMin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_two_year_span_is_weekly() {
        assert_eq!(
            select_interval(&range((2018, 1, 1), (2020, 1, 1))),
            Interval::Weekly
        );
    }

    #[test]
    fn test_weekly_regardless_of_month_and_day() {
        // month/day components do not matter once the year delta reaches two
        assert_eq!(
            select_interval(&range((2015, 12, 31), (2018, 1, 1))),
            Interval::Weekly
        );
        assert_eq!(
            select_interval(&range((2016, 6, 15), (2019, 11, 2))),
            Interval::Weekly
        );
    }

    #[test]
    fn test_month_or_more_is_daily() {
        assert_eq!(
            select_interval(&range((2020, 1, 1), (2020, 2, 1))),
            Interval::Daily
        );
        assert_eq!(
            select_interval(&range((2019, 1, 1), (2020, 6, 1))),
            Interval::Daily
        );
    }

    #[test]
    fn test_one_year_exactly_is_daily() {
        assert_eq!(
            select_interval(&range((2019, 1, 1), (2020, 1, 1))),
            Interval::Daily
        );
    }

    #[test]
    fn test_fourteen_day_span_is_hourly() {
        assert_eq!(
            select_interval(&range((2020, 1, 1), (2020, 1, 15))),
            Interval::Hourly
        );
    }

    #[test]
    fn test_five_day_boundary_is_hourly() {
        assert_eq!(
            select_interval(&range((2020, 1, 1), (2020, 1, 6))),
            Interval::Hourly
        );
    }

    #[test]
    fn test_short_span_is_thirty_min() {
        assert_eq!(
            select_interval(&range((2020, 1, 1), (2020, 1, 2))),
            Interval::ThirtyMin
        );
        assert_eq!(
            select_interval(&range((2020, 1, 1), (2020, 1, 5))),
            Interval::ThirtyMin
        );
    }

    #[test]
    fn test_same_day_is_thirty_min() {
        assert_eq!(
            select_interval(&range((2020, 3, 3), (2020, 3, 3))),
            Interval::ThirtyMin
        );
    }

    #[test]
    fn test_widening_never_selects_finer_granularity() {
        fn coarseness(interval: Interval) -> u8 {
            match interval {
                Interval::ThirtyMin => 0,
                Interval::Hourly => 1,
                Interval::Daily => 2,
                Interval::Weekly => 3,
            }
        }

        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let mut previous = 0u8;
        for extra_days in 0..1200 {
            let end = start + chrono::Duration::days(extra_days);
            let level = coarseness(select_interval(&DateRange::new(start, end).unwrap()));
            assert!(
                level >= previous,
                "granularity got finer at day offset {}",
                extra_days
            );
            previous = level;
        }
    }
}
