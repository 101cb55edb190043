//! Date range and calendar-delta types for range resolution.

use chrono::{Datelike, Months, NaiveDate};
use quotegraph_common::{QuoteGraphError, Result};
use serde::{Deserialize, Serialize};

/// An inclusive calendar date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a date range, rejecting reversed bounds.
    ///
    /// The rejection happens here so no data fetch can be issued for an
    /// invalid window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(QuoteGraphError::invalid_input(
                "start date is after end date",
            ));
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Whether a calendar date falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Calendar-aware difference between two dates, expressed as whole years,
/// months, and leftover days.
///
/// Computed the way calendar arithmetic works (a month is however long that
/// month is), never with fixed 30/365-day approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDelta {
    /// Whole years between the dates.
    pub years: i32,
    /// Whole months beyond the years.
    pub months: i32,
    /// Leftover days beyond the months.
    pub days: i64,
}

impl CalendarDelta {
    /// Computes the delta from `start` to `end`.
    ///
    /// Requires `start <= end`; callers validate the range first.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);

        let mut months =
            (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;

        // Adding whole months clamps to month length (Jan 31 + 1 month is
        // Feb 29 in a leap year), so the anchor can overshoot by one month.
        let mut anchor = add_months(start, months);
        if anchor > end {
            months -= 1;
            anchor = add_months(start, months);
        }

        Self {
            years: months / 12,
            months: months % 12,
            days: (end - anchor).num_days(),
        }
    }
}

fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    // months is non-negative here since start <= end
    date.checked_add_months(Months::new(months.max(0) as u32))
        .unwrap_or(date)
}
