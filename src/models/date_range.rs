use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_LOOKBACK_DAYS;
use crate::error::{AdsError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// DateRange — Inclusive calendar-date window, no timezone
// ---------------------------------------------------------------------------

/// An inclusive window of calendar dates, serialized as `YYYY-MM-DD`.
///
/// Dates carry no timezone and are treated as UTC midnight boundaries.
/// Every constructor enforces `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = AdsError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AdsError::InvalidArgument(format!(
                "Date range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Build a range without the ordering check.
    ///
    /// Only used by [`ComparisonPolicy::StartMinusSpan`](crate::window::ComparisonPolicy),
    /// which can legitimately produce an inverted window.
    pub(crate) fn from_bounds_unchecked(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days leading up to and including `today`.
    ///
    /// `start` is `today - days`, so the window spans `days + 1` dates.
    pub fn last_days(days: u32, today: NaiveDate) -> Result<Self> {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                AdsError::InvalidArgument(format!("{} days before {} is out of range", days, today))
            })?;
        Self::new(start, today)
    }

    /// The dashboard's default window ending on `today`.
    pub fn default_for(today: NaiveDate) -> Result<Self> {
        Self::last_days(DEFAULT_LOOKBACK_DAYS, today)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both endpoints.
    ///
    /// Zero or negative only for an inverted range.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Both bounds in the compact `YYYYMMDD` form used in API queries.
    pub fn compact_bounds(&self) -> (String, String) {
        (
            self.start.format("%Y%m%d").to_string(),
            self.end.format("%Y%m%d").to_string(),
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AdsError::InvalidArgument(format!("Invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
    })
}
