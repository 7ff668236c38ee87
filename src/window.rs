//! Derivation of the comparison window that precedes a primary date range.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::models::DateRange;

/// How the comparison window's start is placed.
///
/// Both policies end the comparison window the day before the primary start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Same number of calendar days as the primary window.
    ///
    /// `2025-01-10..2025-01-19` compares against `2024-12-31..2025-01-09`,
    /// and a single day compares against the day before it.
    #[default]
    EqualLength,
    /// `start - (end - start)`: the span is subtracted without counting the
    /// start day itself.
    ///
    /// The window is one day shorter than the primary one, and a single-day
    /// range produces an inverted window (`start > end`).
    StartMinusSpan,
}

/// Comparison window for `range` under the default [`ComparisonPolicy`].
pub fn derive_comparison_window(range: &DateRange) -> DateRange {
    derive_comparison_window_with(range, ComparisonPolicy::default())
}

/// Comparison window for `range` under an explicit policy.
///
/// Total: dates that would fall before the earliest representable date are
/// clamped to it.
pub fn derive_comparison_window_with(range: &DateRange, policy: ComparisonPolicy) -> DateRange {
    let start = range.start();
    let span = range.end() - start;

    let comparison_end = shift_back(start, TimeDelta::days(1));
    let comparison_start = match policy {
        ComparisonPolicy::EqualLength => shift_back(start, span + TimeDelta::days(1)),
        ComparisonPolicy::StartMinusSpan => shift_back(start, span),
    };

    DateRange::from_bounds_unchecked(comparison_start, comparison_end)
}

fn shift_back(date: NaiveDate, by: TimeDelta) -> NaiveDate {
    date.checked_sub_signed(by).unwrap_or(NaiveDate::MIN)
}
