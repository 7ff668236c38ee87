//! Daily spend series for the trend chart.

use std::collections::BTreeMap;

use crate::aggregate::RecordTotals;
use crate::currency::to_decimal_currency;
use crate::models::{MetricRecord, TrendPoint};

/// Map each row to a [`TrendPoint`] and sort ascending by date.
///
/// Rows are not merged: if the source returns several rows for one date
/// (e.g. one per campaign), the trend contains that date several times.
/// Run the rows through [`aggregate_by_date`] first to get one point per day.
pub fn build_trend<'a, I>(rows: I) -> Vec<TrendPoint>
where
    I: IntoIterator<Item = &'a MetricRecord>,
{
    let mut points: Vec<TrendPoint> = rows
        .into_iter()
        .map(|row| TrendPoint {
            date: row.date.clone(),
            value: to_decimal_currency(row.cost_micros),
            comparison_value: 0.0,
        })
        .collect();

    // Dates are fixed-width YYYYMMDD, so string order is chronological.
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

/// Merge rows that share a date into one row per date, ordered by date.
pub fn aggregate_by_date<'a, I>(rows: I) -> Vec<MetricRecord>
where
    I: IntoIterator<Item = &'a MetricRecord>,
{
    let mut by_date: BTreeMap<&str, RecordTotals> = BTreeMap::new();
    for row in rows {
        by_date.entry(row.date.as_str()).or_default().add(row);
    }

    by_date
        .into_iter()
        .map(|(date, totals)| totals.to_record(date.to_string()))
        .collect()
}
