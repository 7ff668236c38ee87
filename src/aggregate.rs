//! Reduction of raw metric rows into totals and derived ratios.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::currency::to_decimal_currency;
use crate::models::{MetricData, MetricRecord};

/// Sum `rows` and derive CTR, CPC and CPA.
///
/// An empty input yields all-zero metrics. The result does not depend on the
/// order of `rows`: spend is summed in integer micro-units and conversions in
/// fixed-point decimal, so no floating-point rounding accumulates.
pub fn aggregate<'a, I>(rows: I) -> MetricData
where
    I: IntoIterator<Item = &'a MetricRecord>,
{
    let mut totals = RecordTotals::default();
    for row in rows {
        totals.add(row);
    }
    totals.to_metric_data()
}

/// Running sums over a group of rows.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordTotals {
    impressions: u64,
    clicks: u64,
    cost_micros: u64,
    conversions: Decimal,
}

impl RecordTotals {
    pub(crate) fn add(&mut self, row: &MetricRecord) {
        self.impressions = self.impressions.saturating_add(row.impressions);
        self.clicks = self.clicks.saturating_add(row.clicks);
        self.cost_micros = self.cost_micros.saturating_add(row.cost_micros);
        self.conversions = self
            .conversions
            .checked_add(conversions_to_decimal(row.conversions))
            .unwrap_or(Decimal::MAX);
    }

    pub(crate) fn conversions(&self) -> f64 {
        self.conversions.to_f64().unwrap_or(0.0)
    }

    pub(crate) fn to_metric_data(&self) -> MetricData {
        MetricData::from_totals(
            self.impressions,
            self.clicks,
            to_decimal_currency(self.cost_micros),
            self.conversions(),
        )
    }

    /// Collapse the group back into a single row for `date`.
    pub(crate) fn to_record(&self, date: String) -> MetricRecord {
        MetricRecord {
            impressions: self.impressions,
            clicks: self.clicks,
            cost_micros: self.cost_micros,
            conversions: self.conversions(),
            date,
        }
    }
}

// NaN, infinities and negatives count as no conversions; values beyond the
// decimal range saturate.
fn conversions_to_decimal(value: f64) -> Decimal {
    if !value.is_finite() || value <= 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::MAX)
}
