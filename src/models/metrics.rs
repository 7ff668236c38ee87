use serde::{Deserialize, Serialize};

use crate::currency::to_decimal_currency;

// ---------------------------------------------------------------------------
// MetricRecord — One raw row from the data source
// ---------------------------------------------------------------------------

/// A single row of platform metrics, already normalized at the wire boundary.
///
/// `date` is the compact `YYYYMMDD` form. Campaign rows, which are not
/// segmented by day, carry an empty date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub impressions: u64,
    pub clicks: u64,
    pub cost_micros: u64,
    pub conversions: f64,
    pub date: String,
}

// ---------------------------------------------------------------------------
// MetricData — Totals plus derived ratios
// ---------------------------------------------------------------------------

/// Summed metrics and the ratios derived from them.
///
/// `roas` is always `0.0`: the daily metrics carry no conversion value, so
/// there is no revenue to divide by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricData {
    pub impressions: u64,
    pub clicks: u64,
    pub cost: f64,
    pub conversions: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub cpa: f64,
    pub roas: f64,
}

impl MetricData {
    /// Derive ratios from already-summed totals.
    pub fn from_totals(impressions: u64, clicks: u64, cost: f64, conversions: f64) -> Self {
        let ctr = if impressions > 0 {
            clicks as f64 / impressions as f64
        } else {
            0.0
        };
        let cpc = if clicks > 0 { cost / clicks as f64 } else { 0.0 };
        let cpa = if conversions > 0.0 {
            cost / conversions
        } else {
            0.0
        };

        Self {
            impressions,
            clicks,
            cost,
            conversions,
            ctr,
            cpc,
            cpa,
            roas: 0.0,
        }
    }

    /// Metrics for a row that already represents one entity's totals.
    pub fn from_record(record: &MetricRecord) -> Self {
        Self::from_totals(
            record.impressions,
            record.clicks,
            to_decimal_currency(record.cost_micros),
            record.conversions,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.impressions == 0 && self.clicks == 0 && self.cost == 0.0 && self.conversions == 0.0
    }
}
