use serde::{Deserialize, Serialize};

use super::metrics::MetricData;

// ---------------------------------------------------------------------------
// TrendPoint — One point on the spend chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Compact `YYYYMMDD` date; zero-padded, so lexical order is date order.
    pub date: String,
    /// Spend for the row, in currency units.
    pub value: f64,
    /// Reserved for an aligned comparison series; `0.0` for fetched data.
    pub comparison_value: f64,
}

// ---------------------------------------------------------------------------
// DashboardStats — Everything one dashboard load produces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub current: MetricData,
    pub comparison: MetricData,
    pub trend: Vec<TrendPoint>,
}

// ---------------------------------------------------------------------------
// KpiDelta / KpiSummary — Period-over-period changes for KPI cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDelta {
    pub current: f64,
    pub previous: f64,
    /// `(current / previous - 1) * 100`, dividing by 1 when `previous` is 0.
    pub percent_change: f64,
}

impl KpiDelta {
    pub fn between(current: f64, previous: f64) -> Self {
        let base = if previous == 0.0 || previous.is_nan() {
            1.0
        } else {
            previous
        };
        Self {
            current,
            previous,
            percent_change: (current / base - 1.0) * 100.0,
        }
    }

    pub fn is_increase(&self) -> bool {
        self.percent_change > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub cost: KpiDelta,
    pub conversions: KpiDelta,
    pub cpa: KpiDelta,
    pub impressions: KpiDelta,
}

impl KpiSummary {
    pub fn from_stats(stats: &DashboardStats) -> Self {
        let (cur, cmp) = (&stats.current, &stats.comparison);
        Self {
            cost: KpiDelta::between(cur.cost, cmp.cost),
            conversions: KpiDelta::between(cur.conversions, cmp.conversions),
            cpa: KpiDelta::between(cur.cpa, cmp.cpa),
            impressions: KpiDelta::between(cur.impressions as f64, cmp.impressions as f64),
        }
    }
}
