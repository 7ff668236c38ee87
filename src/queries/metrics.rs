//! Daily account-level metrics.

use crate::client::AdsClient;
use crate::error::Result;
use crate::models::{DateRange, MetricRecord};
use crate::query_builder::QueryBuilder;

pub(crate) const METRIC_FIELDS: [&str; 4] = [
    "metrics.impressions",
    "metrics.clicks",
    "metrics.cost_micros",
    "metrics.conversions",
];

/// Query text selecting one metrics row per day of `range`.
pub fn daily_metrics_query(range: &DateRange) -> String {
    let (start, end) = range.compact_bounds();
    QueryBuilder::new("customer")
        .select(&METRIC_FIELDS)
        .select(&["segments.date"])
        .where_between("segments.date", &start, &end)
        .build()
}

// ---------------------------------------------------------------------------
// MetricQuery
// ---------------------------------------------------------------------------

/// Query interface for daily metric rows.
pub struct MetricQuery<'a> {
    client: &'a AdsClient,
}

impl<'a> MetricQuery<'a> {
    /// Create a new `MetricQuery` bound to the given client.
    pub fn new(client: &'a AdsClient) -> Self {
        Self { client }
    }

    /// Fetch the daily rows for `customer_id` within `range`.
    ///
    /// Rows come back in API order; nothing is sorted or merged here.
    pub async fn daily(&self, customer_id: &str, range: &DateRange) -> Result<Vec<MetricRecord>> {
        let query = daily_metrics_query(range);
        let rows = self.client.search(customer_id, &query).await?;
        Ok(rows.iter().map(|r| r.to_metric_record()).collect())
    }
}
