//! Campaign inventory with per-campaign metric totals.

use crate::client::AdsClient;
use crate::error::Result;
use crate::models::CampaignRow;
use crate::query_builder::QueryBuilder;

use super::metrics::METRIC_FIELDS;

/// Query text for every campaign that has not been removed.
pub fn campaign_inventory_query() -> String {
    QueryBuilder::new("campaign")
        .select(&["campaign.id", "campaign.name", "campaign.status"])
        .select(&METRIC_FIELDS)
        .where_ne("campaign.status", "REMOVED")
        .build()
}

// ---------------------------------------------------------------------------
// CampaignQuery
// ---------------------------------------------------------------------------

/// Query interface for the campaign inventory.
pub struct CampaignQuery<'a> {
    client: &'a AdsClient,
}

impl<'a> CampaignQuery<'a> {
    /// Create a new `CampaignQuery` bound to the given client.
    pub fn new(client: &'a AdsClient) -> Self {
        Self { client }
    }

    /// List campaigns for `customer_id` with their metric totals.
    ///
    /// Rows without a campaign section are skipped.
    pub async fn list(&self, customer_id: &str) -> Result<Vec<CampaignRow>> {
        let rows = self
            .client
            .search(customer_id, &campaign_inventory_query())
            .await?;
        Ok(rows.iter().filter_map(|r| r.to_campaign_row()).collect())
    }
}
