//! The data-source seam between the dashboard engine and the ads platform.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{AdAccount, CampaignRow, DateRange, MetricRecord};

/// Where the dashboard gets its raw rows from.
///
/// [`AdsClient`](crate::client::AdsClient) talks to the live API and
/// [`DemoSource`](crate::demo::DemoSource) serves canned data; tests plug in
/// their own fixtures. Implementations own their credentials, timeouts and
/// retry behaviour. The engine never retries.
#[async_trait]
pub trait AdDataSource: Send + Sync {
    /// Accounts the current credentials can access.
    async fn fetch_accounts(&self) -> Result<Vec<AdAccount>>;

    /// Daily metric rows for `account_id` within `range` (inclusive).
    async fn fetch_rows(&self, account_id: &str, range: &DateRange) -> Result<Vec<MetricRecord>>;

    /// Campaign inventory with each campaign's metric totals.
    async fn fetch_campaigns(&self, account_id: &str) -> Result<Vec<CampaignRow>>;
}

#[async_trait]
impl<S: AdDataSource + ?Sized> AdDataSource for Arc<S> {
    async fn fetch_accounts(&self) -> Result<Vec<AdAccount>> {
        (**self).fetch_accounts().await
    }

    async fn fetch_rows(&self, account_id: &str, range: &DateRange) -> Result<Vec<MetricRecord>> {
        (**self).fetch_rows(account_id, range).await
    }

    async fn fetch_campaigns(&self, account_id: &str) -> Result<Vec<CampaignRow>> {
        (**self).fetch_campaigns(account_id).await
    }
}
