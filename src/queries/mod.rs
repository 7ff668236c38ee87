//! Query modules for the ads API.
//!
//! Each module provides a query struct that borrows an
//! [`AdsClient`](crate::client::AdsClient) and exposes async methods
//! returning strictly typed rows, plus a free function producing the query
//! text so it can be inspected without a network round-trip.

pub mod accounts;
pub mod campaigns;
pub mod metrics;

pub use accounts::{customer_details_query, AccountQuery};
pub use campaigns::{campaign_inventory_query, CampaignQuery};
pub use metrics::{daily_metrics_query, MetricQuery};
