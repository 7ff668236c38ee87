//! Ads insights SDK for Rust.
//!
//! Fetches daily metrics and campaign inventory from an advertising
//! platform's REST API and turns them into what a marketing dashboard shows:
//! current vs. previous period totals with derived CTR, CPC and CPA, a daily
//! spend trend, KPI deltas and a campaign table.
//!
//! The engine (aggregation, windows, trend) is pure and runtime-agnostic.
//! Data comes from an [`AdDataSource`]: the HTTP [`AdsClient`], the offline
//! [`DemoSource`], or your own implementation.
//!
//! # Quick start
//!
//! ```no_run
//! use ads_insights_sdk::{AdsClient, Credentials, Dashboard, DateRange};
//!
//! # async fn example() -> ads_insights_sdk::Result<()> {
//! let client = AdsClient::builder()
//!     .credentials(Credentials::from_env()?)
//!     .build()?;
//! let dashboard = Dashboard::new(client);
//!
//! let range = DateRange::parse("2025-01-10", "2025-01-19")?;
//! let stats = dashboard.stats("1234567890", &range).await?;
//! let kpis = dashboard.kpis(&stats);
//! println!("cost {:.2} ({:+.1}%)", stats.current.cost, kpis.cost.percent_change);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod currency;
pub mod dashboard;
pub mod demo;
pub mod error;
pub mod load;
pub mod models;
pub mod queries;
pub mod query_builder;
pub mod responses;
pub mod source;
pub mod trend;
pub mod window;

pub use aggregate::aggregate;
#[cfg(feature = "blocking")]
pub use blocking::BlockingDashboard;
pub use client::{AdsClient, AdsClientBuilder};
pub use config::Credentials;
pub use currency::to_decimal_currency;
pub use dashboard::{assemble_stats, compose_dashboard, compose_dashboard_with, Dashboard};
pub use demo::DemoSource;
pub use error::{AdsError, Result};
pub use load::{LoadTicket, LoadTracker};
pub use models::{
    AdAccount, Campaign, CampaignRow, CampaignStatus, DashboardStats, DateRange, KpiDelta,
    KpiSummary, MetricData, MetricRecord, TrendPoint,
};
pub use query_builder::QueryBuilder;
pub use source::AdDataSource;
pub use trend::{aggregate_by_date, build_trend};
pub use window::{derive_comparison_window, derive_comparison_window_with, ComparisonPolicy};
