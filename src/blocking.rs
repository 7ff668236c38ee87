//! Synchronous wrapper around [`Dashboard`] for callers without an async
//! runtime.
//!
//! Owns a current-thread Tokio runtime and blocks on each operation. The
//! two window fetches still run concurrently inside that runtime.
//!
//! # Example
//!
//! ```no_run
//! use ads_insights_sdk::blocking::BlockingDashboard;
//! use ads_insights_sdk::{DateRange, DemoSource};
//!
//! let dashboard = BlockingDashboard::new(DemoSource::new()).unwrap();
//! let range = DateRange::parse("2025-01-01", "2025-01-31").unwrap();
//! let stats = dashboard.stats("DEMO-001", &range).unwrap();
//! println!("spent {:.2}", stats.current.cost);
//! ```

use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::models::{AdAccount, Campaign, DashboardStats, DateRange, KpiSummary};
use crate::source::AdDataSource;
use crate::window::ComparisonPolicy;

/// Blocking facade over [`Dashboard`].
///
/// Must not be used from inside an async runtime: blocking on the inner
/// runtime from an async task panics.
pub struct BlockingDashboard<S> {
    runtime: tokio::runtime::Runtime,
    inner: Dashboard<S>,
}

impl<S: AdDataSource> BlockingDashboard<S> {
    /// Wrap `source` in a dashboard with its own runtime.
    pub fn new(source: S) -> Result<Self> {
        Self::from_dashboard(Dashboard::new(source))
    }

    /// Wrap an already configured [`Dashboard`].
    pub fn from_dashboard(inner: Dashboard<S>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { runtime, inner })
    }

    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.inner = self.inner.with_policy(policy);
        self
    }

    pub fn accounts(&self) -> Result<Vec<AdAccount>> {
        self.runtime.block_on(self.inner.accounts())
    }

    pub fn stats(&self, account_id: &str, range: &DateRange) -> Result<DashboardStats> {
        self.runtime.block_on(self.inner.stats(account_id, range))
    }

    pub fn campaigns(&self, account_id: &str) -> Result<Vec<Campaign>> {
        self.runtime.block_on(self.inner.campaigns(account_id))
    }

    pub fn kpis(&self, stats: &DashboardStats) -> KpiSummary {
        self.inner.kpis(stats)
    }

    /// The wrapped async dashboard.
    pub fn inner(&self) -> &Dashboard<S> {
        &self.inner
    }
}
