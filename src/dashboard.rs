//! Dashboard composition: dual-window fetch, aggregation and trend.

use futures::try_join;

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::load::{LoadTicket, LoadTracker};
use crate::models::{AdAccount, Campaign, DashboardStats, DateRange, KpiSummary, MetricRecord};
use crate::source::AdDataSource;
use crate::trend::build_trend;
use crate::window::{derive_comparison_window_with, ComparisonPolicy};

/// Fetch the primary and comparison windows and build [`DashboardStats`],
/// using the default [`ComparisonPolicy`].
pub async fn compose_dashboard<S>(
    source: &S,
    account_id: &str,
    range: &DateRange,
) -> Result<DashboardStats>
where
    S: AdDataSource + ?Sized,
{
    compose_dashboard_with(source, account_id, range, ComparisonPolicy::default()).await
}

/// Like [`compose_dashboard`] with an explicit comparison policy.
///
/// Both windows are fetched concurrently. If either fetch fails the whole
/// composition fails with that error and the other result is dropped; there
/// is no partial dashboard and no retry.
pub async fn compose_dashboard_with<S>(
    source: &S,
    account_id: &str,
    range: &DateRange,
    policy: ComparisonPolicy,
) -> Result<DashboardStats>
where
    S: AdDataSource + ?Sized,
{
    let comparison_range = derive_comparison_window_with(range, policy);

    let (current_rows, comparison_rows) = try_join!(
        source.fetch_rows(account_id, range),
        source.fetch_rows(account_id, &comparison_range)
    )?;

    tracing::info!(
        account = account_id,
        current = %range,
        comparison = %comparison_range,
        current_rows = current_rows.len(),
        comparison_rows = comparison_rows.len(),
        "dashboard composed"
    );

    Ok(assemble_stats(&current_rows, &comparison_rows))
}

/// Build [`DashboardStats`] from already-fetched rows.
///
/// The trend is taken from the current rows only.
pub fn assemble_stats(current_rows: &[MetricRecord], comparison_rows: &[MetricRecord]) -> DashboardStats {
    DashboardStats {
        current: aggregate(current_rows),
        comparison: aggregate(comparison_rows),
        trend: build_trend(current_rows),
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Stateless dashboard engine bound to one data source.
///
/// The only state kept is the [`LoadTracker`] used by [`load`](Self::load)
/// to drop results of superseded requests.
pub struct Dashboard<S> {
    source: S,
    policy: ComparisonPolicy,
    tracker: LoadTracker,
}

impl<S: AdDataSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: ComparisonPolicy::default(),
            tracker: LoadTracker::new(),
        }
    }

    /// Choose how the comparison window is derived.
    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn policy(&self) -> ComparisonPolicy {
        self.policy
    }

    pub fn tracker(&self) -> &LoadTracker {
        &self.tracker
    }

    /// Accounts the data source can access.
    pub async fn accounts(&self) -> Result<Vec<AdAccount>> {
        self.source.fetch_accounts().await
    }

    /// Current and comparison totals plus the trend for `range`.
    pub async fn stats(&self, account_id: &str, range: &DateRange) -> Result<DashboardStats> {
        compose_dashboard_with(&self.source, account_id, range, self.policy).await
    }

    /// Campaign inventory with per-campaign derived metrics.
    pub async fn campaigns(&self, account_id: &str) -> Result<Vec<Campaign>> {
        let rows = self.source.fetch_campaigns(account_id).await?;
        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    /// Start a load, superseding any load still in flight.
    pub fn begin_load(&self) -> LoadTicket {
        self.tracker.begin()
    }

    /// Compose stats for a load started with [`begin_load`](Self::begin_load).
    ///
    /// Returns `Ok(None)` if another load began while this one was fetching.
    /// A superseded load's error is dropped along with its result.
    pub async fn load(
        &self,
        ticket: LoadTicket,
        account_id: &str,
        range: &DateRange,
    ) -> Result<Option<DashboardStats>> {
        let result = self.stats(account_id, range).await;
        if !self.tracker.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                account = account_id,
                "discarding superseded dashboard load"
            );
            return Ok(None);
        }
        result.map(Some)
    }

    /// Period-over-period changes for the KPI cards.
    pub fn kpis(&self, stats: &DashboardStats) -> KpiSummary {
        KpiSummary::from_stats(stats)
    }
}
