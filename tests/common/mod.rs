//! Shared test fixtures for the dashboard integration tests.
//!
//! Provides `FixtureSource`, an in-memory `AdDataSource` that serves rows
//! filtered by date range, records every requested range and can be told to
//! fail for specific windows.

#![allow(dead_code)]

pub mod http;

use ads_insights_sdk::{
    AdAccount, AdDataSource, AdsError, CampaignRow, CampaignStatus, DateRange, MetricRecord,
    Result,
};
use async_trait::async_trait;
use std::sync::Mutex;

pub struct FixtureSource {
    pub rows: Vec<MetricRecord>,
    pub campaigns: Vec<CampaignRow>,
    pub failing: Vec<DateRange>,
    pub requested: Mutex<Vec<DateRange>>,
}

impl FixtureSource {
    pub fn new(rows: Vec<MetricRecord>) -> Self {
        Self {
            rows,
            campaigns: sample_campaigns(),
            failing: Vec::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Fail every fetch for exactly `range`.
    pub fn failing_on(mut self, range: DateRange) -> Self {
        self.failing.push(range);
        self
    }

    pub fn requested(&self) -> Vec<DateRange> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdDataSource for FixtureSource {
    async fn fetch_accounts(&self) -> Result<Vec<AdAccount>> {
        Ok(vec![AdAccount {
            id: "1234567890".to_string(),
            name: "Fixture Account".to_string(),
            currency_code: "USD".to_string(),
            time_zone: "UTC".to_string(),
        }])
    }

    async fn fetch_rows(&self, _account_id: &str, range: &DateRange) -> Result<Vec<MetricRecord>> {
        self.requested.lock().unwrap().push(*range);
        if self.failing.contains(range) {
            return Err(AdsError::Api {
                status: 401,
                message: "invalid developer token".to_string(),
            });
        }
        let (start, end) = range.compact_bounds();
        Ok(self
            .rows
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    async fn fetch_campaigns(&self, _account_id: &str) -> Result<Vec<CampaignRow>> {
        Ok(self.campaigns.clone())
    }
}

pub fn row(date: &str, impressions: u64, clicks: u64, cost_micros: u64, conversions: f64) -> MetricRecord {
    MetricRecord {
        impressions,
        clicks,
        cost_micros,
        conversions,
        date: date.to_string(),
    }
}

/// Seven days (2025-01-10..=2025-01-16) of 1000 impressions, 50 clicks,
/// 1.00 spend and 5 conversions each.
pub fn week_of_rows() -> Vec<MetricRecord> {
    (10..=16)
        .map(|day| row(&format!("202501{:02}", day), 1000, 50, 1_000_000, 5.0))
        .collect()
}

/// The seven days before `week_of_rows`, at half the volume.
pub fn previous_week_rows() -> Vec<MetricRecord> {
    (3..=9)
        .map(|day| row(&format!("202501{:02}", day), 500, 25, 500_000, 2.5))
        .collect()
}

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

pub fn sample_campaigns() -> Vec<CampaignRow> {
    vec![
        CampaignRow {
            id: "111".to_string(),
            name: "Brand Search".to_string(),
            status: CampaignStatus::Enabled,
            record: row("", 20_000, 1_000, 4_000_000_000, 100.0),
        },
        CampaignRow {
            id: "222".to_string(),
            name: "Retargeting".to_string(),
            status: CampaignStatus::Paused,
            record: row("", 0, 0, 0, 0.0),
        },
    ]
}
