//! Offline data source with canned accounts, campaigns and daily rows.
//!
//! Daily rows are derived from the account ID and the date, so the same
//! request always yields the same numbers and ranges overlap consistently.

use async_trait::async_trait;
use chrono::Datelike;

use crate::error::{AdsError, Result};
use crate::models::{AdAccount, CampaignRow, CampaignStatus, DateRange, MetricRecord};
use crate::source::AdDataSource;

const MICROS: u64 = 1_000_000;

/// Data source for demo mode; needs no credentials.
#[derive(Debug, Clone, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }

    pub fn accounts() -> Vec<AdAccount> {
        vec![
            demo_account("DEMO-001", "Restaurante L'Artiste (Demo)"),
            demo_account("DEMO-002", "Pizzaria Verace (Demo)"),
        ]
    }

    fn check_account(account_id: &str) -> Result<()> {
        if Self::accounts().iter().any(|a| a.id == account_id) {
            Ok(())
        } else {
            Err(AdsError::Fetch(format!("Unknown demo account '{}'", account_id)))
        }
    }
}

#[async_trait]
impl AdDataSource for DemoSource {
    async fn fetch_accounts(&self) -> Result<Vec<AdAccount>> {
        Ok(Self::accounts())
    }

    async fn fetch_rows(&self, account_id: &str, range: &DateRange) -> Result<Vec<MetricRecord>> {
        Self::check_account(account_id)?;
        let salt = account_salt(account_id);
        Ok(range
            .start()
            .iter_days()
            .take_while(|d| *d <= range.end())
            .map(|date| {
                let seed = mix(date.num_days_from_ce() as u64 ^ salt);
                let variation = seed % 500;
                let impressions = 2_500 + variation * 2;
                let clicks = impressions * 47 / 1_000;
                MetricRecord {
                    impressions,
                    clicks,
                    cost_micros: (300 + variation) * MICROS + (seed % 100) * 10_000,
                    conversions: (clicks / 9) as f64,
                    date: date.format("%Y%m%d").to_string(),
                }
            })
            .collect())
    }

    async fn fetch_campaigns(&self, account_id: &str) -> Result<Vec<CampaignRow>> {
        Self::check_account(account_id)?;
        Ok(vec![
            demo_campaign("1", "ESTRATÉGIA: Menu Degustação (Conversão)", CampaignStatus::Enabled, 22_000, 1_100, 4_500_000_000, 120.0),
            demo_campaign("2", "ESTRATÉGIA: Reservas Sexta/Sábado", CampaignStatus::Enabled, 34_000, 1_500, 3_200_000_000, 185.0),
            demo_campaign("3", "TOPO DE FUNIL: Institucional & Atmosfera", CampaignStatus::Enabled, 18_000, 900, 2_800_000_000, 45.0),
            demo_campaign("4", "REMARKETING: Carrinho Abandonado Delivery", CampaignStatus::Paused, 15_000, 700, 1_950_800_000, 102.0),
        ])
    }
}

fn demo_account(id: &str, name: &str) -> AdAccount {
    AdAccount {
        id: id.to_string(),
        name: name.to_string(),
        currency_code: "BRL".to_string(),
        time_zone: "America/Sao_Paulo".to_string(),
    }
}

fn demo_campaign(
    id: &str,
    name: &str,
    status: CampaignStatus,
    impressions: u64,
    clicks: u64,
    cost_micros: u64,
    conversions: f64,
) -> CampaignRow {
    CampaignRow {
        id: id.to_string(),
        name: name.to_string(),
        status,
        record: MetricRecord {
            impressions,
            clicks,
            cost_micros,
            conversions,
            date: String::new(),
        },
    }
}

fn account_salt(account_id: &str) -> u64 {
    account_id
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325, |h, b| (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3))
}

// splitmix64 finalizer
fn mix(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
