use serde::{Deserialize, Serialize};
use std::fmt;

use super::metrics::{MetricData, MetricRecord};

// ---------------------------------------------------------------------------
// CampaignStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Enabled,
    Paused,
    Removed,
    /// Any status the platform reports that this crate does not know about.
    #[serde(other)]
    #[default]
    Unknown,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Enabled => "ENABLED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Removed => "REMOVED",
            CampaignStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CampaignRow — Raw campaign inventory row (data source output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRow {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub record: MetricRecord,
}

// ---------------------------------------------------------------------------
// Campaign — Inventory entry with derived metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub metrics: MetricData,
}

impl From<&CampaignRow> for Campaign {
    fn from(row: &CampaignRow) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            status: row.status,
            metrics: MetricData::from_record(&row.record),
        }
    }
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        let metrics = MetricData::from_record(&row.record);
        Self {
            id: row.id,
            name: row.name,
            status: row.status,
            metrics,
        }
    }
}
