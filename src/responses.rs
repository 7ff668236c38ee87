//! Wire types for the ads REST API.
//!
//! The API encodes 64-bit integers as JSON strings and omits zero-valued
//! metrics entirely, so every numeric field here goes through a lenient
//! deserializer: a number, a numeric string, `null` or a missing field are
//! all accepted, and anything unusable becomes `0`. Rows leave this module
//! as strictly typed [`MetricRecord`]s.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{CampaignRow, CampaignStatus, MetricRecord};

/// One page of `googleAds:search` results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchRow>,
    pub next_page_token: Option<String>,
}

/// A single result row. Which sections are present depends on the query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRow {
    #[serde(default)]
    pub metrics: WireMetrics,
    #[serde(default)]
    pub segments: WireSegments,
    pub campaign: Option<WireCampaign>,
    pub customer: Option<WireCustomer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMetrics {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub impressions: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub clicks: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub cost_micros: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub conversions: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireSegments {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireCampaign {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    pub status: Option<CampaignStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCustomer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    pub descriptive_name: Option<String>,
    pub currency_code: Option<String>,
    pub time_zone: Option<String>,
}

/// Response of `customers:listAccessibleCustomers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccessibleCustomersResponse {
    #[serde(default)]
    pub resource_names: Vec<String>,
}

impl ListAccessibleCustomersResponse {
    /// Customer IDs extracted from `customers/{id}` resource names.
    pub fn customer_ids(&self) -> Vec<String> {
        self.resource_names
            .iter()
            .filter_map(|rn| rn.split('/').nth(1))
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string())
            .collect()
    }
}

/// Error envelope returned with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorResponse {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetail {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl SearchRow {
    pub fn to_metric_record(&self) -> MetricRecord {
        MetricRecord {
            impressions: self.metrics.impressions,
            clicks: self.metrics.clicks,
            cost_micros: self.metrics.cost_micros,
            conversions: self.metrics.conversions,
            date: self
                .segments
                .date
                .as_deref()
                .map(compact_date)
                .unwrap_or_default(),
        }
    }

    /// `None` when the row has no campaign section.
    pub fn to_campaign_row(&self) -> Option<CampaignRow> {
        let campaign = self.campaign.as_ref()?;
        Some(CampaignRow {
            id: campaign.id.clone(),
            name: campaign.name.clone(),
            status: campaign.status.unwrap_or_default(),
            record: self.to_metric_record(),
        })
    }
}

/// `2025-01-05` and `20250105` both become `20250105`.
pub fn compact_date(date: &str) -> String {
    date.trim().chars().filter(|c| *c != '-').collect()
}

// ---------------------------------------------------------------------------
// Lenient deserializers
// ---------------------------------------------------------------------------

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_u64).unwrap_or(0))
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_f64).unwrap_or(0.0))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn value_to_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(float_to_u64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(float_to_u64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn value_to_f64(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

fn float_to_u64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> SearchRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn string_encoded_integers_are_parsed() {
        let r = row(json!({
            "metrics": {"impressions": "1000", "clicks": "50", "costMicros": "1000000", "conversions": 5.0},
            "segments": {"date": "2025-01-01"}
        }));
        let rec = r.to_metric_record();
        assert_eq!(rec.impressions, 1000);
        assert_eq!(rec.clicks, 50);
        assert_eq!(rec.cost_micros, 1_000_000);
        assert_eq!(rec.conversions, 5.0);
        assert_eq!(rec.date, "20250101");
    }

    #[test]
    fn missing_metrics_become_zero() {
        let rec = row(json!({"segments": {"date": "20250103"}})).to_metric_record();
        assert_eq!(rec.impressions, 0);
        assert_eq!(rec.clicks, 0);
        assert_eq!(rec.cost_micros, 0);
        assert_eq!(rec.conversions, 0.0);
        assert_eq!(rec.date, "20250103");
    }

    #[test]
    fn null_and_garbage_values_become_zero() {
        let rec = row(json!({
            "metrics": {"impressions": null, "clicks": "abc", "costMicros": -5, "conversions": "n/a"}
        }))
        .to_metric_record();
        assert_eq!(rec.impressions, 0);
        assert_eq!(rec.clicks, 0);
        assert_eq!(rec.cost_micros, 0);
        assert_eq!(rec.conversions, 0.0);
        assert_eq!(rec.date, "");
    }

    #[test]
    fn fractional_integer_fields_truncate() {
        let rec = row(json!({"metrics": {"clicks": "12.7", "impressions": 99.9}})).to_metric_record();
        assert_eq!(rec.clicks, 12);
        assert_eq!(rec.impressions, 99);
    }

    #[test]
    fn conversions_accept_numeric_strings() {
        let rec = row(json!({"metrics": {"conversions": "2.5"}})).to_metric_record();
        assert_eq!(rec.conversions, 2.5);
    }

    #[test]
    fn campaign_row_reads_numeric_id_and_status() {
        let r = row(json!({
            "campaign": {"id": 123, "name": "Brand", "status": "PAUSED"},
            "metrics": {"clicks": "7"}
        }));
        let c = r.to_campaign_row().unwrap();
        assert_eq!(c.id, "123");
        assert_eq!(c.name, "Brand");
        assert_eq!(c.status, CampaignStatus::Paused);
        assert_eq!(c.record.clicks, 7);
    }

    #[test]
    fn unknown_campaign_status_is_tolerated() {
        let r = row(json!({"campaign": {"id": "9", "name": "X", "status": "UNSPECIFIED"}}));
        assert_eq!(r.to_campaign_row().unwrap().status, CampaignStatus::Unknown);
    }

    #[test]
    fn null_campaign_name_and_status_are_tolerated() {
        let r = row(json!({"campaign": {"id": "9", "name": null, "status": null}}));
        let c = r.to_campaign_row().unwrap();
        assert_eq!(c.id, "9");
        assert_eq!(c.name, "");
        assert_eq!(c.status, CampaignStatus::default());
        assert_eq!(c.status, CampaignStatus::Unknown);
    }

    #[test]
    fn row_without_campaign_has_no_campaign_row() {
        assert!(row(json!({"metrics": {}})).to_campaign_row().is_none());
    }

    #[test]
    fn customer_ids_from_resource_names() {
        let resp: ListAccessibleCustomersResponse = serde_json::from_value(json!({
            "resourceNames": ["customers/1234567890", "customers/42", "bogus"]
        }))
        .unwrap();
        assert_eq!(resp.customer_ids(), vec!["1234567890", "42"]);
    }

    #[test]
    fn search_response_defaults_to_empty() {
        let resp: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.results.is_empty());
        assert!(resp.next_page_token.is_none());
    }
}
