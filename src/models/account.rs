use serde::{Deserialize, Serialize};

/// An advertising account the credentials can access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdAccount {
    pub id: String,
    pub name: String,
    pub currency_code: String,
    pub time_zone: String,
}
