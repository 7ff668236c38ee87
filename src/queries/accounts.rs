//! Accessible accounts and their descriptive details.

use futures::future::join_all;

use crate::client::AdsClient;
use crate::error::Result;
use crate::models::AdAccount;
use crate::query_builder::QueryBuilder;
use crate::responses::{ListAccessibleCustomersResponse, WireCustomer};

/// Query text for an account's name, currency and time zone.
pub fn customer_details_query() -> String {
    QueryBuilder::new("customer")
        .select(&[
            "customer.id",
            "customer.descriptive_name",
            "customer.currency_code",
            "customer.time_zone",
        ])
        .limit(1)
        .build()
}

// ---------------------------------------------------------------------------
// AccountQuery
// ---------------------------------------------------------------------------

/// Query interface for the accounts behind the client's credentials.
pub struct AccountQuery<'a> {
    client: &'a AdsClient,
}

impl<'a> AccountQuery<'a> {
    /// Create a new `AccountQuery` bound to the given client.
    pub fn new(client: &'a AdsClient) -> Self {
        Self { client }
    }

    /// IDs of every customer the credentials can access.
    pub async fn accessible_ids(&self) -> Result<Vec<String>> {
        let response: ListAccessibleCustomersResponse = self
            .client
            .get_json("customers:listAccessibleCustomers")
            .await?;
        Ok(response.customer_ids())
    }

    /// Name, currency and time zone for one account, if the API returns them.
    pub async fn details(&self, customer_id: &str) -> Result<Option<AdAccount>> {
        let rows = self
            .client
            .search(customer_id, &customer_details_query())
            .await?;
        let customer = rows.into_iter().find_map(|r| r.customer);
        Ok(customer.map(|c| self.to_account(customer_id, c)))
    }

    /// All accessible accounts with details.
    ///
    /// Listing the IDs must succeed. Details are fetched concurrently, and
    /// an account whose details fail to load is still returned, named
    /// `Account {id}` with the client's default currency and time zone.
    pub async fn list(&self) -> Result<Vec<AdAccount>> {
        let ids = self.accessible_ids().await?;
        let details = join_all(ids.iter().map(|id| self.details(id))).await;

        Ok(ids
            .iter()
            .zip(details)
            .map(|(id, result)| match result {
                Ok(Some(account)) => account,
                Ok(None) => self.placeholder(id),
                Err(e) => {
                    tracing::warn!(account = %id, error = %e, "account details unavailable, using defaults");
                    self.placeholder(id)
                }
            })
            .collect())
    }

    fn to_account(&self, customer_id: &str, customer: WireCustomer) -> AdAccount {
        let id = if customer.id.is_empty() {
            customer_id.to_string()
        } else {
            customer.id
        };
        AdAccount {
            name: customer
                .descriptive_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| format!("Account {}", id)),
            currency_code: customer
                .currency_code
                .unwrap_or_else(|| self.client.default_currency.clone()),
            time_zone: customer
                .time_zone
                .unwrap_or_else(|| self.client.default_time_zone.clone()),
            id,
        }
    }

    fn placeholder(&self, id: &str) -> AdAccount {
        AdAccount {
            id: id.to_string(),
            name: format!("Account {}", id),
            currency_code: self.client.default_currency.clone(),
            time_zone: self.client.default_time_zone.clone(),
        }
    }
}
