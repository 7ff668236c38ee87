//! HTTP client for the ads REST API.
//!
//! [`AdsClient`] holds the credentials and a pooled `reqwest` client. It is
//! an explicit value, built once per session and passed to whatever needs
//! to fetch; cloning it is cheap and shares the connection pool.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;

use crate::config::{self, Credentials};
use crate::error::{AdsError, Result};
use crate::models::{AdAccount, CampaignRow, DateRange, MetricRecord};
use crate::queries::{AccountQuery, CampaignQuery, MetricQuery};
use crate::responses::{ApiErrorResponse, SearchResponse, SearchRow};
use crate::source::AdDataSource;

// ---------------------------------------------------------------------------
// AdsClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AdsClient`].
///
/// Use [`AdsClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AdsClientBuilder::build).
pub struct AdsClientBuilder {
    credentials: Option<Credentials>,
    base_url: String,
    api_version: String,
    timeout: Duration,
    default_currency: String,
    default_time_zone: String,
}

impl Default for AdsClientBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: config::API_BASE.to_string(),
            api_version: config::DEFAULT_API_VERSION.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            default_currency: config::DEFAULT_CURRENCY.to_string(),
            default_time_zone: config::DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

impl AdsClientBuilder {
    /// Set the access and developer tokens. Required.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the API host (e.g. for a proxy).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version path segment. Defaults to `v18`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Currency reported for accounts whose details cannot be fetched.
    pub fn default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }

    /// Time zone reported for accounts whose details cannot be fetched.
    pub fn default_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.default_time_zone = tz.into();
        self
    }

    /// Build the client.
    ///
    /// Fails with [`AdsError::MissingCredentials`] if no credentials were set
    /// or either token is blank. No request is sent.
    pub fn build(self) -> Result<AdsClient> {
        let credentials = self
            .credentials
            .filter(Credentials::is_complete)
            .ok_or(AdsError::MissingCredentials)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", credentials.access_token))?,
        );
        headers.insert("developer-token", header_value(&credentials.developer_token)?);
        if let Some(login_id) = &credentials.login_customer_id {
            headers.insert("login-customer-id", header_value(&normalize_customer_id(login_id)?)?);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        Ok(AdsClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_version: self.api_version,
            default_currency: self.default_currency,
            default_time_zone: self.default_time_zone,
        })
    }
}

// ---------------------------------------------------------------------------
// AdsClient
// ---------------------------------------------------------------------------

/// Authenticated client for the ads REST API.
///
/// Exposes the search endpoint directly and domain-specific query
/// interfaces as lightweight borrowing wrappers. Implements
/// [`AdDataSource`] so it can drive a [`Dashboard`](crate::Dashboard).
#[derive(Clone)]
pub struct AdsClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    pub(crate) default_currency: String,
    pub(crate) default_time_zone: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

impl AdsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> AdsClientBuilder {
        AdsClientBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Daily metric rows for a date range.
    pub fn metrics(&self) -> MetricQuery<'_> {
        MetricQuery::new(self)
    }

    /// Campaign inventory.
    pub fn campaigns(&self) -> CampaignQuery<'_> {
        CampaignQuery::new(self)
    }

    /// Accessible accounts and their details.
    pub fn accounts(&self) -> AccountQuery<'_> {
        AccountQuery::new(self)
    }

    // -- Raw endpoints -----------------------------------------------------

    /// Full URL for an API path, e.g. `customers:listAccessibleCustomers`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_version, path)
    }

    /// Run a query against `googleAds:search`, following page tokens until
    /// every row has been read.
    ///
    /// Fails with [`AdsError::Fetch`] if the server hands back a token that
    /// was already requested or pagination exceeds
    /// [`MAX_SEARCH_PAGES`](config::MAX_SEARCH_PAGES).
    #[tracing::instrument(name = "AdsClient::search", skip(self, query), level = "debug")]
    pub async fn search(&self, customer_id: &str, query: &str) -> Result<Vec<SearchRow>> {
        let customer_id = normalize_customer_id(customer_id)?;
        let path = format!("customers/{}/googleAds:search", customer_id);

        let mut rows = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens: HashSet<String> = HashSet::new();
        let mut pages = 0usize;

        loop {
            let body = SearchRequest {
                query,
                page_token: page_token.as_deref(),
            };
            let page: SearchResponse = self.post_json(&path, &body).await?;
            pages += 1;
            rows.extend(page.results);

            let Some(next) = page.next_page_token.filter(|t| !t.is_empty()) else {
                break;
            };
            if !seen_tokens.insert(next.clone()) {
                tracing::warn!(pages, token = %next, "search returned a page token twice");
                return Err(AdsError::Fetch(format!(
                    "Pagination loop: page token '{}' was already requested",
                    next
                )));
            }
            if pages >= config::MAX_SEARCH_PAGES {
                tracing::warn!(pages, "search page limit reached");
                return Err(AdsError::Fetch(format!(
                    "Search exceeded {} pages",
                    config::MAX_SEARCH_PAGES
                )));
            }
            page_token = Some(next);
        }

        tracing::debug!(rows = rows.len(), pages, "search complete");
        Ok(rows)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        decode_response(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        decode_response(response).await
    }
}

#[async_trait]
impl AdDataSource for AdsClient {
    async fn fetch_accounts(&self) -> Result<Vec<AdAccount>> {
        self.accounts().list().await
    }

    async fn fetch_rows(&self, account_id: &str, range: &DateRange) -> Result<Vec<MetricRecord>> {
        self.metrics().daily(account_id, range).await
    }

    async fn fetch_campaigns(&self, account_id: &str) -> Result<Vec<CampaignRow>> {
        self.campaigns().list(account_id).await
    }
}

impl std::fmt::Debug for AdsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdsClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        Ok(serde_json::from_str(&text)?)
    } else {
        Err(api_error(status.as_u16(), &text))
    }
}

/// Turn a failed response body into [`AdsError::Api`], preferring the
/// platform's own `error.message`.
pub(crate) fn api_error(status: u16, body: &str) -> AdsError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "API request failed".to_string());
    AdsError::Api { status, message }
}

/// Strip the dashes from a `123-456-7890` style ID and require digits.
pub fn normalize_customer_id(id: &str) -> Result<String> {
    let compact: String = id.trim().chars().filter(|c| *c != '-').collect();
    if compact.is_empty() || !compact.chars().all(|c| c.is_ascii_digit()) {
        return Err(AdsError::InvalidArgument(format!(
            "Invalid customer ID '{}'",
            id
        )));
    }
    Ok(compact)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| AdsError::InvalidArgument(format!("Invalid header value: {}", e)))?;
    header.set_sensitive(true);
    Ok(header)
}
