use std::env;
use std::time::Duration;

use crate::error::{AdsError, Result};

pub const API_BASE: &str = "https://googleads.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v18";

/// Platform currency amounts are integers scaled by this factor.
pub const MICROS_PER_UNIT: f64 = 1_000_000.0;

/// Days covered by the dashboard when no range has been picked yet.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on pages followed by a single search.
pub const MAX_SEARCH_PAGES: usize = 1_000;

pub const DEFAULT_CURRENCY: &str = "BRL";
pub const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";

pub const ENV_ACCESS_TOKEN: &str = "ADS_ACCESS_TOKEN";
pub const ENV_DEVELOPER_TOKEN: &str = "ADS_DEVELOPER_TOKEN";
pub const ENV_LOGIN_CUSTOMER_ID: &str = "ADS_LOGIN_CUSTOMER_ID";

/// Tokens sent with every API request.
///
/// Obtaining the OAuth access token is the caller's job; this type only
/// carries it.
#[derive(Clone)]
pub struct Credentials {
    pub access_token: String,
    pub developer_token: String,
    /// Manager account to act through, sent as `login-customer-id`.
    pub login_customer_id: Option<String>,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, developer_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            developer_token: developer_token.into(),
            login_customer_id: None,
        }
    }

    pub fn with_login_customer_id(mut self, id: impl Into<String>) -> Self {
        self.login_customer_id = Some(id.into());
        self
    }

    /// Read credentials from `ADS_ACCESS_TOKEN`, `ADS_DEVELOPER_TOKEN` and
    /// the optional `ADS_LOGIN_CUSTOMER_ID`.
    pub fn from_env() -> Result<Self> {
        let access_token = env::var(ENV_ACCESS_TOKEN).map_err(|_| AdsError::MissingCredentials)?;
        let developer_token =
            env::var(ENV_DEVELOPER_TOKEN).map_err(|_| AdsError::MissingCredentials)?;
        let login_customer_id = env::var(ENV_LOGIN_CUSTOMER_ID)
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            access_token,
            developer_token,
            login_customer_id,
        })
    }

    /// Both tokens are present and non-blank.
    pub fn is_complete(&self) -> bool {
        !self.access_token.trim().is_empty() && !self.developer_token.trim().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("developer_token", &"<redacted>")
            .field("login_customer_id", &self.login_customer_id)
            .finish()
    }
}
