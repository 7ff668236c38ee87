#[derive(Debug, thiserror::Error)]
pub enum AdsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Credentials not set")]
    MissingCredentials,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AdsError {
    /// Whether the data source rejected or could not complete a request.
    ///
    /// Argument and credential errors are raised before any request is sent
    /// and are not fetch failures.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AdsError::Http(_) | AdsError::Json(_) | AdsError::Api { .. } | AdsError::Fetch(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AdsError>;
