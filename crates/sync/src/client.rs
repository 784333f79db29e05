//! HTTP client for the published `models.json`.

use modelcat_core::catalog::Company;
use modelcat_core::transfer::parse_dataset;

/// Branch of the upstream repository the dataset is read from by default.
pub const DEFAULT_BRANCH: &str = "develop";

/// Build the raw download URL of the dataset on a given branch.
pub fn dataset_url(branch: &str) -> String {
    format!("https://raw.githubusercontent.com/betagouv/ComparIA/{branch}/utils/models/models.json")
}

/// Errors from fetching the dataset.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Dataset source error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body is not a non-empty array of companies.
    #[error("Invalid dataset payload: {0}")]
    InvalidPayload(String),
}

/// Downloads the catalog from a fixed URL. No retries.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    client: reqwest::Client,
    url: String,
}

impl DatasetClient {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    /// Client for the dataset on `branch` of the upstream repository.
    pub fn for_branch(branch: &str) -> Self {
        Self::new(dataset_url(branch))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download and parse the dataset.
    ///
    /// An empty array is treated as a failure: an upstream that suddenly
    /// publishes nothing should never wipe an editing session.
    pub async fn fetch_dataset(&self) -> Result<Vec<Company>, SyncError> {
        tracing::debug!(url = %self.url, "Fetching dataset");

        let response = self.client.get(&self.url).send().await?;
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;

        let companies =
            parse_dataset(&text).map_err(|e| SyncError::InvalidPayload(e.to_string()))?;
        if companies.is_empty() {
            return Err(SyncError::InvalidPayload("dataset is empty".into()));
        }

        tracing::info!(url = %self.url, companies = companies.len(), "Dataset fetched");
        Ok(companies)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`SyncError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SyncError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SyncError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
