//! HTTP client for the upstream launches API (SpaceX v3).
//!
//! Read-only REST collaborator:
//! - `GET /launches` -> JSON array of launch records
//! - `GET /launches/{flight_number}` -> JSON object, or an empty/null body
//!   when the flight number does not resolve
//!
//! NotFound is not an error here: a well-formed "nothing there" response is
//! `Ok(None)`. Everything else (connect failures, non-success statuses,
//! malformed bodies) surfaces as [`UpstreamError`].

use std::sync::{Arc, OnceLock};

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::model::Launch;

/// Default upstream when no configuration is provided.
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v3";

/// Failure reading from the upstream launches API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("launches API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("launches API returned status {0}")]
    Status(StatusCode),

    #[error("launches API returned a malformed body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Client for the upstream launches API.
#[derive(Clone)]
pub struct LaunchesClient {
    base_url: String,
    client: Client,
}

impl LaunchesClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Fetch the full launch collection, typed and normalized.
    pub async fn launches(&self) -> Result<Vec<Launch>, UpstreamError> {
        let url = format!("{}/launches", self.base_url);
        debug!(%url, "fetching launch collection");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let launches: Vec<Launch> = response.json().await?;
        debug!(count = launches.len(), "launch collection fetched");
        Ok(launches)
    }

    /// Fetch one launch by flight number.
    ///
    /// Returns `Ok(None)` when the upstream signals absence: a 404, or a
    /// success response carrying an empty or `null` body.
    pub async fn launch(&self, flight_number: u32) -> Result<Option<Launch>, UpstreamError> {
        let url = format!("{}/launches/{}", self.base_url, flight_number);
        debug!(%url, flight_number, "fetching launch record");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let launch: Launch = serde_json::from_str(body)?;
        Ok(Some(launch))
    }

    /// Fetch the launch collection body verbatim, for the proxy endpoint.
    ///
    /// No parsing beyond the status check: upstream-injected fields are
    /// relayed untouched.
    pub async fn launches_raw(&self) -> Result<String, UpstreamError> {
        let url = format!("{}/launches", self.base_url);
        debug!(%url, "fetching launch collection (raw relay)");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}

static SHARED: OnceLock<Arc<LaunchesClient>> = OnceLock::new();

/// Install the process-wide client (called once from `main` after config
/// load). Later calls are no-ops.
pub fn install(client: Arc<LaunchesClient>) {
    let _ = SHARED.set(client);
}

/// The process-wide client used by server functions. Falls back to the
/// default upstream when `install` was never called (e.g. under `dx serve`).
pub fn shared() -> Arc<LaunchesClient> {
    SHARED
        .get_or_init(|| Arc::new(LaunchesClient::new(DEFAULT_BASE_URL)))
        .clone()
}
