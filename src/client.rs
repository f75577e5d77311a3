//! HTTP client for the extension service.
//!
//! A thin facade over `reqwest`: every operation is a single request against
//! the configured base URL, with failures propagated to the caller as-is. No
//! retries, no caching, no identifier validation.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::types::{AddCustomRequest, ExtensionList};

/// Fixed configuration for an [`ExtensionClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service API, conventionally ending in `/api`
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Default timeout for API requests
    const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Url::parse("http://localhost:8080/api").expect("default base URL is valid"))
    }
}

/// Makes sure a url has a trailing slash.
///
/// `Url::join` treats `/api` and `/api/` differently: joining `extensions`
/// onto the former yields `/extensions`, onto the latter `/api/extensions`.
/// Normalize once at construction so joins keep the base path.
fn ensure_slash(url: &Url) -> Url {
    if url.path().ends_with('/') {
        url.clone()
    } else {
        let mut slashed = url.clone();
        slashed.set_path(&format!("{}/", url.path()));
        slashed
    }
}

/// Client for the blocked-extension service.
///
/// Cheap to clone; all clones share one `reqwest` connection pool. The client
/// holds no state beyond its configuration, so calls can be issued
/// concurrently without ordering concerns.
#[derive(Debug, Clone)]
pub struct ExtensionClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ExtensionClient {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: ensure_slash(&config.base_url),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetch the full blocklist: fixed extensions with their toggle state,
    /// custom extensions, and the custom-slot usage.
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Result<ExtensionList> {
        let url = self.endpoint("extensions")?;
        debug!(url = %url, "Fetching extension list");

        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Toggle the active flag of a fixed extension.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_fixed(&self, extension: &str) -> Result<()> {
        let url = self.endpoint(&format!("extensions/fixed/{extension}"))?;
        debug!(url = %url, "Toggling fixed extension");

        let response = self.client.patch(url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Register a custom extension.
    #[tracing::instrument(skip(self))]
    pub async fn add_custom(&self, extension: &str) -> Result<()> {
        let url = self.endpoint("extensions/custom")?;
        debug!(url = %url, "Adding custom extension");

        let body = AddCustomRequest {
            extension: extension.to_string(),
        };
        let response = self.client.post(url).json(&body).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Remove a custom extension.
    #[tracing::instrument(skip(self))]
    pub async fn delete_custom(&self, extension: &str) -> Result<()> {
        let url = self.endpoint(&format!("extensions/custom/{extension}"))?;
        debug!(url = %url, "Deleting custom extension");

        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into `Error::Status`, keeping the body text so the
/// caller can decode the server's `{code, message}` payload if it wants to.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        debug!(status = %status, "Request completed");
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = %status, body = %body, "Server rejected request");
    Err(Error::Status { status, body })
}
