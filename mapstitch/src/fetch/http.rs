//! HTTP client abstraction for testability.

use super::fetcher::FetchError;
use std::future::Future;
use std::time::Duration;
use tracing::{trace, warn};

/// Default User-Agent string for HTTP requests.
const DEFAULT_USER_AGENT: &str = concat!("mapstitch/", env!("CARGO_PKG_VERSION"));

/// Trait for asynchronous tile downloads.
///
/// The production implementation is [`HttpTileClient`]; tests inject
/// mock clients to exercise the fetch pipeline without a network.
pub trait TileClient: Send + Sync {
    /// Performs an HTTP GET request, returning the response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Real tile client backed by a pooled `reqwest` client.
#[derive(Clone)]
pub struct HttpTileClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTileClient {
    /// Creates a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| FetchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }
}

impl TileClient for HttpTileClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => {
                return Err(FetchError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                });
            }
            Err(e) => {
                warn!(url = url, error = %e, "HTTP request failed");
                return Err(FetchError::Http(format!("Request failed: {}", e)));
            }
        };

        if !response.status().is_success() {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(FetchError::Http(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) if e.is_timeout() => Err(FetchError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }),
            Err(e) => Err(FetchError::Http(format!("Failed to read response: {}", e))),
        }
    }
}
