//! Single-tile fetch with cache gating and bounded retries.

use super::http::TileClient;
use crate::cache::{CacheError, TileStore};
use crate::config::FetchConfig;
use crate::coord::TileCoord;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Errors that can occur while fetching tiles.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A single download attempt exceeded the timeout; retryable.
    #[error("Download attempt timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// HTTP request failed or returned an error status; fatal.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server returned a successful but empty body; fatal.
    #[error("Server returned an empty body for tile {coord}")]
    EmptyResponse { coord: TileCoord },

    /// All download attempts for a tile failed.
    #[error("Download failed for tile {coord} after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        coord: TileCoord,
        attempts: u32,
        last_error: String,
    },

    /// Cache store failure.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// A fetch task panicked or was aborted.
    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

/// How a tile fetch was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The blob was already present in the cache; no network I/O.
    Cached,
    /// The blob was downloaded and written to the cache.
    Downloaded,
}

/// Fetches single tiles into the cache store.
///
/// A cache hit short-circuits without any network access. On a miss the
/// tile is downloaded with a per-attempt timeout; timeouts are retried up
/// to the configured attempt limit, while any other failure is fatal
/// immediately. The blob is written to the store only after a complete,
/// non-empty body has been received, so no partial file can ever exist.
pub struct TileFetcher<C: TileClient> {
    client: Arc<C>,
    store: TileStore,
    config: FetchConfig,
}

impl<C: TileClient> TileFetcher<C> {
    /// Create a fetcher over the given client, store and configuration.
    pub fn new(client: Arc<C>, store: TileStore, config: FetchConfig) -> Self {
        Self {
            client,
            store,
            config,
        }
    }

    /// The fetch configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// The underlying tile store.
    pub fn store(&self) -> &TileStore {
        &self.store
    }

    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    /// Fetch one tile into the cache.
    ///
    /// `index` and `total` are the tile's position in the overall run,
    /// used for progress reporting.
    pub async fn fetch(
        &self,
        coord: TileCoord,
        index: usize,
        total: usize,
    ) -> Result<FetchOutcome, FetchError> {
        if self.store.contains(coord) {
            info!(tile = %coord, index, total, "Tile cached");
            return Ok(FetchOutcome::Cached);
        }

        let url = self.config.tile_url(coord);
        let max_retries = self.config.max_retries();
        let request_timeout = self.config.request_timeout();

        let mut last_error = String::new();
        for attempt in 1..=max_retries {
            debug!(tile = %coord, url = %url, attempt, "Download attempt");

            match timeout(request_timeout, self.client.get(&url)).await {
                Ok(Ok(bytes)) => {
                    if bytes.is_empty() {
                        warn!(tile = %coord, url = %url, "Empty response body");
                        return Err(FetchError::EmptyResponse { coord });
                    }

                    self.store.insert(coord, &bytes)?;
                    info!(
                        tile = %coord,
                        bytes = bytes.len(),
                        attempt,
                        index,
                        total,
                        "Tile downloaded"
                    );

                    let delay = self.config.inter_request_delay();
                    if !delay.is_zero() {
                        // be nice to the server
                        tokio::time::sleep(delay).await;
                    }

                    return Ok(FetchOutcome::Downloaded);
                }
                Ok(Err(FetchError::Timeout { timeout_secs })) => {
                    warn!(tile = %coord, attempt, timeout_secs, "Download timeout, retrying");
                    last_error = format!("timed out after {}s", timeout_secs);
                }
                Ok(Err(e)) => return Err(e),
                Err(_) => {
                    warn!(
                        tile = %coord,
                        attempt,
                        timeout_secs = request_timeout.as_secs(),
                        "Download timeout, retrying"
                    );
                    last_error = format!("timed out after {}s", request_timeout.as_secs());
                }
            }
        }

        Err(FetchError::RetriesExhausted {
            coord,
            attempts: max_retries,
            last_error,
        })
    }
}
