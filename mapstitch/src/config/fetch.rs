//! Fetch/scheduler configuration.

use crate::coord::TileCoord;
use std::time::Duration;

/// Tile server URL pattern; `{z}`, `{x}` and `{y}` are substituted per tile.
pub const DEFAULT_URL_TEMPLATE: &str = "http://localhost:8080/tile/{z}/{x}/{y}.png";

/// Default number of concurrent fetch workers.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Default per-attempt download timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default number of download attempts per tile.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Configuration for tile downloading.
///
/// Groups all parameters of the fetch pipeline, providing sensible
/// defaults while allowing customization.
///
/// # Example
///
/// ```
/// use mapstitch::config::FetchConfig;
///
/// let config = FetchConfig::default();
/// assert_eq!(config.concurrency(), 16);
/// assert_eq!(config.max_retries(), 5);
///
/// let config = FetchConfig::new()
///     .with_concurrency(4)
///     .with_request_timeout_secs(30);
/// assert_eq!(config.concurrency(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Tile server URL template with `{z}`/`{x}`/`{y}` placeholders
    url_template: String,
    /// Maximum number of fetches in flight at once
    concurrency: usize,
    /// Per-attempt download timeout
    request_timeout: Duration,
    /// Number of download attempts per tile
    max_retries: u32,
    /// Polite delay after each successful download
    inter_request_delay: Duration,
}

impl FetchConfig {
    /// Create a new fetch configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile server URL template.
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }

    /// Set the maximum number of concurrent fetches.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the per-attempt download timeout in seconds.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs);
        self
    }

    /// Set the per-attempt download timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the number of download attempts per tile.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the polite delay inserted after each successful download.
    pub fn with_inter_request_delay(mut self, delay: Duration) -> Self {
        self.inter_request_delay = delay;
        self
    }

    /// Get the tile server URL template.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Get the maximum number of concurrent fetches.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Get the per-attempt download timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Get the number of download attempts per tile.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Get the polite inter-request delay.
    pub fn inter_request_delay(&self) -> Duration {
        self.inter_request_delay
    }

    /// Render the download URL for a tile.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.url_template
            .replace("{z}", &coord.zoom.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            inter_request_delay: Duration::ZERO,
        }
    }
}
