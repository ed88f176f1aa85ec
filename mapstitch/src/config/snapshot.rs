//! Snapshot service configuration.

use super::fetch::FetchConfig;
use std::path::{Path, PathBuf};

/// Default tile cache directory, relative to the working directory.
pub const DEFAULT_TILE_DIR: &str = "tiles";

/// Default output directory for composite images.
pub const DEFAULT_OUTPUT_DIR: &str = "maps";

/// Complete configuration for the snapshot service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// Fetch pipeline settings
    fetch: FetchConfig,
    /// Tile cache directory
    tile_dir: PathBuf,
    /// Output directory for composite images
    output_dir: PathBuf,
}

impl SnapshotConfig {
    /// Create a new snapshot configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch pipeline configuration.
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Set the tile cache directory.
    pub fn with_tile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tile_dir = dir.into();
        self
    }

    /// Set the output directory for composite images.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Get the fetch pipeline configuration.
    pub fn fetch(&self) -> &FetchConfig {
        &self.fetch
    }

    /// Get the tile cache directory.
    pub fn tile_dir(&self) -> &Path {
        &self.tile_dir
    }

    /// Get the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            tile_dir: PathBuf::from(DEFAULT_TILE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
