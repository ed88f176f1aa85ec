//! Snapshot orchestration.
//!
//! Drives the full pipeline for one run: bounding box → tile grid →
//! fetch phase → composite phase → JPEG on disk. The fetch phase
//! strictly precedes compositing; the output file is written only after
//! the whole composite has been encoded, so a failed run never leaves a
//! partial image behind.

use crate::cache::{CacheError, TileStore};
use crate::compose::{compose, ComposeError};
use crate::config::SnapshotConfig;
use crate::coord::{to_tile_coord, CoordError, TileGrid};
use crate::fetch::{fetch_all, FetchError, HttpTileClient, TileClient, TileFetcher};
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// JPEG quality for the composite image.
const JPEG_QUALITY: u8 = 90;

/// Geographic bounding box in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

/// Errors that can abort a snapshot run.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Bounding box corner outside the projection domain.
    #[error(transparent)]
    Coord(#[from] CoordError),

    /// The bounding box covers no whole tile at this zoom level.
    #[error("Bounding box covers no tile at zoom {zoom} ({width}x{height} grid)")]
    EmptyGrid { zoom: u8, width: u32, height: u32 },

    /// Tile download failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Compositing failed.
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// Cache store failure.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// JPEG encoding failed.
    #[error("Failed to encode composite image: {0}")]
    Encode(image::ImageError),

    /// Directory creation or output write failed.
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Creates offline map snapshots for a bounding box at a given zoom.
///
/// Generic over the tile client so tests can run the whole pipeline
/// against a mock server.
pub struct SnapshotService<C: TileClient> {
    config: SnapshotConfig,
    client: Arc<C>,
}

impl SnapshotService<HttpTileClient> {
    /// Create a service with the production HTTP client.
    pub fn new(config: SnapshotConfig) -> Result<Self, SnapshotError> {
        let client = HttpTileClient::new(config.fetch().request_timeout())?;
        Ok(Self::with_client(config, client))
    }
}

impl<C: TileClient + 'static> SnapshotService<C> {
    /// Create a service over a caller-provided tile client.
    pub fn with_client(config: SnapshotConfig, client: C) -> Self {
        Self {
            config,
            client: Arc::new(client),
        }
    }

    /// The service configuration.
    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Create a snapshot and return the path of the written image.
    ///
    /// The output lands at `<output_dir>/<name>_zoom<zoom>.jpeg`. The
    /// north/west corner maps to the grid's top-left tile, south/east to
    /// the exclusive bottom-right bound.
    pub async fn create(
        &self,
        name: &str,
        bounds: GeoBounds,
        zoom: u8,
    ) -> Result<PathBuf, SnapshotError> {
        let top_left = to_tile_coord(bounds.north, bounds.west, zoom)?;
        let bottom_right = to_tile_coord(bounds.south, bounds.east, zoom)?;
        let grid = TileGrid::from_corners(top_left, bottom_right);

        if grid.is_empty() {
            return Err(SnapshotError::EmptyGrid {
                zoom,
                width: grid.width(),
                height: grid.height(),
            });
        }

        let (pixel_width, pixel_height) = grid.pixel_dimensions();
        info!(
            tiles = grid.len(),
            pixel_width, pixel_height, zoom, "Computed tile grid"
        );

        let store = TileStore::new(self.config.tile_dir());
        store.ensure_root()?;
        fs::create_dir_all(self.config.output_dir()).map_err(|source| SnapshotError::Io {
            path: self.config.output_dir().to_path_buf(),
            source,
        })?;

        let fetcher = Arc::new(TileFetcher::new(
            Arc::clone(&self.client),
            store.clone(),
            self.config.fetch().clone(),
        ));
        let summary = fetch_all(fetcher, &grid).await?;
        info!(
            downloaded = summary.downloaded,
            cached = summary.cached,
            "Tile fetch complete"
        );

        let canvas = compose(&grid, &store)?;

        // Encode fully in memory so a failed run leaves no partial file.
        let mut encoded = Vec::new();
        JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
            .encode(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(SnapshotError::Encode)?;

        let output_path = self
            .config
            .output_dir()
            .join(format!("{}_zoom{}.jpeg", name, zoom));
        fs::write(&output_path, &encoded).map_err(|source| SnapshotError::Io {
            path: output_path.clone(),
            source,
        })?;

        info!(path = %output_path.display(), bytes = encoded.len(), "Snapshot written");
        Ok(output_path)
    }
}
