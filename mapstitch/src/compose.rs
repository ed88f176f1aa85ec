//! Map compositing.
//!
//! Assembles the cached tile blobs of a grid into one RGB canvas, each
//! tile pasted at its pixel offset relative to the grid's top-left
//! corner.

use crate::cache::{CacheError, TileStore};
use crate::coord::{TileCoord, TileGrid, TILE_SIZE};
use image::{imageops, RgbImage};
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during compositing.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A cached blob could not be decoded as an image.
    #[error("Failed to decode cached tile {coord}: {source}")]
    Decode {
        coord: TileCoord,
        #[source]
        source: image::ImageError,
    },

    /// A cached blob decoded to something other than a 256×256 tile.
    #[error("Cached tile {coord} is {width}x{height}, expected 256x256")]
    WrongSize {
        coord: TileCoord,
        width: u32,
        height: u32,
    },

    /// Reading a blob from the cache store failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Composite every tile in the grid into a single RGB image.
///
/// The canvas is `(grid.width() * 256) × (grid.height() * 256)` pixels.
/// Every coordinate in the grid must have a cached blob; a missing,
/// undecodable or wrongly sized tile is fatal and names the offending
/// coordinate.
pub fn compose(grid: &TileGrid, store: &TileStore) -> Result<RgbImage, ComposeError> {
    let (width, height) = grid.pixel_dimensions();
    let mut canvas = RgbImage::new(width, height);

    debug!(width, height, tiles = grid.len(), "Compositing canvas");

    for coord in grid.iter() {
        let bytes = store.read(coord)?;

        let tile = image::ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|e| ComposeError::Decode {
                coord,
                source: image::ImageError::IoError(e),
            })?
            .decode()
            .map_err(|source| ComposeError::Decode { coord, source })?;

        if tile.width() != TILE_SIZE || tile.height() != TILE_SIZE {
            return Err(ComposeError::WrongSize {
                coord,
                width: tile.width(),
                height: tile.height(),
            });
        }

        let (x, y) = grid.pixel_offset(coord);
        imageops::replace(&mut canvas, &tile.to_rgb8(), x.into(), y.into());
    }

    Ok(canvas)
}
