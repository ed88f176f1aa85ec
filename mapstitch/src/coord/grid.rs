//! Rectangular tile grid spanning a bounding box.

use super::types::{TileCoord, TILE_SIZE};

/// An ordered rectangular set of tile coordinates at one zoom level.
///
/// Covers `x ∈ [x0, x1)` and `y ∈ [y0, y1)` - the bottom-right bound is
/// exclusive, so the tile row/column containing the south/east edge of
/// the bounding box is not rendered. Partial edge tiles are dropped
/// rather than clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    zoom: u8,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl TileGrid {
    /// Build a grid from its top-left tile (inclusive) and bottom-right
    /// tile (exclusive). Both corners must share one zoom level; the
    /// grid is empty when the corners are inverted or coincide.
    pub fn from_corners(top_left: TileCoord, bottom_right: TileCoord) -> Self {
        Self {
            zoom: top_left.zoom,
            x0: top_left.x,
            y0: top_left.y,
            x1: bottom_right.x,
            y1: bottom_right.y,
        }
    }

    /// Zoom level shared by every tile in the grid.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Number of tile columns.
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Number of tile rows.
    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// True when the grid contains no tiles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Composite canvas dimensions in pixels.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (self.width() * TILE_SIZE, self.height() * TILE_SIZE)
    }

    /// Pixel offset of a tile relative to the grid's top-left corner.
    pub fn pixel_offset(&self, coord: TileCoord) -> (u32, u32) {
        ((coord.x - self.x0) * TILE_SIZE, (coord.y - self.y0) * TILE_SIZE)
    }

    /// Iterate over all tiles in row-major order (west to east, north
    /// to south).
    pub fn iter(&self) -> impl Iterator<Item = TileCoord> + '_ {
        let zoom = self.zoom;
        let (x0, x1) = (self.x0, self.x1);
        (self.y0..self.y1)
            .flat_map(move |y| (x0..x1).map(move |x| TileCoord::new(x, y, zoom)))
    }
}
