//! Tile coordinate type definitions

use std::fmt;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Maximum supported zoom level
pub const MAX_ZOOM: u8 = 19;

/// Edge length of a map tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// Tile coordinates in the slippy-map tiling scheme.
///
/// Identifies one 256×256 tile of the `2^zoom × 2^zoom` grid covering
/// the world. `(0, 0)` is the northwest corner of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at 180°W
    pub x: u32,
    /// Y coordinate (north-south), 0 at the northern map edge
    pub y: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoord {
    /// Create a new tile coordinate.
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Latitude at or beyond ±90° has no Mercator projection
    InvalidLatitude(f64),
    /// Longitude is outside valid range (-180.0 to 180.0)
    InvalidLongitude(f64),
    /// Zoom level is above the supported maximum
    InvalidZoom(u8),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be strictly between -90 and 90)",
                    lat
                )
            }
            CoordError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            CoordError::InvalidZoom(zoom) => {
                write!(
                    f,
                    "Invalid zoom level: {} (must be at most {})",
                    zoom, MAX_ZOOM
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
