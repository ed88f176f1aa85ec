//! Coordinate conversion module
//!
//! Converts geographic coordinates (latitude/longitude) into slippy-map
//! tile coordinates and builds the rectangular tile grid that covers a
//! bounding box at a given zoom level.

mod grid;
mod types;

pub use grid::TileGrid;
pub use types::{CoordError, TileCoord, MAX_LON, MAX_ZOOM, MIN_LON, TILE_SIZE};

use std::f64::consts::PI;

/// Converts geographic coordinates to tile coordinates.
///
/// Uses the standard Mercator slippy-tile projection:
/// `x = floor((lon + 180) / 360 * 2^z)` and
/// `y = floor((1 - asinh(tan(lat)) / π) / 2 * 2^z)`.
///
/// Latitude must be strictly inside ±90°; the projection diverges at the
/// poles. Callers are responsible for choosing bounds whose tiles fall in
/// `[0, 2^zoom)` - values on the eastern/southern map edge map to the
/// exclusive grid bound.
#[inline]
pub fn to_tile_coord(lat: f64, lon: f64, zoom: u8) -> Result<TileCoord, CoordError> {
    if !lat.is_finite() || lat.abs() >= 90.0 {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let n = 2.0_f64.powi(zoom as i32);

    let x = ((lon + 180.0) / 360.0 * n).floor() as u32;

    // asinh(tan(lat)) is the closed form of ln(tan(lat) + sec(lat))
    let lat_rad = lat.to_radians();
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as u32;

    Ok(TileCoord { x, y, zoom })
}

/// Converts tile coordinates back to geographic coordinates.
///
/// Returns the latitude/longitude of the tile's northwest corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileCoord) -> (f64, f64) {
    let n = 2.0_f64.powi(tile.zoom as i32);

    let lon = tile.x as f64 / n * 360.0 - 180.0;

    let y = tile.y as f64 / n;
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    let lat = lat_rad.to_degrees();

    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york_city_at_zoom_16() {
        // New York City: 40.7128°N, 74.0060°W
        let tile = to_tile_coord(40.7128, -74.0060, 16).unwrap();

        assert_eq!(tile.x, 19295);
        assert_eq!(tile.y, 24640);
        assert_eq!(tile.zoom, 16);
    }

    #[test]
    fn test_equator_prime_meridian_at_zoom_1() {
        // (0, 0) is the shared corner of all four zoom-1 tiles; the floor
        // convention selects the southeastern one.
        let tile = to_tile_coord(0.0, 0.0, 1).unwrap();

        assert_eq!((tile.x, tile.y), (1, 1));
    }

    #[test]
    fn test_output_in_valid_range() {
        let samples = [
            (89.9, 179.9),
            (-89.9, -179.9),
            (51.5074, -0.1278),
            (-33.8688, 151.2093),
            (0.1, 0.1),
        ];

        for zoom in [0u8, 1, 5, 10, 19] {
            let n = 2u32.pow(zoom as u32);
            for (lat, lon) in samples {
                let tile = to_tile_coord(lat, lon, zoom).unwrap();
                assert!(tile.x < n, "x {} out of range at zoom {}", tile.x, zoom);
                assert!(tile.y < n, "y {} out of range at zoom {}", tile.y, zoom);
            }
        }
    }

    #[test]
    fn test_poles_rejected() {
        assert!(matches!(
            to_tile_coord(90.0, 0.0, 10),
            Err(CoordError::InvalidLatitude(_))
        ));
        assert!(matches!(
            to_tile_coord(-90.0, 0.0, 10),
            Err(CoordError::InvalidLatitude(_))
        ));
        assert!(matches!(
            to_tile_coord(f64::NAN, 0.0, 10),
            Err(CoordError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn test_invalid_longitude_rejected() {
        assert!(matches!(
            to_tile_coord(0.0, 180.5, 10),
            Err(CoordError::InvalidLongitude(_))
        ));
        assert!(matches!(
            to_tile_coord(0.0, -200.0, 10),
            Err(CoordError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_invalid_zoom_rejected() {
        assert!(matches!(
            to_tile_coord(0.0, 0.0, MAX_ZOOM + 1),
            Err(CoordError::InvalidZoom(_))
        ));
    }

    #[test]
    fn test_roundtrip_conversion() {
        let original_lat = 40.7128;
        let original_lon = -74.0060;

        for zoom in [5u8, 10, 16] {
            let tile = to_tile_coord(original_lat, original_lon, zoom).unwrap();
            let (lat, lon) = tile_to_lat_lon(&tile);

            // tile_to_lat_lon returns the northwest corner, so the
            // difference is bounded by one tile's angular extent.
            let tile_size_degrees = 360.0 / 2.0_f64.powi(zoom as i32);
            assert!((lat - original_lat).abs() < tile_size_degrees);
            assert!((lon - original_lon).abs() < tile_size_degrees);
        }
    }
}
