//! Cache path construction and filename handling.

use crate::coord::TileCoord;
use std::path::{Path, PathBuf};

/// File extension for cached tile blobs.
pub const TILE_EXTENSION: &str = "png";

/// Filename for a cached tile: `{zoom}_{x}_{y}.png`.
///
/// Deterministic so the same coordinate always maps to the same blob,
/// across runs and across concurrent workers.
pub fn tile_filename(coord: TileCoord) -> String {
    format!(
        "{}_{}_{}.{}",
        coord.zoom, coord.x, coord.y, TILE_EXTENSION
    )
}

/// Full path for a cached tile inside the given cache root.
pub fn tile_path(root: &Path, coord: TileCoord) -> PathBuf {
    root.join(tile_filename(coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_filename_format() {
        let coord = TileCoord::new(19295, 24640, 16);
        assert_eq!(tile_filename(coord), "16_19295_24640.png");
    }

    #[test]
    fn test_tile_filename_zero_coordinates() {
        let coord = TileCoord::new(0, 0, 1);
        assert_eq!(tile_filename(coord), "1_0_0.png");
    }

    #[test]
    fn test_tile_path_joins_root() {
        let coord = TileCoord::new(5, 7, 3);
        let path = tile_path(Path::new("/data/tiles"), coord);
        assert_eq!(path, PathBuf::from("/data/tiles/3_5_7.png"));
    }

    #[test]
    fn test_distinct_coordinates_distinct_paths() {
        let root = Path::new("tiles");
        let a = tile_path(root, TileCoord::new(1, 2, 3));
        let b = tile_path(root, TileCoord::new(2, 1, 3));
        let c = tile_path(root, TileCoord::new(1, 2, 4));

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }
}
