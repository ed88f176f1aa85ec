//! Tile cache store.
//!
//! Maps tile coordinates to blobs on local disk under deterministic
//! filenames. The cache is durable: blobs persist across runs and are
//! never invalidated or expired by this system.

mod path;
mod store;

pub use path::{tile_filename, tile_path, TILE_EXTENSION};
pub use store::{CacheError, TileStore};
