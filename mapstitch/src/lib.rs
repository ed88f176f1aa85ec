//! mapstitch - offline map snapshots from slippy-map tiles.
//!
//! Fetches a rectangular set of 256×256 map tiles from a tile server,
//! caches them on local disk, and composites them into a single raster
//! image covering a geographic bounding box at a given zoom level.
//!
//! The pipeline runs in three phases, strictly sequenced:
//!
//! 1. **Map** - convert the bounding box corners into a [`coord::TileGrid`].
//! 2. **Fetch** - download every tile in the grid with bounded concurrency,
//!    writing each blob into the [`cache::TileStore`]. Cached tiles are
//!    never re-downloaded.
//! 3. **Compose** - decode every cached blob and paste it into one large
//!    canvas, which is encoded as JPEG and written to the output directory.
//!
//! The [`snapshot::SnapshotService`] ties the phases together; the HTTP
//! layer sits behind the [`fetch::TileClient`] trait so tests can inject
//! mock servers.

pub mod cache;
pub mod compose;
pub mod config;
pub mod coord;
pub mod fetch;
pub mod logging;
pub mod snapshot;

pub use coord::{TileCoord, TileGrid, TILE_SIZE};
pub use snapshot::{GeoBounds, SnapshotError, SnapshotService};
