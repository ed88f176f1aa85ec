//! Tile acquisition pipeline.
//!
//! [`TileFetcher`] retrieves a single tile with cache gating and bounded
//! retries; [`fetch_all`] drives the whole grid with a fixed concurrency
//! limit. The HTTP layer sits behind the [`TileClient`] trait so the
//! pipeline can be exercised without a network.

mod fetcher;
mod http;
mod scheduler;

pub use fetcher::{FetchError, FetchOutcome, TileFetcher};
pub use http::{HttpTileClient, TileClient};
pub use scheduler::{fetch_all, FetchSummary};
