//! Configuration for tile fetching and snapshot output.
//!
//! All settings travel in explicit configuration structs handed to the
//! snapshot service at construction; there is no process-wide mutable
//! state.

mod fetch;
mod snapshot;

pub use fetch::{
    FetchConfig, DEFAULT_CONCURRENCY, DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_URL_TEMPLATE,
};
pub use snapshot::{SnapshotConfig, DEFAULT_OUTPUT_DIR, DEFAULT_TILE_DIR};
