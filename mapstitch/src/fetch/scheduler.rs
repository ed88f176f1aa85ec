//! Bounded-concurrency fetch scheduling across a tile grid.

use super::fetcher::{FetchError, FetchOutcome, TileFetcher};
use super::http::TileClient;
use crate::coord::TileGrid;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Counts of how the grid's tiles were satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Tiles downloaded from the server
    pub downloaded: usize,
    /// Tiles already present in the cache
    pub cached: usize,
}

/// Fetch every tile in the grid with bounded concurrency.
///
/// One task is spawned per coordinate, gated by a semaphore so that at
/// most `concurrency` fetches are in flight at any time. All tasks are
/// joined before this returns; a fatal error from any tile is surfaced
/// as the overall result once the remaining in-flight tasks have
/// settled, so no tile is ever silently skipped and no partial blob is
/// left behind.
pub async fn fetch_all<C>(
    fetcher: Arc<TileFetcher<C>>,
    grid: &TileGrid,
) -> Result<FetchSummary, FetchError>
where
    C: TileClient + 'static,
{
    let total = grid.len();
    let semaphore = Arc::new(Semaphore::new(fetcher.config().concurrency()));
    let mut tasks = JoinSet::new();

    debug!(
        tiles = total,
        concurrency = fetcher.config().concurrency(),
        "Scheduling tile fetches"
    );

    for (index, coord) in grid.iter().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let _permit = semaphore
                .acquire()
                .await
                .expect("semaphore closed unexpectedly");
            fetcher.fetch(coord, index + 1, total).await
        });
    }

    let mut summary = FetchSummary::default();
    let mut first_error: Option<FetchError> = None;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(FetchOutcome::Downloaded)) => summary.downloaded += 1,
            Ok(Ok(FetchOutcome::Cached)) => summary.cached += 1,
            Ok(Err(e)) => {
                warn!(error = %e, "Tile fetch failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
            Err(join_err) => {
                warn!(error = %join_err, "Fetch task panicked");
                if first_error.is_none() {
                    first_error = Some(FetchError::TaskFailed(join_err.to_string()));
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}
