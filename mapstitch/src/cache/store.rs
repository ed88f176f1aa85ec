//! Durable on-disk tile store.

use super::path::tile_path;
use crate::coord::TileCoord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Cache-related errors.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error during cache operations
    #[error("Cache I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tile blob store rooted at a single directory.
///
/// Blobs are keyed by [`TileCoord`] through a deterministic filename, so
/// the store doubles as a durable cache: entries written by one run are
/// reused by the next and are never expired.
///
/// Concurrent use is safe without locking because each coordinate owns a
/// disjoint path; no two fetch tasks ever write the same file.
#[derive(Debug, Clone)]
pub struct TileStore {
    root: PathBuf,
}

impl TileStore {
    /// Create a store rooted at `root`. The directory is not created
    /// until [`ensure_root`](Self::ensure_root) is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a tile blob is (or would be) stored at.
    pub fn path_for(&self, coord: TileCoord) -> PathBuf {
        tile_path(&self.root, coord)
    }

    /// Create the root directory if it does not exist.
    pub fn ensure_root(&self) -> Result<(), CacheError> {
        fs::create_dir_all(&self.root).map_err(|source| CacheError::Io {
            path: self.root.clone(),
            source,
        })
    }

    /// Whether a blob is present for the coordinate.
    pub fn contains(&self, coord: TileCoord) -> bool {
        self.path_for(coord).exists()
    }

    /// Read a tile blob.
    pub fn read(&self, coord: TileCoord) -> Result<Vec<u8>, CacheError> {
        let path = self.path_for(coord);
        fs::read(&path).map_err(|source| CacheError::Io { path, source })
    }

    /// Write a tile blob, overwriting any existing entry.
    ///
    /// On a failed write the partial file is removed so that a later
    /// [`contains`](Self::contains) check stays accurate.
    pub fn insert(&self, coord: TileCoord, bytes: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(coord);
        if let Err(source) = fs::write(&path, bytes) {
            if let Err(cleanup) = fs::remove_file(&path) {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %cleanup, "Failed to remove partial tile");
                }
            }
            return Err(CacheError::Io { path, source });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, TileStore) {
        let dir = TempDir::new().unwrap();
        let store = TileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_insert_then_read() {
        let (_dir, store) = test_store();
        let coord = TileCoord::new(3, 4, 5);

        store.insert(coord, b"tile-bytes").unwrap();

        assert!(store.contains(coord));
        assert_eq!(store.read(coord).unwrap(), b"tile-bytes");
    }

    #[test]
    fn test_contains_missing() {
        let (_dir, store) = test_store();
        assert!(!store.contains(TileCoord::new(1, 1, 1)));
    }

    #[test]
    fn test_read_missing_is_error() {
        let (_dir, store) = test_store();
        let result = store.read(TileCoord::new(9, 9, 9));
        assert!(result.is_err());
    }

    #[test]
    fn test_insert_overwrites() {
        let (_dir, store) = test_store();
        let coord = TileCoord::new(0, 0, 2);

        store.insert(coord, b"first").unwrap();
        store.insert(coord, b"second").unwrap();

        assert_eq!(store.read(coord).unwrap(), b"second");
    }

    #[test]
    fn test_ensure_root_creates_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("tiles");
        let store = TileStore::new(&root);

        assert!(!root.exists());
        store.ensure_root().unwrap();
        assert!(root.is_dir());

        // Idempotent
        store.ensure_root().unwrap();
    }

    #[test]
    fn test_disjoint_paths_per_coordinate() {
        let (_dir, store) = test_store();
        let a = TileCoord::new(1, 2, 3);
        let b = TileCoord::new(2, 1, 3);

        store.insert(a, b"a").unwrap();
        store.insert(b, b"b").unwrap();

        assert_eq!(store.read(a).unwrap(), b"a");
        assert_eq!(store.read(b).unwrap(), b"b");
    }
}
