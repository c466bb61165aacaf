//! Read-through dataset cache.
//!
//! Parsed datasets are kept per path together with the file's modification
//! time. A lookup reuses the entry while the timestamp is unchanged and
//! reloads otherwise, so edits to a dataset are picked up on the next request.

use super::loader::open_error;
use crate::error::ServiceResult;

use dashmap::DashMap;
use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

struct CacheEntry {
    modified: SystemTime,
    records: Arc<dyn Any + Send + Sync>,
}

#[derive(Default)]
pub struct DatasetCache {
    entries: DashMap<PathBuf, CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached records for `path`, calling `load` when the entry
    /// is missing or stale.
    pub fn get_or_load<T, F>(&self, path: &Path, load: F) -> ServiceResult<Arc<Vec<T>>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> ServiceResult<Vec<T>>,
    {
        let metadata = std::fs::metadata(path).map_err(|source| open_error(path, source))?;
        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(e) => {
                tracing::debug!(
                    "No modification time for {} ({}), loading uncached",
                    path.display(),
                    e
                );
                return load().map(Arc::new);
            }
        };

        if let Some(entry) = self.entries.get(path) {
            if entry.modified == modified {
                if let Ok(records) = Arc::clone(&entry.records).downcast::<Vec<T>>() {
                    tracing::debug!("Cache hit for {}", path.display());
                    return Ok(records);
                }
            }
        }

        let records = Arc::new(load()?);
        let erased: Arc<dyn Any + Send + Sync> = records.clone();
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                records: erased,
            },
        );
        tracing::debug!("Cached {} records for {}", records.len(), path.display());

        Ok(records)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
