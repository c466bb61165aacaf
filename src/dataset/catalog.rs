use super::cache::DatasetCache;
use super::loader::load_jsonl;
use crate::config::{DatasetPaths, LoadMode, ServiceConfig};
use crate::error::ServiceResult;

use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// The four datasets the service reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Slides,
    Videos,
    Questions,
    LectureKeys,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Slides,
        DatasetKind::Videos,
        DatasetKind::Questions,
        DatasetKind::LectureKeys,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Slides => "slides",
            DatasetKind::Videos => "videos",
            DatasetKind::Questions => "questions",
            DatasetKind::LectureKeys => "lecture_keys",
        }
    }
}

/// Resolves dataset kinds to files and loads them.
///
/// Constructed once from the service configuration; request handlers only
/// ever see datasets through this type.
pub struct DatasetCatalog {
    paths: DatasetPaths,
    mode: LoadMode,
    cache: Option<DatasetCache>,
}

impl DatasetCatalog {
    pub fn new(paths: DatasetPaths, mode: LoadMode, cache_enabled: bool) -> Self {
        Self {
            paths,
            mode,
            cache: cache_enabled.then(DatasetCache::new),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            config.datasets.clone(),
            config.load_mode,
            config.cache_datasets,
        )
    }

    pub fn path(&self, kind: DatasetKind) -> &Path {
        match kind {
            DatasetKind::Slides => &self.paths.slides,
            DatasetKind::Videos => &self.paths.videos,
            DatasetKind::Questions => &self.paths.questions,
            DatasetKind::LectureKeys => &self.paths.lecture_keys,
        }
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Loads every record of `kind`, re-reading the file unless caching is on.
    pub fn load<T>(&self, kind: DatasetKind) -> ServiceResult<Arc<Vec<T>>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let path = self.path(kind);
        match &self.cache {
            Some(cache) => cache.get_or_load(path, || load_jsonl(path, self.mode)),
            None => load_jsonl(path, self.mode).map(Arc::new),
        }
    }
}
