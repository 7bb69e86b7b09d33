//! Cache of loaded documents
//!
//! The loader itself never caches. A `ContentCache` is explicit state owned by
//! whoever needs repeated access (the query server keeps one). It reloads the
//! collection whenever the content directory's fingerprint changes: the set of
//! markdown files, their sizes, and the latest modification time among them and
//! the directory.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::SystemTime;

use super::loader::ContentLoader;
use super::{ContentError, Document};

/// Snapshot of the content directory used to detect changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    paths_hash: u64,
    total_len: u64,
    latest_mtime: Option<SystemTime>,
}

impl Fingerprint {
    fn of(loader: &ContentLoader) -> Result<Self, ContentError> {
        let paths = loader.document_paths()?;

        let dir = loader.content_dir();
        let mut latest_mtime = fs::metadata(dir)
            .and_then(|m| m.modified())
            .ok();

        let mut hasher = DefaultHasher::new();
        let mut total_len = 0;

        for path in &paths {
            path.hash(&mut hasher);
            let metadata = fs::metadata(path).map_err(|e| ContentError::io(path, e))?;
            total_len += metadata.len();
            if let Ok(mtime) = metadata.modified() {
                latest_mtime = latest_mtime.max(Some(mtime));
            }
        }

        Ok(Self {
            paths_hash: hasher.finish(),
            total_len,
            latest_mtime,
        })
    }
}

/// Loaded collection, reused until the content directory changes
#[derive(Debug, Default)]
pub struct ContentCache {
    entry: Option<(Fingerprint, Arc<Vec<Document>>)>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached collection, reloading it first if the directory changed.
    ///
    /// A failed load leaves the cache empty.
    pub fn get_or_load(&mut self, loader: &ContentLoader) -> Result<Arc<Vec<Document>>, ContentError> {
        let fingerprint = Fingerprint::of(loader)?;

        if let Some((cached, docs)) = &self.entry {
            if *cached == fingerprint {
                return Ok(Arc::clone(docs));
            }
            tracing::info!("Content changed, reloading {:?}", loader.content_dir());
        }

        self.entry = None;
        let docs = Arc::new(loader.load_all()?);
        self.entry = Some((fingerprint, Arc::clone(&docs)));
        Ok(docs)
    }

    /// Drop the cached collection so the next access reloads it
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.entry.is_some()
    }
}
