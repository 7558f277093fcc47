//! Process-wide snapshot cache.
//!
//! Documents are immutable once loaded: the batch job replaces files between
//! dashboard sessions, not during them. So each document is read at most
//! once per process, concurrent first readers collapse into a single load,
//! and nothing here ever invalidates. Restart the process to pick up new
//! files.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::csv_loader::SideTable;
use crate::types::{DashboardDocument, InsightsDocument, SideTableKind};

/// Where a cached value came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSource {
    pub path: PathBuf,
    /// Filesystem mtime, when the platform reports one.
    pub modified: Option<SystemTime>,
    pub loaded_at: DateTime<Utc>,
}

impl DocumentSource {
    /// Capture source metadata for a file that was just read.
    pub fn for_path(path: &Path) -> Self {
        let modified = std::fs::metadata(path).ok().and_then(|m| m.modified().ok());
        DocumentSource {
            path: path.to_path_buf(),
            modified,
            loaded_at: Utc::now(),
        }
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified.map(DateTime::<Utc>::from)
    }
}

/// A cached document plus its provenance. `source` is `None` when the
/// built-in defaults are serving in place of a file.
#[derive(Debug)]
pub struct CachedDoc<T> {
    pub value: Arc<T>,
    pub source: Option<DocumentSource>,
}

impl<T> CachedDoc<T> {
    pub fn from_file(value: T, path: &Path) -> Self {
        CachedDoc {
            value: Arc::new(value),
            source: Some(DocumentSource::for_path(path)),
        }
    }

    pub fn from_defaults(value: T) -> Self {
        CachedDoc {
            value: Arc::new(value),
            source: None,
        }
    }

    pub fn is_default(&self) -> bool {
        self.source.is_none()
    }
}

impl<T> Clone for CachedDoc<T> {
    fn clone(&self) -> Self {
        CachedDoc {
            value: Arc::clone(&self.value),
            source: self.source.clone(),
        }
    }
}

/// One cache per provider (normally one per process).
#[derive(Debug, Default)]
pub struct DocumentCache {
    insights: OnceLock<CachedDoc<InsightsDocument>>,
    dashboard: OnceLock<CachedDoc<DashboardDocument>>,
    tables: DashMap<SideTableKind, CachedDoc<SideTable>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        DocumentCache::default()
    }

    /// Get the insights document, running `init` exactly once per process.
    /// Concurrent first callers block on the same init.
    pub fn insights(
        &self,
        init: impl FnOnce() -> CachedDoc<InsightsDocument>,
    ) -> CachedDoc<InsightsDocument> {
        self.insights.get_or_init(init).clone()
    }

    /// Get the dashboard document, running `init` exactly once per process.
    pub fn dashboard(
        &self,
        init: impl FnOnce() -> CachedDoc<DashboardDocument>,
    ) -> CachedDoc<DashboardDocument> {
        self.dashboard.get_or_init(init).clone()
    }

    /// Get one side-table, running `init` exactly once per table kind.
    pub fn side_table(
        &self,
        kind: SideTableKind,
        init: impl FnOnce() -> CachedDoc<SideTable>,
    ) -> CachedDoc<SideTable> {
        self.tables.entry(kind).or_insert_with(init).clone()
    }

    /// The insights entry, if a load has happened.
    pub fn insights_entry(&self) -> Option<CachedDoc<InsightsDocument>> {
        self.insights.get().cloned()
    }

    /// The dashboard entry, if a load has happened.
    pub fn dashboard_entry(&self) -> Option<CachedDoc<DashboardDocument>> {
        self.dashboard.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_document_init_runs_once() {
        let cache = DocumentCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let doc = cache.dashboard(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                CachedDoc::from_defaults(DashboardDocument::default())
            });
            assert!(doc.is_default());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cached_copies_share_one_allocation() {
        let cache = DocumentCache::new();
        let first = cache.insights(|| CachedDoc::from_defaults(InsightsDocument::default()));
        let second = cache.insights(|| unreachable!("insights already cached"));
        assert!(Arc::ptr_eq(&first.value, &second.value));
    }

    #[test]
    fn test_side_tables_cached_per_kind() {
        let cache = DocumentCache::new();
        let calls = AtomicUsize::new(0);

        for kind in SideTableKind::ALL {
            for _ in 0..2 {
                cache.side_table(kind, || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    CachedDoc::from_defaults(SideTable::empty())
                });
            }
        }
        assert_eq!(calls.load(Ordering::SeqCst), SideTableKind::ALL.len());
    }

    #[test]
    fn test_default_source_is_none() {
        let doc = CachedDoc::from_defaults(DashboardDocument::default());
        assert!(doc.is_default());
        assert!(doc.source.is_none());
    }
}
