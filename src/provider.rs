//! The one data boundary the dashboard talks to.
//!
//! `DataProvider` hands out cached, schema-complete documents and never
//! returns an error: absence, unreadable files, and malformed JSON all
//! degrade to the built-in sample defaults right here, logged once at load
//! time. Callers past this point can render unconditionally.
//!
//! Loads are lazy and memoized per provider. There is no invalidation; a
//! dashboard session sees one consistent snapshot for its whole lifetime.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration, Utc};
use serde::Serialize;

use crate::cache::{CachedDoc, DocumentCache, DocumentSource};
use crate::csv_loader::{self, SideTable};
use crate::error::LoadError;
use crate::json_loader;
use crate::types::{DashboardDocument, DocumentKind, InsightsDocument, SideTableKind};

/// A document load slower than this is worth flagging; the dashboard blocks
/// on the first access.
const LOAD_BUDGET_MS: u128 = 250;

/// Snapshot files older than this are presumed to predate today's batch run.
pub const STALE_AFTER_HOURS: i64 = 24;

/// How current a document's backing file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFreshness {
    /// Backing file modified within [`STALE_AFTER_HOURS`].
    Fresh,
    /// Backing file exists but is older than [`STALE_AFTER_HOURS`].
    Stale,
    /// No usable backing file; built-in defaults are serving.
    Missing,
    /// Backing file exists but the platform reported no mtime.
    Unknown,
}

impl DataFreshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFreshness::Fresh => "fresh",
            DataFreshness::Stale => "stale",
            DataFreshness::Missing => "missing",
            DataFreshness::Unknown => "unknown",
        }
    }
}

/// Cached access to the snapshot documents and side-tables.
#[derive(Debug)]
pub struct DataProvider {
    base: PathBuf,
    cache: Arc<DocumentCache>,
}

impl Default for DataProvider {
    fn default() -> Self {
        DataProvider::new()
    }
}

impl DataProvider {
    /// Provider over the process working directory.
    pub fn new() -> Self {
        DataProvider::with_search_path(".")
    }

    /// Provider over an explicit search root. Candidates resolve to
    /// `<base>/processed_data/<name>` then `<base>/<name>`.
    pub fn with_search_path(base: impl Into<PathBuf>) -> Self {
        DataProvider::with_cache(base, Arc::new(DocumentCache::new()))
    }

    /// Provider sharing an externally owned cache. Several providers over
    /// the same search root can then serve one load between them.
    pub fn with_cache(base: impl Into<PathBuf>, cache: Arc<DocumentCache>) -> Self {
        DataProvider {
            base: base.into(),
            cache,
        }
    }

    /// The insights document. First call loads and caches; never fails.
    pub fn insights(&self) -> Arc<InsightsDocument> {
        self.cache
            .insights(|| {
                load_or_default(DocumentKind::Insights, || {
                    json_loader::load_insights(&self.base)
                })
            })
            .value
    }

    /// The dashboard document. First call loads and caches; never fails.
    pub fn dashboard(&self) -> Arc<DashboardDocument> {
        self.cache
            .dashboard(|| {
                load_or_default(DocumentKind::Dashboard, || {
                    json_loader::load_dashboard(&self.base)
                })
            })
            .value
    }

    /// One CSV side-table. Absent or unreadable files degrade to an empty
    /// table.
    pub fn side_table(&self, kind: SideTableKind) -> Arc<SideTable> {
        self.cache
            .side_table(kind, || {
                let started = Instant::now();
                match csv_loader::load_side_table(&self.base, kind) {
                    Ok((table, path)) => {
                        log::debug!(
                            "{} loaded ({} rows) in {}ms",
                            path.display(),
                            table.len(),
                            started.elapsed().as_millis()
                        );
                        CachedDoc::from_file(table, &path)
                    }
                    Err(err) => {
                        if err.is_absence() {
                            log::debug!("{}; serving empty table", err);
                        } else {
                            log::warn!("{}; serving empty table", err);
                        }
                        CachedDoc::from_defaults(SideTable::empty())
                    }
                }
            })
            .value
    }

    /// Where the given document actually came from, or `None` when defaults
    /// are serving. Triggers the load if it has not happened yet.
    pub fn document_source(&self, kind: DocumentKind) -> Option<DocumentSource> {
        match kind {
            DocumentKind::Insights => {
                self.insights();
                self.cache.insights_entry().and_then(|entry| entry.source)
            }
            DocumentKind::Dashboard => {
                self.dashboard();
                self.cache.dashboard_entry().and_then(|entry| entry.source)
            }
        }
    }

    /// Freshness classification for one document's backing file.
    pub fn freshness(&self, kind: DocumentKind) -> DataFreshness {
        let source = match self.document_source(kind) {
            Some(source) => source,
            None => return DataFreshness::Missing,
        };
        let modified = match source.modified_at() {
            Some(modified) => modified,
            None => return DataFreshness::Unknown,
        };
        if Utc::now() - modified > Duration::hours(STALE_AFTER_HOURS) {
            DataFreshness::Stale
        } else {
            DataFreshness::Fresh
        }
    }

    /// Everything a rendering client needs in one value.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let insights_freshness = self.freshness(DocumentKind::Insights);
        let dashboard_freshness = self.freshness(DocumentKind::Dashboard);
        DashboardSnapshot {
            generated_at: Utc::now().to_rfc3339(),
            insights_freshness,
            dashboard_freshness,
            insights: (*self.insights()).clone(),
            dashboard: (*self.dashboard()).clone(),
        }
    }
}

/// Run one document load, timing it and degrading every failure to the
/// built-in defaults.
fn load_or_default<T: Default>(
    kind: DocumentKind,
    load: impl FnOnce() -> Result<(T, PathBuf), LoadError>,
) -> CachedDoc<T> {
    let started = Instant::now();
    match load() {
        Ok((doc, path)) => {
            let elapsed = started.elapsed().as_millis();
            if elapsed > LOAD_BUDGET_MS {
                log::warn!(
                    "{} document loaded from {} in {}ms (budget {}ms)",
                    kind.as_str(),
                    path.display(),
                    elapsed,
                    LOAD_BUDGET_MS
                );
            } else {
                log::debug!(
                    "{} document loaded from {} in {}ms",
                    kind.as_str(),
                    path.display(),
                    elapsed
                );
            }
            CachedDoc::from_file(doc, &path)
        }
        Err(err) => {
            if err.is_absence() {
                log::debug!("{} document: {}; serving built-in sample data", kind.as_str(), err);
            } else {
                log::warn!("{} document: {}; serving built-in sample data", kind.as_str(), err);
            }
            CachedDoc::from_defaults(T::default())
        }
    }
}

/// Serialized bundle handed to rendering clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// RFC 3339 timestamp of snapshot assembly, not of the underlying files.
    pub generated_at: String,
    pub insights_freshness: DataFreshness,
    pub dashboard_freshness: DataFreshness,
    pub insights: InsightsDocument,
    pub dashboard: DashboardDocument,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::time::{Duration as StdDuration, SystemTime};

    use filetime::FileTime;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_empty_directory_serves_exact_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DataProvider::with_search_path(dir.path());

        assert_eq!(*provider.dashboard(), DashboardDocument::default());
        assert_eq!(*provider.insights(), InsightsDocument::default());
        assert_eq!(provider.freshness(DocumentKind::Dashboard), DataFreshness::Missing);
        assert_eq!(provider.freshness(DocumentKind::Insights), DataFreshness::Missing);
    }

    #[test]
    fn test_partial_file_overlays_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "processed_data/dashboard_data.json",
            r#"{"executiveSummary": {"totalLeads": 999}}"#,
        );
        let provider = DataProvider::with_search_path(dir.path());

        let doc = provider.dashboard();
        assert_eq!(doc.executive_summary.total_leads, 999);
        assert_eq!(doc.executive_summary.success_rate, 31.2);
        assert_eq!(doc.lead_status, DashboardDocument::default().lead_status);
    }

    #[test]
    fn test_malformed_file_degrades_like_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "dashboard_data.json", "{ broken");
        let provider = DataProvider::with_search_path(dir.path());

        assert_eq!(*provider.dashboard(), DashboardDocument::default());
        assert_eq!(provider.freshness(DocumentKind::Dashboard), DataFreshness::Missing);
        assert!(provider.document_source(DocumentKind::Dashboard).is_none());
    }

    #[test]
    fn test_repeated_access_returns_same_cached_value() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "dashboard_data.json",
            r#"{"executiveSummary": {"totalLeads": 7}}"#,
        );
        let provider = DataProvider::with_search_path(dir.path());

        let first = provider.dashboard();
        let second = provider.dashboard();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_file_changes_after_load_are_not_observed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "dashboard_data.json",
            r#"{"executiveSummary": {"totalLeads": 7}}"#,
        );
        let provider = DataProvider::with_search_path(dir.path());

        assert_eq!(provider.dashboard().executive_summary.total_leads, 7);
        fs::write(&path, r#"{"executiveSummary": {"totalLeads": 8}}"#).unwrap();
        assert_eq!(provider.dashboard().executive_summary.total_leads, 7);
    }

    #[test]
    fn test_recent_file_reports_fresh() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "dashboard_data.json", "{}");
        let provider = DataProvider::with_search_path(dir.path());
        assert_eq!(provider.freshness(DocumentKind::Dashboard), DataFreshness::Fresh);
    }

    #[test]
    fn test_old_file_reports_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "dashboard_data.json", "{}");
        let two_days_ago = SystemTime::now() - StdDuration::from_secs(48 * 3600);
        filetime::set_file_mtime(&path, FileTime::from_system_time(two_days_ago)).unwrap();

        let provider = DataProvider::with_search_path(dir.path());
        assert_eq!(provider.freshness(DocumentKind::Dashboard), DataFreshness::Stale);
    }

    #[test]
    fn test_source_records_winning_candidate() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "processed_data/comprehensive_ai_insights.json", "{}");
        let provider = DataProvider::with_search_path(dir.path());

        let source = provider.document_source(DocumentKind::Insights).unwrap();
        assert!(source
            .path
            .ends_with("processed_data/comprehensive_ai_insights.json"));
        assert!(source.modified.is_some());
    }

    #[test]
    fn test_injected_cache_shared_across_providers() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "dashboard_data.json",
            r#"{"executiveSummary": {"totalLeads": 5}}"#,
        );
        let cache = Arc::new(DocumentCache::new());

        let first = DataProvider::with_cache(dir.path(), cache.clone()).dashboard();
        fs::remove_file(dir.path().join("dashboard_data.json")).unwrap();
        let second = DataProvider::with_cache(dir.path(), cache).dashboard();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_side_table_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DataProvider::with_search_path(dir.path());
        assert!(provider.side_table(SideTableKind::EnhancedLeads).is_empty());
    }

    #[test]
    fn test_side_table_loads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "processed_data/agent_availability.csv",
            "agent,available\nJasmin Ahmed,yes\n",
        );
        let provider = DataProvider::with_search_path(dir.path());

        let table = provider.side_table(SideTableKind::AgentAvailability);
        assert_eq!(table.len(), 1);
        assert_eq!(table.column("agent"), vec!["Jasmin Ahmed"]);

        fs::write(&path, "agent,available\n").unwrap();
        let again = provider.side_table(SideTableKind::AgentAvailability);
        assert!(Arc::ptr_eq(&table, &again));
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DataProvider::with_search_path(dir.path());

        let snapshot = provider.snapshot();
        assert_eq!(snapshot.dashboard_freshness, DataFreshness::Missing);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("generatedAt").is_some());
        assert!(value.get("insightsFreshness").is_some());
        assert!(value["dashboard"].get("executiveSummary").is_some());
        assert!(value["insights"].get("metaInsights").is_some());
        assert_eq!(value["dashboardFreshness"], "missing");
    }
}
