//! Typed data layer for the LeadPulse CRM analytics dashboard.
//!
//! The upstream analytics batch drops two JSON documents and three CSV
//! exports into `processed_data/`. This crate loads them once per process,
//! merges whatever is on disk onto built-in sample defaults, and exposes
//! pure helpers that turn the documents into display-ready numbers. The
//! [`provider::DataProvider`] boundary never fails: missing, unreadable,
//! and malformed inputs all degrade to defaults with a log line.

pub mod cache;
pub mod csv_loader;
pub mod error;
pub mod json_loader;
pub mod metrics;
pub mod provider;
pub mod types;

pub use cache::{CachedDoc, DocumentCache, DocumentSource};
pub use csv_loader::SideTable;
pub use error::{LoadError, MetricsError};
pub use provider::{DashboardSnapshot, DataFreshness, DataProvider, STALE_AFTER_HOURS};
pub use types::{DashboardDocument, DocumentKind, InsightsDocument, ScoreTier, SideTableKind};
