//! Error types for snapshot loading and metric computation.
//!
//! Load errors are classified by cause:
//! - Absence: no candidate file exists (normal before the first batch run)
//! - Io: a candidate exists but could not be read
//! - Parse: a candidate was read but is not valid JSON / not an object
//!
//! None of these escape the provider boundary; they decide logging and
//! degrade to built-in defaults there.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error loading a snapshot document or side-table from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no readable {name} in search path")]
    NotFound { name: String },

    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path} is not a JSON object")]
    NotAnObject { path: PathBuf },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        LoadError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// True when nothing was on disk at all, as opposed to a file that
    /// exists but is broken. Absence logs at debug, breakage at warn.
    pub fn is_absence(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    /// The candidate path involved, when there was one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoadError::NotFound { .. } => None,
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::NotAnObject { path } => Some(path),
        }
    }
}

/// Error from a pure metric helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// The helper needs at least one entry to pick from.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absence_classification() {
        let missing = LoadError::NotFound {
            name: "dashboard_data.json".to_string(),
        };
        assert!(missing.is_absence());
        assert!(missing.path().is_none());

        let broken = LoadError::Parse {
            path: PathBuf::from("processed_data/dashboard_data.json"),
            message: "expected value at line 1".to_string(),
        };
        assert!(!broken.is_absence());
        assert!(broken.path().is_some());
    }

    #[test]
    fn test_messages_name_the_file() {
        let err = LoadError::NotFound {
            name: "comprehensive_ai_insights.json".to_string(),
        };
        assert!(err.to_string().contains("comprehensive_ai_insights.json"));

        let err = MetricsError::EmptyInput("top_entry");
        assert!(err.to_string().contains("top_entry"));
    }
}
