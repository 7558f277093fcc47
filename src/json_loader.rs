//! Snapshot document loader.
//!
//! Each document has an ordered list of candidate paths under the search
//! root: `processed_data/<name>` (preferred, written by the batch job) then
//! `<name>` at the root (legacy layout). The first candidate that reads and
//! parses as a JSON object wins; broken candidates are logged and skipped so
//! a stale-but-valid root file can still serve.
//!
//! Parsing is per-section: the document is read as a loose JSON object and
//! each known section is deserialized independently. A section that is
//! absent or type-broken resolves to its built-in default without
//! disturbing the sections around it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::types::{
    default_agent_performance, default_call_activity, default_geographic, default_hourly_success,
    default_lead_scoring, default_lead_status, default_revenue_forecast, default_upcoming_tasks,
    AgentInsights, CallActivityInsights, ConversionInsights, DashboardDocument, DocumentKind,
    ExecutiveInsights, ExecutiveSummary, GeographicInsights, InsightsDocument, LeadStatusInsights,
    MetaInsights, TasksInsights,
};

/// Directory the upstream batch job writes into, relative to the search root.
pub const PROCESSED_DIR: &str = "processed_data";

/// Candidate locations for `file_name`, most-preferred first.
pub fn candidate_paths(base: &Path, file_name: &str) -> [PathBuf; 2] {
    [
        base.join(PROCESSED_DIR).join(file_name),
        base.join(file_name),
    ]
}

/// Read `path` as a top-level JSON object.
fn read_object(path: &Path) -> Result<Map<String, Value>, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, &e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| LoadError::parse(path, &e))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Walk the candidate list and return the first readable object.
///
/// A candidate that exists but fails to read or parse is logged and skipped;
/// if every candidate fails that way the last failure is returned so the
/// caller can tell breakage from plain absence.
fn read_first_candidate(
    base: &Path,
    file_name: &str,
) -> Result<(Map<String, Value>, PathBuf), LoadError> {
    let mut last_failure: Option<LoadError> = None;
    for path in candidate_paths(base, file_name) {
        if !path.exists() {
            continue;
        }
        match read_object(&path) {
            Ok(map) => return Ok((map, path)),
            Err(err) => {
                log::warn!("skipping candidate {}: {}", path.display(), err);
                last_failure = Some(err);
            }
        }
    }
    Err(last_failure.unwrap_or(LoadError::NotFound {
        name: file_name.to_string(),
    }))
}

/// Pull one section out of the document object, falling back to `default`
/// when the section is absent or does not match its schema.
fn take_section<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    canonical: &str,
    legacy: &str,
    default: impl FnOnce() -> T,
    path: &Path,
) -> T {
    let raw = map.remove(canonical).or_else(|| map.remove(legacy));
    match raw {
        None => default(),
        Some(value) => match serde_json::from_value(value) {
            Ok(section) => section,
            Err(err) => {
                log::warn!(
                    "{}: section '{}' does not match schema, using defaults: {}",
                    path.display(),
                    canonical,
                    err
                );
                default()
            }
        },
    }
}

/// Load the dashboard document from the first viable candidate under `base`.
pub fn load_dashboard(base: &Path) -> Result<(DashboardDocument, PathBuf), LoadError> {
    let file_name = DocumentKind::Dashboard.file_name();
    let (mut map, path) = read_first_candidate(base, file_name)?;

    let doc = DashboardDocument {
        executive_summary: take_section(
            &mut map,
            "executiveSummary",
            "executive_summary",
            ExecutiveSummary::default,
            &path,
        ),
        lead_status: take_section(&mut map, "leadStatus", "lead_status", default_lead_status, &path),
        lead_scoring: take_section(
            &mut map,
            "leadScoring",
            "lead_scoring",
            default_lead_scoring,
            &path,
        ),
        revenue_forecast: take_section(
            &mut map,
            "revenueForecast",
            "revenue_forecast",
            default_revenue_forecast,
            &path,
        ),
        call_activity: take_section(
            &mut map,
            "callActivity",
            "call_activity",
            default_call_activity,
            &path,
        ),
        hourly_success: take_section(
            &mut map,
            "hourlySuccess",
            "hourly_success",
            default_hourly_success,
            &path,
        ),
        agent_performance: take_section(
            &mut map,
            "agentPerformance",
            "agent_performance",
            default_agent_performance,
            &path,
        ),
        geographic: take_section(&mut map, "geographic", "geographic", default_geographic, &path),
        upcoming_tasks: take_section(
            &mut map,
            "upcomingTasks",
            "upcoming_tasks",
            default_upcoming_tasks,
            &path,
        ),
    };

    Ok((doc, path))
}

/// Load the insights document from the first viable candidate under `base`.
pub fn load_insights(base: &Path) -> Result<(InsightsDocument, PathBuf), LoadError> {
    let file_name = DocumentKind::Insights.file_name();
    let (mut map, path) = read_first_candidate(base, file_name)?;

    let doc = InsightsDocument {
        executive_summary: take_section(
            &mut map,
            "executiveSummary",
            "executive_summary",
            ExecutiveInsights::default,
            &path,
        ),
        lead_status: take_section(
            &mut map,
            "leadStatus",
            "lead_status",
            LeadStatusInsights::default,
            &path,
        ),
        call_activity: take_section(
            &mut map,
            "callActivity",
            "call_activity",
            CallActivityInsights::default,
            &path,
        ),
        tasks_followup: take_section(
            &mut map,
            "tasksFollowup",
            "tasks_followup",
            TasksInsights::default,
            &path,
        ),
        agent_availability: take_section(
            &mut map,
            "agentAvailability",
            "agent_availability",
            AgentInsights::default,
            &path,
        ),
        conversion: take_section(
            &mut map,
            "conversion",
            "conversion",
            ConversionInsights::default,
            &path,
        ),
        geographic: take_section(
            &mut map,
            "geographic",
            "geographic",
            GeographicInsights::default,
            &path,
        ),
        meta_insights: take_section(
            &mut map,
            "metaInsights",
            "meta_insights",
            MetaInsights::default,
            &path,
        ),
    };

    Ok((doc, path))
}
