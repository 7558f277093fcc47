//! CSV side-table loader.
//!
//! The batch job writes three CSV exports next to the JSON documents
//! (lead detail, call detail, agent availability). The dashboard only ever
//! reads them as opaque tabular data for drill-down views, so rows stay
//! stringly-typed; callers resolve columns by header name.
//!
//! Candidate resolution mirrors the JSON documents: `processed_data/` first,
//! then the search root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::json_loader::candidate_paths;
use crate::types::SideTableKind;

/// One parsed CSV export: a header row plus data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SideTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SideTable {
    /// The schema-less table an absent or unreadable file degrades to.
    pub fn empty() -> Self {
        SideTable::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of `name` in the header row, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of the named column, shorter than `len()` when rows are
    /// ragged.
    pub fn column(&self, name: &str) -> Vec<&str> {
        match self.column_index(name) {
            Some(idx) => self
                .rows
                .iter()
                .filter_map(|row| row.get(idx).map(String::as_str))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Parse CSV text. Quoted fields may contain commas, doubled quotes,
    /// and newlines. Blank lines are skipped; an unterminated quote runs to
    /// end of input rather than failing.
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut records = parse_records(content);
        if records.is_empty() {
            return SideTable::empty();
        }
        let headers = records.remove(0);
        SideTable {
            headers,
            rows: records,
        }
    }
}

fn parse_records(content: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Doubled quote is an escaped quote; a lone one closes the field.
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records.retain(|r| !(r.len() == 1 && r[0].is_empty()));
    records
}

/// Load one side-table from the first readable candidate under `base`,
/// returning the winning path alongside the parsed table.
pub fn load_side_table(
    base: &Path,
    kind: SideTableKind,
) -> Result<(SideTable, PathBuf), LoadError> {
    let mut last_failure: Option<LoadError> = None;
    for path in candidate_paths(base, kind.file_name()) {
        if !path.exists() {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(content) => return Ok((SideTable::parse(&content), path)),
            Err(err) => {
                log::warn!("skipping candidate {}: {}", path.display(), err);
                last_failure = Some(LoadError::io(&path, &err));
            }
        }
    }
    Err(last_failure.unwrap_or(LoadError::NotFound {
        name: kind.file_name().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_basic_table() {
        let table = SideTable::parse("id,name,score\n1,Alice,0.9\n2,Bob,0.4\n");
        assert_eq!(table.headers, vec!["id", "name", "score"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "Alice", "0.9"]);
        assert_eq!(table.column("name"), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let table = SideTable::parse(
            "id,notes\n1,\"called, no answer\"\n2,\"said \"\"maybe\"\"\"\n3,\"line one\nline two\"\n",
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0][1], "called, no answer");
        assert_eq!(table.rows[1][1], "said \"maybe\"");
        assert_eq!(table.rows[2][1], "line one\nline two");
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let table = SideTable::parse("a,b\r\n1,2\r\n\r\n3,4\r\n");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_parse_no_trailing_newline() {
        let table = SideTable::parse("a,b\n1,2");
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_empty_input() {
        let table = SideTable::parse("");
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let table = SideTable::parse("lead_id,status,score\n");
        assert_eq!(table.headers.len(), 3);
        assert!(table.is_empty());
        assert_eq!(table.column_index("status"), Some(1));
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let table = SideTable::parse("\u{feff}id,name\n1,x\n");
        assert_eq!(table.column_index("id"), Some(0));
    }

    #[test]
    fn test_missing_file_is_absence() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_side_table(dir.path(), SideTableKind::EnhancedLeads).unwrap_err();
        assert!(err.is_absence());
    }

    #[test]
    fn test_processed_dir_preferred() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("processed_data")).unwrap();
        fs::write(
            dir.path().join("processed_data/call_activity_details.csv"),
            "call_id\n100\n",
        )
        .unwrap();
        fs::write(dir.path().join("call_activity_details.csv"), "call_id\n200\n").unwrap();

        let (table, path) = load_side_table(dir.path(), SideTableKind::CallDetails).unwrap();
        assert_eq!(table.rows[0][0], "100");
        assert!(path.ends_with("processed_data/call_activity_details.csv"));
    }
}
