//! CSV ingestion of issue tracker exports
//!
//! The whole input is read before anything is grouped or rendered. Any
//! malformed row aborts the run: a report built from part of an export
//! would look complete when it is not.

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

use crate::constants::{
    DESCRIPTION_COL, EPIC_LINK_COL, EPIC_LINK_COL_SPACED, ISSUE_KEY_COL, LABELS_COL, PRIORITY_COL,
    STATUS_COL, SUMMARY_COL,
};
use crate::error::{ReportError, Result};
use crate::issue::{Issue, Priority, Status};

/// Column indices of the fields we consume
#[derive(Debug, Clone, Copy)]
struct Columns {
    key: usize,
    summary: usize,
    description: Option<usize>,
    labels: Option<usize>,
    epic_link: Option<usize>,
    priority: usize,
    status: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let header_map = build_header_map(headers);
        let required = |name: &str| {
            header_map
                .get(name)
                .copied()
                .ok_or_else(|| ReportError::Ingest(format!("missing required column '{}'", name)))
        };

        Ok(Columns {
            key: required(ISSUE_KEY_COL)?,
            summary: required(SUMMARY_COL)?,
            description: header_map.get(DESCRIPTION_COL).copied(),
            labels: header_map.get(LABELS_COL).copied(),
            epic_link: header_map
                .get(EPIC_LINK_COL)
                .or_else(|| header_map.get(EPIC_LINK_COL_SPACED))
                .copied(),
            priority: required(PRIORITY_COL)?,
            status: required(STATUS_COL)?,
        })
    }

    fn issue(&self, record: &StringRecord) -> Issue {
        let optional = |idx: Option<usize>| idx.map(|i| get_field(record, i)).unwrap_or_default();

        Issue {
            key: get_field(record, self.key),
            summary: get_field(record, self.summary),
            description: optional(self.description),
            labels: optional(self.labels)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            epic_link: optional(self.epic_link),
            priority: Priority::parse(&get_field(record, self.priority)),
            status: Status::parse(&get_field(record, self.status)),
        }
    }
}

/// Build a map of header names to column indices, first occurrence wins
fn build_header_map(headers: &StringRecord) -> HashMap<&str, usize> {
    let mut map = HashMap::new();
    for (i, h) in headers.iter().enumerate() {
        map.entry(h.trim()).or_insert(i);
    }
    map
}

fn get_field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().to_string()
}

/// Read every issue from a comma separated export with a header row.
///
/// Rows keep their input order. A row whose column count differs from the
/// header, or that is not valid UTF-8, fails the whole read.
pub fn read_issues<R: Read>(reader: R) -> Result<Vec<Issue>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        debug!("Input is empty, no issues to read");
        return Ok(Vec::new());
    }
    let columns = Columns::locate(&headers)?;
    if columns.epic_link.is_none() {
        debug!("No epic link column in input, every issue is ungrouped");
    }

    let mut issues = Vec::new();
    for result in rdr.records() {
        let record = result?;
        issues.push(columns.issue(&record));
    }

    debug!("Read {} issue(s) from input", issues.len());
    Ok(issues)
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
