//! jira2md Core Library
//!
//! Turns a CSV export of issues into a Markdown report: issues are grouped
//! by epic link, sorted by priority and status within each group, and
//! rendered as status badges linked back to the issue tracker.

pub mod config;
pub mod constants;
pub mod error;
pub mod group;
pub mod ingest;
pub mod issue;
pub mod order;
pub mod render;
pub mod report;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use config::Config;
pub use error::{ReportError, Result};
pub use group::{group_by_epic, Groups};
pub use ingest::read_issues;
pub use issue::{Issue, Priority, Status, StatusTier};
pub use order::{compare_issues, sort_issues};
pub use render::{render_issue, short_description};
pub use report::{generate_report, parse_date, render_report, today};
