use chrono::{Local, NaiveDate};
use std::io::Read;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::{DATE_FORMAT, REPORT_TITLE};
use crate::error::Result;
use crate::group::{group_by_epic, Groups};
use crate::ingest::read_issues;
use crate::issue::Issue;
use crate::order::sort_issues;
use crate::render::render_issue;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

pub fn banner(date: NaiveDate) -> String {
    format!("# {} {}", REPORT_TITLE, date.format(DATE_FORMAT))
}

/// Sort a group and render it under a second-level heading.
///
/// The slice is sorted in place so what gets rendered is the sorted order.
pub fn render_group(name: &str, issues: &mut [Issue], config: &Config) -> String {
    sort_issues(issues);

    let mut blocks = Vec::with_capacity(issues.len() + 1);
    blocks.push(format!("## {}", name));
    blocks.extend(issues.iter().map(|issue| render_issue(issue, config)));
    blocks.join("\n\n")
}

/// Render the whole document: the dated banner then every group by ascending key
pub fn render_report(mut groups: Groups, config: &Config, date: NaiveDate) -> String {
    let mut blocks = Vec::with_capacity(groups.len() + 1);
    blocks.push(banner(date));

    for (key, issues) in groups.iter_mut() {
        let name = config.epic_name(key);
        debug!("Rendering group '{}' as '{}' with {} issue(s)", key, name, issues.len());
        blocks.push(render_group(name, issues, config));
    }

    let mut document = blocks.join("\n\n");
    document.push('\n');
    document
}

/// Read an export, group it and render the report.
///
/// Nothing is returned unless the whole input was read successfully.
pub fn generate_report<R: Read>(reader: R, config: &Config, date: NaiveDate) -> Result<String> {
    let issues = read_issues(reader)?;
    let count = issues.len();
    let groups = group_by_epic(issues);
    info!("Rendering {} issue(s) in {} group(s)", count, groups.len());
    Ok(render_report(groups, config, date))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
