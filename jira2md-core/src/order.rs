//! Ordering of issues within a group
//!
//! Higher priority first, then further along in the workflow, then by
//! status name and finally by summary so equal issues never swap places.

use std::cmp::Ordering;

use crate::issue::Issue;

pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| b.status.tier().rank().cmp(&a.status.tier().rank()))
        .then_with(|| a.status.as_str().cmp(b.status.as_str()))
        .then_with(|| a.summary.cmp(&b.summary))
}

/// Sort a group in place; this is the order the group is rendered in
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(compare_issues);
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
