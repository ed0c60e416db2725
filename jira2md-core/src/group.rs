use std::collections::BTreeMap;

use crate::issue::Issue;

/// Issues partitioned by raw epic link, keys in ascending order
pub type Groups = BTreeMap<String, Vec<Issue>>;

/// Partition issues by their epic link.
///
/// This is a stable partition, not a sort: each group keeps the input order
/// of its issues. The empty key collects issues without an epic.
pub fn group_by_epic(issues: Vec<Issue>) -> Groups {
    let mut groups = Groups::new();
    for issue in issues {
        groups
            .entry(issue.epic_link.clone())
            .or_default()
            .push(issue);
    }
    groups
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
