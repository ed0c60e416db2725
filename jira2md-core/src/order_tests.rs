use super::*;
use crate::test_support::{issue, issue_strategy};
use proptest::prelude::*;

fn summaries(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.summary.as_str()).collect()
}

#[test]
fn test_priority_descending() {
    let mut issues = vec![
        issue("PR-1", "lowest", "Lowest", "Open", ""),
        issue("PR-2", "medium", "Medium", "Open", ""),
        issue("PR-3", "highest", "Highest", "Open", ""),
        issue("PR-4", "low", "Low", "Open", ""),
        issue("PR-5", "high", "High", "Open", ""),
    ];
    sort_issues(&mut issues);
    assert_eq!(
        summaries(&issues),
        vec!["highest", "high", "medium", "low", "lowest"]
    );
}

#[test]
fn test_unknown_priority_ranks_as_medium() {
    let mut issues = vec![
        issue("PR-1", "b", "Low", "Open", ""),
        issue("PR-2", "c", "Blocker", "Open", ""),
        issue("PR-3", "a", "Medium", "Open", ""),
    ];
    sort_issues(&mut issues);
    assert_eq!(summaries(&issues), vec!["a", "c", "b"]);
}

#[test]
fn test_status_tier_descending_then_name() {
    let mut issues = vec![
        issue("PR-1", "open", "Medium", "Open", ""),
        issue("PR-2", "review", "Medium", "Code Review", ""),
        issue("PR-3", "closed", "Medium", "Closed", ""),
        issue("PR-4", "progress", "Medium", "In Progress", ""),
        issue("PR-5", "staging", "Medium", "Staging Ready", ""),
        issue("PR-6", "rejected", "Medium", "Rejected", ""),
        issue("PR-7", "backlog", "Medium", "Backlog", ""),
    ];
    sort_issues(&mut issues);
    assert_eq!(
        summaries(&issues),
        vec!["closed", "staging", "review", "progress", "rejected", "backlog", "open"]
    );
}

#[test]
fn test_priority_outranks_status() {
    let mut issues = vec![
        issue("PR-1", "closed", "Low", "Closed", ""),
        issue("PR-2", "open", "High", "Open", ""),
    ];
    sort_issues(&mut issues);
    assert_eq!(summaries(&issues), vec!["open", "closed"]);
}

#[test]
fn test_summary_breaks_ties() {
    let mut issues = vec![
        issue("PR-1", "Banana task", "Medium", "Open", ""),
        issue("PR-2", "Apple task", "Medium", "Open", ""),
    ];
    sort_issues(&mut issues);
    assert_eq!(summaries(&issues), vec!["Apple task", "Banana task"]);
}

proptest! {
    #[test]
    fn prop_sorting_is_idempotent(mut issues in prop::collection::vec(issue_strategy(), 0..40)) {
        sort_issues(&mut issues);
        let once = issues.clone();
        sort_issues(&mut issues);
        prop_assert_eq!(issues, once);
    }

    #[test]
    fn prop_sorting_is_independent_of_input_order(issues in prop::collection::vec(issue_strategy(), 0..40)) {
        let mut forward = issues.clone();
        let mut backward: Vec<Issue> = issues.into_iter().rev().collect();
        sort_issues(&mut forward);
        sort_issues(&mut backward);
        // Only issues equal in every compared field may differ in position
        for (a, b) in forward.iter().zip(&backward) {
            prop_assert_eq!(compare_issues(a, b), Ordering::Equal);
        }
    }

    #[test]
    fn prop_comparator_is_antisymmetric_and_transitive(
        a in issue_strategy(),
        b in issue_strategy(),
        c in issue_strategy(),
    ) {
        prop_assert_eq!(compare_issues(&a, &b), compare_issues(&b, &a).reverse());
        if compare_issues(&a, &b) != Ordering::Greater && compare_issues(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare_issues(&a, &c), Ordering::Greater);
        }
    }
}
