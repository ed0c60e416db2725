//! Fixtures shared by the unit tests

use proptest::prelude::*;

use crate::issue::{Issue, Priority, Status};

pub fn issue(key: &str, summary: &str, priority: &str, status: &str, epic_link: &str) -> Issue {
    Issue {
        key: key.to_string(),
        summary: summary.to_string(),
        description: String::new(),
        labels: Vec::new(),
        epic_link: epic_link.to_string(),
        priority: Priority::parse(priority),
        status: Status::parse(status),
    }
}

pub fn priority_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Highest".to_string()),
        Just("High".to_string()),
        Just("Medium".to_string()),
        Just("Low".to_string()),
        Just("Lowest".to_string()),
        "[A-Za-z]{0,8}",
    ]
}

pub fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Open".to_string()),
        Just("In Progress".to_string()),
        Just("Rejected".to_string()),
        Just("Closed".to_string()),
        Just("Code Review".to_string()),
        Just("Staging Ready".to_string()),
        "[A-Za-z ]{0,12}",
    ]
}

prop_compose! {
    pub fn issue_strategy()(
        n in 0u32..10_000,
        summary in "[A-Za-z ]{0,16}",
        priority in priority_strategy(),
        status in status_strategy(),
        epic_link in prop_oneof![Just(String::new()), "EP-[0-9]{1,2}"],
    ) -> Issue {
        issue(&format!("PR-{}", n), &summary, &priority, &status, &epic_link)
    }
}
