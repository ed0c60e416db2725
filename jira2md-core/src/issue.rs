//! Issue records and the closed priority/status vocabularies of an export
//!
//! Unrecognized priority and status values are carried through as `Other`
//! and rank like `Medium` and `Open` respectively.

use std::fmt;

/// Issue priority as spelled in the export
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    Highest,
    High,
    Medium,
    Low,
    Lowest,
    Other(String),
}

impl Priority {
    pub fn parse(value: &str) -> Self {
        match value {
            "Highest" => Priority::Highest,
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            "Lowest" => Priority::Lowest,
            other => Priority::Other(other.to_string()),
        }
    }

    /// Positive ranks are emphasized, negative ones de-emphasized
    pub fn rank(&self) -> i8 {
        match self {
            Priority::Highest => 2,
            Priority::High => 1,
            Priority::Medium | Priority::Other(_) => 0,
            Priority::Low => -1,
            Priority::Lowest => -2,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Highest => "Highest",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Lowest => "Lowest",
            Priority::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse progress bucket of a status, used for ordering and badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTier {
    Pending,
    Active,
    Done,
}

impl StatusTier {
    pub fn rank(self) -> i8 {
        match self {
            StatusTier::Pending => 0,
            StatusTier::Active => 1,
            StatusTier::Done => 2,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StatusTier::Pending => "lightgrey",
            StatusTier::Active => "yellow",
            StatusTier::Done => "brightgreen",
        }
    }
}

/// Workflow status as spelled in the export
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    InProgress,
    Rejected,
    Closed,
    CodeReview,
    StagingReady,
    Other(String),
}

impl Status {
    pub fn parse(value: &str) -> Self {
        match value {
            "Open" => Status::Open,
            "In Progress" => Status::InProgress,
            "Rejected" => Status::Rejected,
            "Closed" => Status::Closed,
            "Code Review" => Status::CodeReview,
            "Staging Ready" => Status::StagingReady,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn tier(&self) -> StatusTier {
        match self {
            Status::StagingReady | Status::Closed => StatusTier::Done,
            Status::CodeReview | Status::InProgress | Status::Rejected => StatusTier::Active,
            Status::Open | Status::Other(_) => StatusTier::Pending,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Rejected => "Rejected",
            Status::Closed => "Closed",
            Status::CodeReview => "Code Review",
            Status::StagingReady => "Staging Ready",
            Status::Other(raw) => raw,
        }
    }

    /// Lower-cased status with spaces replaced by underscores
    pub fn badge_label(&self) -> String {
        self.as_str().to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the export
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub description: String,
    pub labels: Vec<String>,
    // Empty when the issue belongs to no epic
    pub epic_link: String,
    pub priority: Priority,
    pub status: Status,
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
