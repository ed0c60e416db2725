// Constants used throughout jira2md

// Export header names
pub const ISSUE_KEY_COL: &str = "Issue key";
pub const SUMMARY_COL: &str = "Summary";
pub const DESCRIPTION_COL: &str = "Description";
pub const LABELS_COL: &str = "Labels";
pub const EPIC_LINK_COL: &str = "Custom field\t(Epic Link)";
pub const EPIC_LINK_COL_SPACED: &str = "Custom field (Epic Link)";
pub const PRIORITY_COL: &str = "Priority";
pub const STATUS_COL: &str = "Status";

// Configuration defaults
pub const DEFAULT_DOMAIN: &str = "jira.example.com";

// Rendering
pub const NO_EPIC: &str = "No epic";
pub const BADGE_BASE_URL: &str = "https://img.shields.io/badge/";
pub const REPORT_TITLE: &str = "Issue report";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
