//! Markdown rendering of a single issue
//!
//! Each issue becomes a status badge linked to the issue, its title
//! (emphasized by priority) and a one-line quote taken from the description.

use regex::Regex;
use std::sync::LazyLock;
use url::form_urlencoded::byte_serialize;

use crate::config::Config;
use crate::constants::BADGE_BASE_URL;
use crate::issue::{Issue, Priority, Status};

static SUMMARY_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)^summary: ") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static OWNER_SUMMARY_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?i)^\p{Alphabetic}+'s summary: ") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

fn strip_match<'a>(re: &Regex, text: &'a str) -> &'a str {
    match re.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// One-line summary of a free-text description.
///
/// Keeps the first line only, then strips, in this order and at most once
/// each: a leading `_`, a trailing `_`, a `Summary: ` prefix and a
/// `<Word>'s summary: ` prefix (both prefixes case-insensitive).
pub fn short_description(description: &str) -> String {
    // CRLF, CR and LF all end the first line
    let first_line = description
        .split(['\r', '\n'])
        .next()
        .unwrap_or_default();

    let text = first_line.strip_prefix('_').unwrap_or(first_line);
    let text = text.strip_suffix('_').unwrap_or(text);
    let text = strip_match(&SUMMARY_PREFIX_RE, text);
    let text = strip_match(&OWNER_SUMMARY_PREFIX_RE, text);
    text.to_string()
}

/// shields.io static badge for a status, colored by its tier
pub fn badge_url(status: &Status) -> String {
    // A single dash separates the badge text from its color
    let label = status.badge_label().replace('-', "--");
    let label: String = byte_serialize(label.as_bytes()).collect();
    format!("{}{}-{}", BADGE_BASE_URL, label, status.tier().color())
}

/// Bold for high priorities, italic for low ones, plain otherwise
pub fn emphasize(title: &str, priority: &Priority) -> String {
    if title.is_empty() {
        return String::new();
    }
    match priority.rank() {
        rank if rank > 0 => format!("**{}**", title),
        rank if rank < 0 => format!("_{}_", title),
        _ => title.to_string(),
    }
}

/// Render one issue as a self-contained Markdown block
pub fn render_issue(issue: &Issue, config: &Config) -> String {
    let mut block = format!(
        "[![{}]({})]({}) {}",
        issue.status.badge_label(),
        badge_url(&issue.status),
        config.issue_url(&issue.key),
        emphasize(&issue.summary, &issue.priority)
    );

    let short = short_description(&issue.description);
    if !short.is_empty() {
        block.push_str("\n> ");
        block.push_str(&short);
    }
    block
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
