//! Markdown format implementation for ATX-style headings (# syntax).
//!
//! Headings from `#` down to `#####` are recognised, each requiring exactly one space
//! between the markers and a non-empty title. Only the top two levels split; deeper
//! headings stay in the body of their enclosing section.

use crate::formats::{Format, Heading};
use regex::Regex;
use std::sync::LazyLock;

/// Deepest heading level that is recognised.
const MAX_LEVEL: usize = 5;

/// Deepest heading level that opens a new section.
const SPLIT_LEVEL: usize = 2;

static HEADING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    (1..=MAX_LEVEL)
        .map(|level| {
            Regex::new(&format!("^{} (.+)$", "#".repeat(level))).expect("valid heading regex")
        })
        .collect()
});

/// Line matcher for ATX-style markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading(&self, line: &str) -> Option<Heading> {
        HEADING_PATTERNS
            .iter()
            .zip(1..)
            .find_map(|(pattern, level)| {
                pattern.captures(line).map(|caps| Heading {
                    level,
                    title: caps[1].to_string(),
                })
            })
    }

    fn splits_at(&self, level: usize) -> bool {
        level <= SPLIT_LEVEL
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
