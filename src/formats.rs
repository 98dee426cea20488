//! Format trait and implementations for heading-delimited documents.
//!
//! This module defines the `Format` trait which abstracts over how a document
//! marks its headings, and which heading depths open a new output section.

pub mod markdown;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading recognised on a single line.
pub struct Heading {
    /// Heading depth, 1 for the outermost level.
    pub level: usize,
    /// Heading text without markup.
    pub title: String,
}

/// Line-level heading recognition for a document format.
pub trait Format {
    /// Classify a line as a heading, returning `None` for ordinary lines.
    fn heading(&self, line: &str) -> Option<Heading>;

    /// Whether a heading at `level` starts a new section.
    fn splits_at(&self, level: usize) -> bool;
}
