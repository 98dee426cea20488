//! Extraction of type definitions and object schemas from fenced code blocks.
//!
//! Both scans run over the whole document rather than per section, so a block that
//! lands in a section file is also copied into the aggregate file.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::{fs, io};

/// Aggregate file for type definition blocks.
pub const TYPES_FILE: &str = "graphql_types.md";

/// Aggregate file for object schema blocks.
pub const SCHEMAS_FILE: &str = "schemas.md";

/// Schemas whose body is no longer than this are left out of `schemas.md`.
pub const DEFAULT_MIN_SCHEMA_LEN: usize = 100;

static TYPE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:graphql|typescript|javascript)?\n(type\s+\w+.*?)```")
        .expect("valid type block regex")
});
static SCHEMA_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:graphql|json)?\n(\{[\s\S]*?\})```").expect("valid schema block regex")
});

#[derive(Debug, Default, PartialEq, Eq)]
/// What the extractor wrote.
pub struct Extraction {
    /// Number of type blocks found.
    pub types: usize,
    /// Number of schema blocks found, before the length filter.
    pub schemas: usize,
    /// Number of schema blocks long enough to be written.
    pub schemas_kept: usize,
    /// Path of `graphql_types.md`, if any type block was found.
    pub types_path: Option<PathBuf>,
    /// Path of `schemas.md`, if any schema block was found.
    pub schemas_path: Option<PathBuf>,
}

fn bodies<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|body| body.as_str()))
        .collect()
}

/// Bodies of fenced blocks that open with `type <name>`.
#[must_use]
pub fn find_types(text: &str) -> Vec<&str> {
    bodies(&TYPE_BLOCK, text)
}

/// Bodies of fenced blocks holding a brace-delimited object.
#[must_use]
pub fn find_schemas(text: &str) -> Vec<&str> {
    bodies(&SCHEMA_BLOCK, text)
}

/// Render type bodies as numbered `graphql` blocks.
#[must_use]
pub fn render_types(types: &[&str]) -> String {
    let mut out = String::from("# GraphQL Types\n\n");
    for (i, body) in types.iter().enumerate() {
        out.push_str(&format!("## Type {}\n\n```graphql\n{body}```\n\n", i + 1));
    }
    out
}

/// Render schema bodies longer than `min_len` characters as `json` blocks.
///
/// Numbering follows the position in `schemas`, so skipped entries leave gaps.
#[must_use]
pub fn render_schemas(schemas: &[&str], min_len: usize) -> String {
    let mut out = String::from("# Schemas\n\n");
    for (i, body) in schemas.iter().enumerate() {
        if body.chars().count() > min_len {
            out.push_str(&format!("## Schema {}\n\n```json\n{body}```\n\n", i + 1));
        } else {
            tracing::debug!(schema = i + 1, "schema too short, skipped");
        }
    }
    out
}

/// Scan `text` for type and schema blocks and write the aggregate files that have
/// any matches into `output_dir`.
///
/// # Errors
///
/// Returns an error if an aggregate file cannot be written.
pub fn extract_blocks(text: &str, output_dir: &Path, min_schema_len: usize) -> io::Result<Extraction> {
    let types = find_types(text);
    let schemas = find_schemas(text);
    tracing::debug!(types = types.len(), schemas = schemas.len(), "scanned fenced blocks");

    let mut extraction = Extraction {
        types: types.len(),
        schemas: schemas.len(),
        schemas_kept: schemas
            .iter()
            .filter(|body| body.chars().count() > min_schema_len)
            .count(),
        ..Extraction::default()
    };

    if !types.is_empty() {
        let path = output_dir.join(TYPES_FILE);
        fs::write(&path, render_types(&types))?;
        println!("Extracted {} GraphQL types to: {}", types.len(), path.display());
        extraction.types_path = Some(path);
    }

    if !schemas.is_empty() {
        let path = output_dir.join(SCHEMAS_FILE);
        fs::write(&path, render_schemas(&schemas, min_schema_len))?;
        println!("Extracted schemas to: {}", path.display());
        extraction.schemas_path = Some(path);
    }

    Ok(extraction)
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
