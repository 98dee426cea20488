//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a docsplit.toml, and if present we load settings from there.
//! This provides the input document, output directory and extraction preferences.

use crate::extract::DEFAULT_MIN_SCHEMA_LEN;
use facet::Facet;
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "docsplit.toml";

/// Document split when no input is given.
pub const DEFAULT_INPUT: &str = "DOCS.md";

/// Directory written to when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "docs_split";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from docsplit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_INPUT.to_string())]
    /// Markdown document to split.
    pub input: String,
    #[facet(default = DEFAULT_OUTPUT_DIR.to_string())]
    /// Directory receiving section files, the index and extracted blocks.
    pub output_dir: String,
    #[facet(default = true)]
    /// Whether to extract type and schema blocks after splitting.
    pub extract: bool,
    #[facet(default = DEFAULT_MIN_SCHEMA_LEN)]
    /// Schemas must be strictly longer than this to be written.
    pub min_schema_len: usize,
}

impl Default for Config {
    /// Field defaults as declared in the `#[facet(default = ..)]` attributes.
    ///
    /// # Panics
    ///
    /// Panics if an empty document cannot be parsed, which only happens if a field
    /// lacks a default.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").expect("every config field has a default")
    }
}

impl Config {
    #[must_use]
    /// Load configuration from docsplit.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(path = %path.display(), "ignoring malformed config: {e}"),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
