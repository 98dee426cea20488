//! docsplit: split a large markdown document into one file per section.
//!
//! A run reads the whole document, partitions it at level-1 and level-2 headings,
//! writes each section and a `00_index.md` table of contents, then copies fenced type
//! definitions and object schemas into `graphql_types.md` and `schemas.md`.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod extract;
pub mod formats;
pub mod index;
pub mod input;
pub mod section;
pub mod split;

use crate::config::Config;
use crate::extract::Extraction;
use crate::formats::markdown::MarkdownFormat;
use crate::index::SectionIndex;
use std::{fs, io};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Resolved settings for a single run.
pub struct Options {
    /// Markdown document to split.
    pub input: PathBuf,
    /// Directory receiving every output file.
    pub output_dir: PathBuf,
    /// Whether to run the type and schema extraction.
    pub extract: bool,
    /// Schemas must be strictly longer than this to be written.
    pub min_schema_len: usize,
    /// Where to write the index as JSON, if anywhere.
    pub manifest: Option<PathBuf>,
}

impl From<&Config> for Options {
    fn from(cfg: &Config) -> Self {
        Self {
            input: PathBuf::from(&cfg.input),
            output_dir: PathBuf::from(&cfg.output_dir),
            extract: cfg.extract,
            min_schema_len: cfg.min_schema_len,
            manifest: None,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Outcome of a completed run.
pub struct Report {
    /// Index of the section files written.
    pub index: SectionIndex,
    /// Path of the written `00_index.md`.
    pub index_path: PathBuf,
    /// Extraction results, absent when extraction was disabled.
    pub extraction: Option<Extraction>,
}

/// Split the input document and write every output file.
///
/// # Errors
///
/// Returns the first I/O error met; files already written are left in place. The
/// output directory is created before the input is read, so it exists even when
/// reading fails.
pub fn run(options: &Options) -> io::Result<Report> {
    fs::create_dir_all(&options.output_dir)?;
    let text = input::read_document(&options.input)?;

    let sections = split::split_sections(&text, &MarkdownFormat);
    let index = split::write_sections(&sections, &options.output_dir)?;
    let index_path = index.write(&options.output_dir)?;

    println!("\nCreated index at: {}", index_path.display());
    println!("Total sections: {}", index.total_sections);

    if let Some(manifest) = &options.manifest {
        index.write_manifest(manifest)?;
    }

    let extraction = if options.extract {
        Some(extract::extract_blocks(
            &text,
            &options.output_dir,
            options.min_schema_len,
        )?)
    } else {
        tracing::debug!("extraction disabled");
        None
    };

    Ok(Report {
        index,
        index_path,
        extraction,
    })
}

#[cfg(test)]
#[path = "tests/run.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
