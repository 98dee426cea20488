//! The section index records where each section was written.
//!
//! Entries are keyed by section title. Re-inserting a title replaces the stored entry
//! but keeps its original position, so the rendered index follows first-seen order
//! while pointing at the last file written for that title. Earlier files with a
//! colliding title stay on disk without an index line.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// File name of the markdown index inside the output directory.
pub const INDEX_FILE: &str = "00_index.md";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// Location and size of one written section.
pub struct IndexEntry {
    /// Section title, used as the index key.
    pub title: String,
    /// Path of the written section file.
    pub file: String,
    /// Number of content lines in the section file.
    pub lines: usize,
    /// Heading depth of the section.
    pub level: usize,
}

impl IndexEntry {
    /// Final path component of the section file.
    #[must_use]
    pub fn file_name(&self) -> String {
        Path::new(&self.file)
            .file_name()
            .map_or_else(|| self.file.clone(), |name| name.to_string_lossy().into_owned())
    }
}

#[derive(Serialize, Clone, Debug, Default)]
/// Title-keyed, insertion-ordered record of written sections.
pub struct SectionIndex {
    /// Number of section files written, including those shadowed by a later title.
    pub total_sections: usize,
    /// One entry per distinct title, in first-seen order.
    pub entries: Vec<IndexEntry>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl SectionIndex {
    /// Empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a written section, returning the entry it displaced if the title was taken.
    pub fn insert(&mut self, entry: IndexEntry) -> Option<IndexEntry> {
        self.total_sections += 1;

        if let Some(&position) = self.positions.get(&entry.title) {
            tracing::debug!(
                title = %entry.title,
                shadowed = %self.entries[position].file,
                "duplicate section title, index keeps the later file"
            );
            return Some(std::mem::replace(&mut self.entries[position], entry));
        }

        self.positions.insert(entry.title.clone(), self.entries.len());
        self.entries.push(entry);
        None
    }

    /// Look up the current entry for a title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&IndexEntry> {
        self.positions.get(title).map(|&position| &self.entries[position])
    }

    /// Markdown table of contents linking each entry to its file.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("# Documentation Index\n\n");
        out.push_str(&format!("Total sections: {}\n\n", self.total_sections));

        for entry in &self.entries {
            let indent = "  ".repeat(entry.level.saturating_sub(1));
            out.push_str(&format!(
                "{indent}- [{}](./{}) ({} lines)\n",
                entry.title,
                entry.file_name(),
                entry.lines
            ));
        }

        out
    }

    /// Write the rendered index to `00_index.md` inside `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, output_dir: &Path) -> io::Result<PathBuf> {
        let path = output_dir.join(INDEX_FILE);
        fs::write(&path, self.render())?;
        Ok(path)
    }

    /// Write the index as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_manifest(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "wrote manifest");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/index.rs"]
mod tests;
