//! Splitting a document into sections and writing them out.
//!
//! The scan keeps one section in progress. Each splitting heading closes it, and it
//! is kept only if it collected at least one line, so an empty leading
//! `Introduction` never reaches disk.

use crate::formats::Format;
use crate::index::{IndexEntry, SectionIndex};
use crate::section::Section;
use std::path::Path;
use std::{fs, io};

/// Partition `text` into sections at every heading the format splits on.
///
/// Lines are taken by splitting on `\n`, so a trailing newline produces a final empty
/// line and the concatenated sections always reproduce the input.
#[must_use]
pub fn split_sections<F: Format>(text: &str, format: &F) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::introduction();

    for line in text.split('\n') {
        match format.heading(line) {
            Some(heading) if format.splits_at(heading.level) => {
                tracing::debug!(title = %heading.title, level = heading.level, "section boundary");
                let finished =
                    std::mem::replace(&mut current, Section::open(heading.title, heading.level, line));
                if !finished.is_empty() {
                    sections.push(finished);
                }
            }
            _ => current.content.push(line.to_string()),
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// Write each section to `output_dir` as `NNN_<slug>.md`, creating the directory.
///
/// Prints one progress line per file and returns the index of what was written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be written.
pub fn write_sections(sections: &[Section], output_dir: &Path) -> io::Result<SectionIndex> {
    fs::create_dir_all(output_dir)?;
    let mut index = SectionIndex::new();

    for (i, section) in sections.iter().enumerate() {
        let path = output_dir.join(section.file_name(i));
        fs::write(&path, section.body())?;

        println!("Created: {} ({} lines)", path.display(), section.line_count());

        index.insert(IndexEntry {
            title: section.title.clone(),
            file: path.display().to_string(),
            lines: section.line_count(),
            level: section.level,
        });
    }

    Ok(index)
}

#[cfg(test)]
#[path = "tests/split.rs"]
mod tests;
