//! Section representation for split markdown documents.
//!
//! A section is a contiguous run of document lines opened by a level-1 or level-2
//! heading. It owns its lines verbatim so that writing every section back out in
//! order reproduces the source document.

/// Title given to the lines that precede the first heading.
pub const INTRODUCTION: &str = "Introduction";

/// Slugs shorter than this fall back to an index-based name.
const MIN_SLUG_LEN: usize = 3;

/// Letters and numbers of any script, plus underscore. Combining marks are not
/// word characters, so a decomposed accent is dropped along with punctuation.
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Hyphens and whitespace, counting the ASCII information separators as whitespace.
fn is_separator(c: char) -> bool {
    c == '-' || c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Contiguous document lines headed by a level-1 or level-2 heading.
pub struct Section {
    /// Heading text without the leading `#` markers.
    pub title: String,
    /// Heading depth: 1 for `#`, 2 for `##`.
    pub level: usize,
    /// Source lines, starting with the heading line itself.
    pub content: Vec<String>,
}

impl Section {
    /// Open a section at a heading line, which becomes its first content line.
    #[must_use]
    pub fn open(title: impl Into<String>, level: usize, heading_line: &str) -> Self {
        Self {
            title: title.into(),
            level,
            content: vec![heading_line.to_string()],
        }
    }

    /// The implicit leading section collecting lines before the first heading.
    #[must_use]
    pub fn introduction() -> Self {
        Self {
            title: INTRODUCTION.to_string(),
            level: 1,
            content: Vec::new(),
        }
    }

    /// Number of content lines, heading included.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Whether no line has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content lines rejoined with newlines, without a trailing newline.
    #[must_use]
    pub fn body(&self) -> String {
        self.content.join("\n")
    }

    /// Filesystem-safe name derived from the title.
    ///
    /// Punctuation is dropped, runs of hyphens and whitespace become a single hyphen,
    /// and the result is trimmed and lower-cased. Titles that leave fewer than three
    /// characters fall back to `section_NNN` using the section's position.
    #[must_use]
    pub fn slug(&self, index: usize) -> String {
        let mut hyphenated = String::with_capacity(self.title.len());
        let mut in_separator = false;
        for c in self.title.chars() {
            if is_separator(c) {
                if !in_separator {
                    hyphenated.push('-');
                }
                in_separator = true;
            } else if is_word(c) {
                hyphenated.push(c);
                in_separator = false;
            }
        }
        let slug = hyphenated.trim_matches('-').to_lowercase();

        if slug.chars().count() < MIN_SLUG_LEN {
            tracing::debug!(title = %self.title, index, "title too short for a slug");
            format!("section_{index:03}")
        } else {
            slug
        }
    }

    /// Output file name: `NNN_<slug>.md`.
    #[must_use]
    pub fn file_name(&self, index: usize) -> String {
        format!("{index:03}_{}.md", self.slug(index))
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
