//! Reading source documents from disk.

use std::path::Path;
use std::{fs, io};

/// Read a UTF-8 document, normalising `\r\n` and lone `\r` line endings to `\n`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or `InvalidData` if it is not UTF-8.
pub fn read_document(path: &Path) -> io::Result<String> {
    let raw = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read document");
    Ok(normalize_newlines(&raw))
}

/// Convert Windows and classic Mac line endings to `\n`.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
