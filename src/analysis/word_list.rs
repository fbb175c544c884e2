//! Word-list helpers for static term sources.
//!
//! Inline lists and word-list files share the database loader's comment
//! convention: entries are trimmed, and blank or `#`-prefixed entries are
//! skipped, so the consuming filter logic never sees the difference between
//! sources.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Clean a word list: trim entries, drop blanks and `#` comments.
pub fn parse_word_list<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let term = entry.as_ref().trim();
            if term.is_empty() || term.starts_with('#') {
                None
            } else {
                Some(term.to_string())
            }
        })
        .collect()
}

/// Read a word list from a file, one term per line.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(content.lines()))
}

/// Read a file as one rule document, preserving line structure.
pub fn read_rules_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
