//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored. Lines that are not
/// valid five-letter words are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use termo::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("skipping line {}: '{trimmed}': {e}", line_no + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use termo::dictionary::loader::words_from_slice;
/// use termo::dictionary::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
