//! Word representation and accent folding
//!
//! A `Word` keeps the dictionary spelling for display (accents included) next
//! to its folded letters, which every comparison in the game works on.

use std::fmt;
use std::hash::{Hash, Hasher};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// Fold a string for comparison: lower-case, decompose, drop combining marks.
///
/// # Examples
/// ```
/// use termo::core::normalize;
///
/// assert_eq!(normalize("MAMÃE"), "mamae");
/// assert_eq!(normalize("Ação"), "acao");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect()
}

/// A five-letter word
///
/// Equality and hashing use the folded letters only, so `"avião"` and
/// `"AVIAO"` are the same word.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word contains letters without a plain a-z base"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - A letter does not fold to an ASCII letter
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    ///
    /// let word = Word::new("Avião").unwrap();
    /// assert_eq!(word.text(), "avião");
    /// assert_eq!(word.chars(), b"aviao");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();
        let folded = normalize(&text);

        let len = folded.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !folded.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !folded.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = folded
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(folded.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as spelled in the dictionary
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the folded letters
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the folded letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of times `letter` appears in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }

    /// Number of times `letter` appears in positions `0..=position`
    ///
    /// This is the 1-based occurrence index of the letter at `position`.
    #[inline]
    #[must_use]
    pub fn occurrences_through(&self, letter: u8, position: usize) -> usize {
        self.chars[..=position]
            .iter()
            .filter(|&&c| c == letter)
            .count()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chars.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
