//! Dictionary of valid words
//!
//! Holds the fixed word list for the process lifetime, picks secrets and
//! answers accent-insensitive membership queries.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary must contain at least one valid word"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Immutable list of five-letter words
///
/// Membership is keyed by the folded letters of each word, so lookups ignore
/// case and accents.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<[u8; WORD_LENGTH], usize>,
}

impl Dictionary {
    /// Build a dictionary from words
    ///
    /// Entries that fold to the same letters are kept once (first wins).
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if index.contains_key(word.chars()) {
                log::debug!("duplicate dictionary entry '{word}' ignored");
                continue;
            }
            index.insert(*word.chars(), unique.len());
            unique.push(word);
        }

        if unique.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Build a dictionary from string entries, skipping invalid ones
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use termo::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(&["apple", "happy", "cease", "zebra"]).unwrap();
    /// assert_eq!(dict.len(), 4);
    /// assert!(dict.is_valid_word("ZEBRA"));
    /// ```
    pub fn from_strs(entries: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(entries))
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list has no valid words.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_strs(DICTIONARY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a uniformly random word to be the secret
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Check whether `candidate` is a dictionary word, ignoring case and accents
    ///
    /// # Examples
    /// ```
    /// use termo::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(&["mamãe", "avião"]).unwrap();
    /// assert!(dict.is_valid_word("MAMAE"));
    /// assert!(dict.is_valid_word("aviao"));
    /// assert!(!dict.is_valid_word("aviaox"));
    /// ```
    #[must_use]
    pub fn is_valid_word(&self, candidate: &str) -> bool {
        self.lookup(candidate).is_some()
    }

    /// Find the dictionary entry matching `candidate`, ignoring case and accents
    #[must_use]
    pub fn lookup(&self, candidate: &str) -> Option<&Word> {
        let word = Word::new(candidate).ok()?;
        self.index.get(word.chars()).map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.chars())
    }
}
