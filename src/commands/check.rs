//! Dictionary membership check

use crate::dictionary::Dictionary;

/// Result of checking a word against the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: String,
    /// Dictionary spelling of the match, if any
    pub entry: Option<String>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.entry.is_some()
    }
}

/// Look a word up, ignoring case and accents
#[must_use]
pub fn check_word(dictionary: &Dictionary, word: &str) -> CheckResult {
    CheckResult {
        input: word.to_string(),
        entry: dictionary.lookup(word).map(|w| w.text().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_finds_accented_entry() {
        let dict = Dictionary::from_strs(&["manhã", "noite"]).unwrap();
        let result = check_word(&dict, "MANHA");
        assert!(result.is_valid());
        assert_eq!(result.entry.as_deref(), Some("manhã"));
    }

    #[test]
    fn check_rejects_unknown_word() {
        let dict = Dictionary::from_strs(&["manhã", "noite"]).unwrap();
        let result = check_word(&dict, "tarde");
        assert!(!result.is_valid());
        assert_eq!(result.input, "tarde");
    }
}
