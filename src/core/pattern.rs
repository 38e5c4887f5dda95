//! Feedback calculation and representation
//!
//! Each guessed letter gets one of three tiers:
//! - `Absent` (letter not in word, or more copies guessed than the secret has)
//! - `Wrong` (letter in word, wrong position)
//! - `Correct` (letter in correct position)

use super::Word;
use super::word::WORD_LENGTH;

/// Feedback tier for a single guessed letter
///
/// Ordered by priority: `Absent < Wrong < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Absent,
    Wrong,
    Correct,
}

impl Feedback {
    /// Emoji square used for shareable rows
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Wrong => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one tier per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Tier at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(self, position: usize) -> Feedback {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// For the letter `L` at position `i`, with `s` copies of `L` in the secret,
    /// `g` copies in the guess and `k` the occurrence index of this copy
    /// (1-based, counting from the left):
    /// 1. `Correct` if `secret[i] == L`
    /// 2. `Absent` if `g > s` and `k > s` (surplus copy)
    /// 3. `Wrong` if the secret contains `L`
    /// 4. `Absent` otherwise
    ///
    /// Every position is classified from the complete guess, so the result
    /// does not depend on evaluation order.
    ///
    /// # Examples
    /// ```
    /// use termo::core::{Feedback, Pattern, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("cease").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// assert_eq!(pattern.at(1), Feedback::Wrong);
    /// assert_eq!(pattern.at(4), Feedback::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            let secret_count = secret.count_of(letter);
            let guess_count = guess.count_of(letter);
            let occurrence = guess.occurrences_through(letter, i);

            *slot = if secret.char_at(i) == letter {
                Feedback::Correct
            } else if guess_count > secret_count && occurrence > secret_count {
                Feedback::Absent
            } else if secret.has_letter(letter) {
                Feedback::Wrong
            } else {
                Feedback::Absent
            };
        }

        Self(result)
    }

    /// Count the number of correct squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Count the number of misplaced squares
    #[must_use]
    pub fn count_wrong(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Wrong).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for wrong position
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use termo::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Feedback::Correct,
                'Y' | 'y' | '🟨' => Feedback::Wrong,
                '-' | '_' | '⬜' => Feedback::Absent,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use termo::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, secret: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn pattern_all_absent() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p, Pattern::from_str("-----").unwrap());
        assert_eq!(p.count_correct(), 0);
        assert_eq!(p.count_wrong(), 0);
    }

    #[test]
    fn pattern_all_correct() {
        let p = pattern("crane", "crane");
        assert_eq!(p, Pattern::PERFECT);
        assert!(p.is_perfect());
        assert_eq!(p.count_correct(), 5);
    }

    #[test]
    fn pattern_cease_against_apple() {
        // c absent, first e wrong, a wrong, s absent, last e correct
        let p = pattern("cease", "apple");
        assert_eq!(
            p.as_array(),
            &[
                Feedback::Absent,
                Feedback::Wrong,
                Feedback::Wrong,
                Feedback::Absent,
                Feedback::Correct,
            ]
        );
    }

    #[test]
    fn pattern_zebra_against_apple() {
        assert_eq!(pattern("zebra", "apple"), Pattern::from_str("-Y--Y").unwrap());
    }

    #[test]
    fn pattern_surplus_copies_become_absent() {
        // secret has one 'e'; copies past the first are surplus unless placed
        // g: absent, e(1): wrong, e(2): on position → correct, s: absent, e(3): surplus → absent
        assert_eq!(pattern("geese", "creak"), Pattern::from_str("-YG--").unwrap());
    }

    #[test]
    fn pattern_positional_match_beats_surplus_rule() {
        // secret "hello" has one 'e' at position 1
        // guess "eerie": e(1) wrong, e(2) correct, e(3) surplus → absent
        assert_eq!(pattern("eerie", "hello"), Pattern::from_str("YG---").unwrap());
    }

    #[test]
    fn pattern_duplicates_within_secret_count() {
        // ROBOT vs FLOOR: both o's are within the secret count
        assert_eq!(pattern("robot", "floor"), Pattern::from_str("YY-G-").unwrap());
    }

    #[test]
    fn pattern_accent_insensitive() {
        assert_eq!(pattern("RAZAO", "razão"), Pattern::PERFECT);
        assert_eq!(pattern("verão", "avião"), Pattern::from_str("Y--GG").unwrap());
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GYGGYX").is_none()); // Too long (6 chars)
        assert!(Pattern::from_str("GYG").is_none()); // Too short
        assert!(Pattern::from_str("GXGGY").is_none()); // Invalid char
        assert!(Pattern::from_str("").is_none()); // Empty
    }

    #[test]
    fn pattern_to_emoji() {
        assert_eq!(Pattern::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
        assert_eq!(pattern("abcde", "fghij").to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_priority_order() {
        assert!(Feedback::Absent < Feedback::Wrong);
        assert!(Feedback::Wrong < Feedback::Correct);
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(pattern(word, word), Pattern::PERFECT);
        }
    }
}
