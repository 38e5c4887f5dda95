//! Keyboard letter classification
//!
//! Accumulates the best feedback seen for every guessed letter. A letter only
//! ever moves up in priority (`absent < wrong < correct`), and the three sets
//! stay disjoint.

use crate::core::{Feedback, Pattern, Word};
use rustc_hash::FxHashSet;

/// Letters classified across all submitted guesses of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    correct: FxHashSet<u8>,
    wrong: FxHashSet<u8>,
    absent: FxHashSet<u8>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the keyboard
    pub fn update(&mut self, guess: &Word, pattern: Pattern) {
        for (&letter, &feedback) in guess.chars().iter().zip(pattern.as_array()) {
            match feedback {
                Feedback::Correct => {
                    self.wrong.remove(&letter);
                    self.absent.remove(&letter);
                    self.correct.insert(letter);
                }
                Feedback::Wrong => {
                    if !self.correct.contains(&letter) {
                        self.absent.remove(&letter);
                        self.wrong.insert(letter);
                    }
                }
                Feedback::Absent => {
                    if !self.correct.contains(&letter) && !self.wrong.contains(&letter) {
                        self.absent.insert(letter);
                    }
                }
            }
        }
    }

    /// Classification of a letter, `None` if it has not been guessed yet
    ///
    /// Accepts upper-case and accented letters.
    #[must_use]
    pub fn classification(&self, letter: char) -> Option<Feedback> {
        let folded = crate::core::normalize(&letter.to_string());
        let &[byte] = folded.as_bytes() else {
            return None;
        };

        if self.correct.contains(&byte) {
            Some(Feedback::Correct)
        } else if self.wrong.contains(&byte) {
            Some(Feedback::Wrong)
        } else if self.absent.contains(&byte) {
            Some(Feedback::Absent)
        } else {
            None
        }
    }

    #[must_use]
    pub fn correct(&self) -> &FxHashSet<u8> {
        &self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> &FxHashSet<u8> {
        &self.wrong
    }

    #[must_use]
    pub fn absent(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.wrong.is_empty() && self.absent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(keyboard: &mut KeyboardState, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        keyboard.update(&guess, Pattern::calculate(&guess, &secret));
    }

    #[test]
    fn new_keyboard_is_empty() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.classification('a'), None);
    }

    #[test]
    fn classifies_letters_from_a_guess() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "zebra", "apple");

        assert_eq!(keyboard.classification('z'), Some(Feedback::Absent));
        assert_eq!(keyboard.classification('e'), Some(Feedback::Wrong));
        assert_eq!(keyboard.classification('b'), Some(Feedback::Absent));
        assert_eq!(keyboard.classification('r'), Some(Feedback::Absent));
        assert_eq!(keyboard.classification('a'), Some(Feedback::Wrong));
        assert_eq!(keyboard.classification('p'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "apple", "angle"); // a correct
        assert_eq!(keyboard.classification('a'), Some(Feedback::Correct));

        play(&mut keyboard, "cabin", "angle"); // a would be wrong
        assert_eq!(keyboard.classification('a'), Some(Feedback::Correct));

        play(&mut keyboard, "llama", "angle"); // second a surplus → absent
        assert_eq!(keyboard.classification('a'), Some(Feedback::Correct));
    }

    #[test]
    fn wrong_is_never_downgraded_to_absent() {
        let mut keyboard = KeyboardState::new();
        let guess = Word::new("zebra").unwrap();
        keyboard.update(&guess, Pattern::from_str("-Y---").unwrap());
        assert_eq!(keyboard.classification('e'), Some(Feedback::Wrong));

        keyboard.update(&guess, Pattern::from_str("-----").unwrap());
        assert_eq!(keyboard.classification('e'), Some(Feedback::Wrong));
        assert!(!keyboard.absent().contains(&b'e'));
    }

    #[test]
    fn same_row_wrong_and_correct_resolves_to_correct() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "cease", "apple"); // first e wrong, last e correct
        assert_eq!(keyboard.classification('e'), Some(Feedback::Correct));
    }

    #[test]
    fn letters_move_up_and_sets_stay_disjoint() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "zebra", "apple"); // e wrong
        play(&mut keyboard, "apple", "apple"); // e correct

        assert_eq!(keyboard.classification('e'), Some(Feedback::Correct));
        assert!(keyboard.correct().contains(&b'e'));
        assert!(!keyboard.wrong().contains(&b'e'));
        for letter in keyboard.correct() {
            assert!(!keyboard.wrong().contains(letter));
            assert!(!keyboard.absent().contains(letter));
        }
        for letter in keyboard.wrong() {
            assert!(!keyboard.absent().contains(letter));
        }
    }

    #[test]
    fn classification_accepts_case_and_accents() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "avião", "verão");
        assert_eq!(keyboard.classification('A'), keyboard.classification('ã'));
        assert_eq!(keyboard.classification('O'), Some(Feedback::Correct));
        assert_eq!(keyboard.classification('1'), None);
    }
}
