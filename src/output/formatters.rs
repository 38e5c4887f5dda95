//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use crate::game::KeyboardState;
use colored::{ColoredString, Colorize};

/// Keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern.to_emoji()
}

/// Color a single upper-cased letter by its feedback tier
#[must_use]
pub fn colored_letter(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Wrong) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a guessed word with its feedback colors
#[must_use]
pub fn colored_row(letters: &[char], pattern: Pattern) -> String {
    letters
        .iter()
        .zip(pattern.as_array())
        .map(|(&letter, &feedback)| colored_letter(letter, Some(feedback)).to_string())
        .collect()
}

/// Letters of a word as typed in the dictionary, for display
#[must_use]
pub fn word_letters(word: &Word) -> Vec<char> {
    word.text().chars().collect()
}

/// Render the keyboard, one line per row, letters colored by classification
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|key| colored_letter(key, keyboard.classification(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}
