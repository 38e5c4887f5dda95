//! Core domain types for the game
//!
//! Pure types with no I/O: validated words, feedback tiers and the
//! per-guess feedback pattern.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{WORD_LENGTH, Word, WordError, normalize};
