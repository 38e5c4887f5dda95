//! Timed reveal of a submitted row
//!
//! The engine finishes all state changes before returning; the UI paints the
//! row one cell at a time and shows the end-of-game message afterwards. Each
//! step carries the game generation it belongs to, so a UI can drop steps
//! left over from a game that was restarted mid-reveal.

use crate::core::{Feedback, Pattern, WORD_LENGTH};
use std::time::Duration;

/// Delay between revealing consecutive cells of a row
pub const FLIP_INTERVAL: Duration = Duration::from_millis(500);

/// One cell to color after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub delay: Duration,
    pub row: usize,
    pub col: usize,
    pub feedback: Feedback,
}

impl RevealStep {
    /// Flat index of the cell in the 6×5 grid
    #[must_use]
    pub const fn cell_index(&self) -> usize {
        self.row * WORD_LENGTH + self.col
    }
}

/// Visual effects for one submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    pub generation: u64,
    pub steps: Vec<RevealStep>,
    /// When the win/loss notification may be shown
    pub verdict_delay: Duration,
}

impl RevealPlan {
    #[must_use]
    pub fn new(generation: u64, row: usize, pattern: Pattern) -> Self {
        let steps = pattern
            .as_array()
            .iter()
            .enumerate()
            .map(|(col, &feedback)| RevealStep {
                delay: FLIP_INTERVAL * col as u32,
                row,
                col,
                feedback,
            })
            .collect();

        Self {
            generation,
            steps,
            verdict_delay: FLIP_INTERVAL * WORD_LENGTH as u32,
        }
    }

    /// Steps whose delay has passed after `elapsed`
    pub fn due(&self, elapsed: Duration) -> impl Iterator<Item = &RevealStep> {
        self.steps.iter().filter(move |step| step.delay <= elapsed)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.verdict_delay
    }
}
