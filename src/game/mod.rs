//! Game engine
//!
//! Owns the state of a round and implements typing, guess submission,
//! feedback, turn advancement and reset. The UI layer reads state from here
//! and renders it; nothing in this module draws anything.

mod engine;
mod grid;
mod keyboard;
mod reveal;

pub use engine::{Game, GameStatus, InvalidWordError, Submission};
pub use grid::{Grid, MAX_GUESSES};
pub use keyboard::KeyboardState;
pub use reveal::{FLIP_INTERVAL, RevealPlan, RevealStep};
