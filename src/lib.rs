//! Termo
//!
//! A five-letter word guessing game: six attempts to find a secret word, with
//! per-letter feedback mirrored onto an on-screen keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use termo::dictionary::Dictionary;
//! use termo::game::{Game, GameStatus};
//!
//! let dict = Dictionary::from_strs(&["apple", "happy", "cease", "zebra"]).unwrap();
//! let mut game = Game::with_secret(&dict, "apple", StdRng::seed_from_u64(0)).unwrap();
//!
//! for ch in "zebra".chars() {
//!     game.add_letter(ch);
//! }
//! let submission = game.submit_guess().unwrap().unwrap();
//! println!("{}", submission.pattern.to_emoji());
//! assert_eq!(game.status(), GameStatus::Collecting);
//! ```

// Core domain types
pub mod core;

// Word list
pub mod dictionary;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod log;
