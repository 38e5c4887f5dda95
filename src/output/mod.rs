//! Terminal output formatting
//!
//! Display utilities for the line-oriented mode and utility commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_score_result};
