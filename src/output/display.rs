//! Display functions for command results and the line-oriented board

use super::formatters::{colored_letter, colored_row, keyboard_lines, pattern_to_emoji, word_letters};
use crate::commands::{CheckResult, ScoreResult};
use crate::core::WORD_LENGTH;
use crate::game::{Game, MAX_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of a dictionary check
pub fn print_check_result(result: &CheckResult) {
    match &result.entry {
        Some(entry) => println!(
            "{} {} is in the dictionary (as {})",
            "✓".green().bold(),
            result.input.to_uppercase().bright_white().bold(),
            entry.to_uppercase().bright_yellow()
        ),
        None => println!(
            "{} {} is not in the dictionary",
            "✗".red().bold(),
            result.input.to_uppercase().bright_white().bold()
        ),
    }
}

/// Print the feedback of one guess against a secret
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}  Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n  {}  {}",
        colored_row(&word_letters(&result.guess), result.pattern),
        pattern_to_emoji(result.pattern)
    );
    println!(
        "\n  {} correct, {} misplaced\n",
        result.pattern.count_correct().to_string().green().bold(),
        result.pattern.count_wrong().to_string().yellow().bold()
    );
}

/// Write the grid and keyboard of a game
///
/// Submitted rows are colored, the row being typed is plain and remaining
/// rows are shown as dots.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    for row in 0..MAX_GUESSES {
        let line: String = match game.row_feedback(row) {
            Some(pattern) => {
                let letters: Vec<char> = game.grid().row(row).iter().flatten().copied().collect();
                colored_row(&letters, pattern)
            }
            None => (0..WORD_LENGTH)
                .map(|col| match game.cell(row, col) {
                    Some(letter) => colored_letter(letter, None).to_string(),
                    None => " · ".bright_black().to_string(),
                })
                .collect(),
        };
        writeln!(out, "    {line}")?;
    }

    writeln!(out)?;
    for line in keyboard_lines(game.keyboard()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    Ok(())
}
