//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{Game, MAX_GUESSES, Submission};
use crate::output::formatters::colored_letter;
use crate::output::print_board;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Options for the line-based mode
#[derive(Debug, Clone, Copy)]
pub struct SimpleConfig {
    /// Reveal feedback one letter at a time
    pub animate: bool,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self { animate: true }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(game: &mut Game, config: SimpleConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(game, config, stdin.lock(), &mut stdout.lock())
}

fn play<R: BufRead, W: Write>(
    game: &mut Game,
    config: SimpleConfig,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 T E R M O                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in {MAX_GUESSES} tries.")?;
    writeln!(out, "Commands: 'new' to restart, 'quit' to exit\n")?;

    loop {
        write!(out, "Guess {}/{MAX_GUESSES}: ", game.current_row() + 1)?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "restart" => {
                game.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        if !enter_word(game, &line) {
            writeln!(out, "{}", "Word must be exactly 5 letters!".red())?;
            continue;
        }

        match game.submit_guess() {
            Ok(Some(submission)) => {
                if config.animate {
                    animate_reveal(out, game, &submission)?;
                }
                print_board(out, game)?;
            }
            Ok(None) => {
                clear_row(game);
                writeln!(out, "{}", "Word must be exactly 5 letters!".red())?;
                continue;
            }
            Err(e) => {
                clear_row(game);
                writeln!(out, "{} {}", "❌".red(), e.to_string().red())?;
                continue;
            }
        }

        if let Some(message) = game.end_message() {
            if game.status() == crate::game::GameStatus::Won {
                writeln!(out, "{}\n", message.green().bold())?;
            } else {
                writeln!(out, "{}\n", message.red().bold())?;
            }

            write!(out, "{}? (yes/no): ", game.restart_label())?;
            out.flush()?;
            match read_line(&mut input)?.map(|answer| answer.to_lowercase()) {
                Some(answer) if answer == "yes" || answer == "y" => {
                    game.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Replace the current row with `word`; false if it does not fill the row
fn enter_word(game: &mut Game, word: &str) -> bool {
    clear_row(game);
    if word.chars().count() != WORD_LENGTH {
        return false;
    }
    for ch in word.chars() {
        game.add_letter(ch);
    }
    if game.current_col() == WORD_LENGTH {
        true
    } else {
        clear_row(game);
        false
    }
}

fn clear_row(game: &mut Game) {
    while game.current_col() > 0 {
        game.remove_letter();
    }
}

fn animate_reveal<W: Write>(out: &mut W, game: &Game, submission: &Submission) -> Result<()> {
    let mut elapsed = Duration::ZERO;
    write!(out, "    ")?;
    for step in &submission.reveal.steps {
        thread::sleep(step.delay.saturating_sub(elapsed));
        elapsed = step.delay;
        let letter = game.cell(step.row, step.col).unwrap_or(' ');
        write!(out, "{}", colored_letter(letter, Some(step.feedback)))?;
        out.flush()?;
    }
    thread::sleep(submission.reveal.verdict_delay.saturating_sub(elapsed));
    writeln!(out)?;
    Ok(())
}
