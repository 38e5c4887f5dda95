//! Termo - CLI
//!
//! Five-letter word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use termo::{
    commands::{SimpleConfig, check_word, run_simple, score_guess},
    dictionary::{Dictionary, loader::load_from_file},
    game::Game,
    output::{print_check_result, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Write log records to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start with this secret instead of a random one
        #[arg(long, hide = true)]
        secret: Option<String>,
    },

    /// Simple CLI mode (one guess per line, no TUI)
    Simple {
        /// Start with this secret instead of a random one
        #[arg(long, hide = true)]
        secret: Option<String>,

        /// Print feedback at once instead of letter by letter
        #[arg(long)]
        no_animation: bool,
    },

    /// Check whether a word is in the dictionary
    Check {
        /// Word to look up (case and accents are ignored)
        word: String,
    },

    /// Show the feedback a guess would get against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded()?,
        path => {
            let words = load_from_file(path)?;
            Dictionary::new(words).with_context(|| format!("no usable words in {path}"))?
        }
    };
    log::info!("dictionary loaded: {} words from {wordlist}", dictionary.len());
    Ok(dictionary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn new_game<'a>(
    dictionary: &'a Dictionary,
    secret: Option<&str>,
    seed: Option<u64>,
) -> Result<Game<'a>> {
    let rng = make_rng(seed);
    match secret {
        Some(secret) => Ok(Game::with_secret(dictionary, secret, rng)?),
        None => Ok(Game::new(dictionary, rng)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    termo::log::init_logger(cli.debug, cli.log_file.as_deref())?;

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { secret: None });

    match command {
        Commands::Play { secret } => {
            run_play_command(&dictionary, secret.as_deref(), cli.seed)
        }
        Commands::Simple {
            secret,
            no_animation,
        } => {
            let mut game = new_game(&dictionary, secret.as_deref(), cli.seed)?;
            run_simple(
                &mut game,
                SimpleConfig {
                    animate: !no_animation,
                },
            )
        }
        Commands::Check { word } => {
            print_check_result(&check_word(&dictionary, &word));
            Ok(())
        }
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, secret: Option<&str>, seed: Option<u64>) -> Result<()> {
    use termo::interactive::{App, run_tui};

    let game = new_game(dictionary, secret, seed)?;
    run_tui(App::new(game))
}
