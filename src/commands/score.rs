//! Score a single guess against a secret

use crate::core::{Pattern, Word, WordError};

/// Feedback of one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub pattern: Pattern,
}

/// Compute the feedback row for `guess` against `secret`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns `WordError` if either input is not a five-letter word.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let pattern = Pattern::calculate(&guess, &secret);

    Ok(ScoreResult {
        secret,
        guess,
        pattern,
    })
}
