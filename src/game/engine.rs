//! Game state machine
//!
//! A `Game` owns one round: the secret, the grid with its cursor and the
//! keyboard classification. All mutation goes through its methods and every
//! call is synchronous; visual timing is left to the caller via `RevealPlan`.

use super::grid::{Grid, MAX_GUESSES};
use super::keyboard::KeyboardState;
use super::reveal::RevealPlan;
use crate::core::{Pattern, WORD_LENGTH, Word};
use crate::dictionary::Dictionary;
use rand::rngs::StdRng;
use std::fmt;

/// Where the game stands between two inputs
///
/// Evaluation of a guess happens entirely inside [`Game::submit_guess`], so it
/// is never observable as a status of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Collecting,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The submitted row is not a dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidWordError {
    pub word: String,
}

impl fmt::Display for InvalidWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid word: {}", self.word.to_uppercase())
    }
}

impl std::error::Error for InvalidWordError {}

/// Result of evaluating one guess
#[derive(Debug, Clone)]
pub struct Submission {
    pub row: usize,
    pub guess: Word,
    pub pattern: Pattern,
    pub status: GameStatus,
    pub reveal: RevealPlan,
}

/// One round of the game
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    rng: StdRng,
    secret: Word,
    grid: Grid,
    current_row: usize,
    current_col: usize,
    keyboard: KeyboardState,
    feedback: Vec<Pattern>,
    status: GameStatus,
    generation: u64,
}

impl<'a> Game<'a> {
    /// Start a game with a random secret
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use termo::dictionary::Dictionary;
    /// use termo::game::{Game, GameStatus};
    ///
    /// let dict = Dictionary::from_strs(&["apple", "happy", "cease", "zebra"]).unwrap();
    /// let game = Game::new(&dict, StdRng::seed_from_u64(1));
    /// assert_eq!(game.status(), GameStatus::Collecting);
    /// assert!(dict.contains(game.secret()));
    /// ```
    pub fn new(dictionary: &'a Dictionary, mut rng: StdRng) -> Self {
        let secret = dictionary.pick_secret(&mut rng).clone();
        Self::start(dictionary, rng, secret)
    }

    /// Start a game with a chosen secret
    ///
    /// # Errors
    /// Returns `InvalidWordError` if `secret` is not in the dictionary.
    pub fn with_secret(
        dictionary: &'a Dictionary,
        secret: &str,
        rng: StdRng,
    ) -> Result<Self, InvalidWordError> {
        let secret = dictionary
            .lookup(secret)
            .cloned()
            .ok_or_else(|| InvalidWordError {
                word: secret.to_string(),
            })?;
        Ok(Self::start(dictionary, rng, secret))
    }

    fn start(dictionary: &'a Dictionary, rng: StdRng, secret: Word) -> Self {
        log::debug!("new game started");
        Self {
            dictionary,
            rng,
            secret,
            grid: Grid::new(),
            current_row: 0,
            current_col: 0,
            keyboard: KeyboardState::new(),
            feedback: Vec::with_capacity(MAX_GUESSES),
            status: GameStatus::Collecting,
            generation: 0,
        }
    }

    /// Type a letter into the next free cell of the current row
    ///
    /// No-op when the row is full, the game is over or `ch` is not alphabetic.
    pub fn add_letter(&mut self, ch: char) {
        if self.is_terminal() || self.current_col >= WORD_LENGTH || !ch.is_alphabetic() {
            return;
        }

        let mut lower = ch.to_lowercase();
        let letter = match (lower.next(), lower.next()) {
            (Some(letter), None) => letter,
            _ => ch,
        };

        self.grid.set(self.current_row, self.current_col, letter);
        self.current_col += 1;
    }

    /// Erase the last typed letter of the current row
    ///
    /// No-op at column 0 or when the game is over.
    pub fn remove_letter(&mut self) {
        if self.is_terminal() || self.current_col == 0 {
            return;
        }

        self.current_col -= 1;
        self.grid.clear(self.current_row, self.current_col);
    }

    /// Submit the current row as a guess
    ///
    /// Returns `Ok(None)` without touching state when the row is incomplete or
    /// the game is over. On success, feedback and keyboard state are updated
    /// and the turn advances before this returns.
    ///
    /// # Errors
    /// Returns `InvalidWordError` if the row is not a dictionary word. State is
    /// left unchanged so the player can keep editing.
    pub fn submit_guess(&mut self) -> Result<Option<Submission>, InvalidWordError> {
        if self.is_terminal() || self.current_col < WORD_LENGTH {
            return Ok(None);
        }

        let text = self.grid.row_text(self.current_row);
        let Some(entry) = self.dictionary.lookup(&text) else {
            log::debug!("rejected guess '{text}'");
            return Err(InvalidWordError { word: text });
        };
        let guess = entry.clone();

        let pattern = Pattern::calculate(&guess, &self.secret);
        self.keyboard.update(&guess, pattern);
        self.feedback.push(pattern);

        let row = self.current_row;
        self.status = if guess == self.secret {
            GameStatus::Won
        } else {
            self.current_row += 1;
            self.current_col = 0;
            if self.current_row == MAX_GUESSES {
                GameStatus::Lost
            } else {
                GameStatus::Collecting
            }
        };

        log::debug!("guess {} '{}' → {}", row + 1, guess, pattern.to_emoji());
        match self.status {
            GameStatus::Won => log::info!("game won in {} guesses", row + 1),
            GameStatus::Lost => log::info!("game lost, secret was '{}'", self.secret),
            GameStatus::Collecting => {}
        }

        Ok(Some(Submission {
            row,
            guess,
            pattern,
            status: self.status,
            reveal: RevealPlan::new(self.generation, row, pattern),
        }))
    }

    /// Start over with a new random secret
    ///
    /// The new secret may equal the previous one.
    pub fn reset(&mut self) {
        self.secret = self.dictionary.pick_secret(&mut self.rng).clone();
        self.grid = Grid::new();
        self.current_row = 0;
        self.current_col = 0;
        self.keyboard = KeyboardState::new();
        self.feedback = Vec::with_capacity(MAX_GUESSES);
        self.status = GameStatus::Collecting;
        self.generation += 1;
        log::debug!("game reset, generation {}", self.generation);
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid.cell(row, col)
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Feedback of an already submitted row
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<Pattern> {
        self.feedback.get(row).copied()
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.feedback.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Incremented on every reset; tags reveal plans
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Label for the restart control
    #[must_use]
    pub const fn restart_label(&self) -> &'static str {
        if self.is_terminal() {
            "Play again"
        } else {
            "Restart"
        }
    }

    /// End-of-game notification, `None` while still playing
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        match self.status {
            GameStatus::Won => Some("Congratulations, you won!".to_string()),
            GameStatus::Lost => Some(format!(
                "Too bad, you lost... The word was: {}.",
                self.secret.text().to_uppercase()
            )),
            GameStatus::Collecting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::SeedableRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&[
            "apple", "happy", "cease", "zebra", "crane", "slate", "audio", "mamãe",
        ])
        .unwrap()
    }

    fn game_with_secret<'a>(dict: &'a Dictionary, secret: &str) -> Game<'a> {
        Game::with_secret(dict, secret, StdRng::seed_from_u64(9)).unwrap()
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch);
        }
    }

    fn guess(game: &mut Game, word: &str) -> Result<Option<Submission>, InvalidWordError> {
        type_word(game, word);
        game.submit_guess()
    }

    #[test]
    fn new_game_starts_collecting_with_blank_state() {
        let dict = dictionary();
        let game = Game::new(&dict, StdRng::seed_from_u64(3));

        assert_eq!(game.status(), GameStatus::Collecting);
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 0);
        assert!(game.grid().is_blank());
        assert!(game.keyboard().is_empty());
        assert!(dict.contains(game.secret()));
        assert_eq!(game.restart_label(), "Restart");
        assert_eq!(game.end_message(), None);
    }

    #[test]
    fn with_secret_rejects_unknown_words() {
        let dict = dictionary();
        let err = Game::with_secret(&dict, "qwert", StdRng::seed_from_u64(0)).err();
        assert_eq!(
            err,
            Some(InvalidWordError {
                word: "qwert".to_string()
            })
        );
    }

    #[test]
    fn add_letter_fills_row_and_stops_at_five() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");

        type_word(&mut game, "Zebras");
        assert_eq!(game.current_col(), 5);
        assert_eq!(game.grid().row_text(0), "zebra");
        assert_eq!(game.cell(0, 0), Some('z'));
        assert_eq!(game.cell(1, 0), None);
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");

        game.add_letter('1');
        game.add_letter(' ');
        game.add_letter('!');
        assert_eq!(game.current_col(), 0);

        game.add_letter('Ã');
        assert_eq!(game.cell(0, 0), Some('ã'));
    }

    #[test]
    fn remove_letter_is_noop_at_column_zero() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");

        game.remove_letter();
        assert_eq!(game.current_col(), 0);

        type_word(&mut game, "ab");
        game.remove_letter();
        assert_eq!(game.current_col(), 1);
        assert_eq!(game.grid().row_text(0), "a");
        assert_eq!(game.cell(0, 1), None);
    }

    #[test]
    fn submit_with_incomplete_row_is_noop() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");

        type_word(&mut game, "zeb");
        assert!(game.submit_guess().unwrap().is_none());
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 3);
        assert_eq!(game.grid().row_text(0), "zeb");
        assert!(game.keyboard().is_empty());
    }

    #[test]
    fn invalid_word_leaves_state_unchanged() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");
        guess(&mut game, "zebra").unwrap();

        let grid_before = game.grid().clone();
        let keyboard_before = game.keyboard().clone();

        let err = guess(&mut game, "qwert").unwrap_err();
        assert_eq!(err.word, "qwert");
        assert_eq!(err.to_string(), "Invalid word: QWERT");

        assert_eq!(game.status(), GameStatus::Collecting);
        assert_eq!(game.current_row(), 1);
        assert_eq!(game.current_col(), 5);
        assert_eq!(game.grid(), &grid_before);
        assert_eq!(game.keyboard(), &keyboard_before);
        assert_eq!(game.guesses_used(), 1);

        // the player can keep editing the rejected row
        game.remove_letter();
        assert_eq!(game.current_col(), 4);
    }

    #[test]
    fn scenario_zebra_then_apple() {
        let dict = Dictionary::from_strs(&["apple", "happy", "cease", "zebra"]).unwrap();
        let mut game = game_with_secret(&dict, "apple");

        let first = guess(&mut game, "zebra").unwrap().unwrap();
        assert_eq!(
            first.pattern.as_array(),
            &[
                Feedback::Absent,
                Feedback::Wrong,
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Wrong,
            ]
        );
        assert_eq!(first.status, GameStatus::Collecting);
        assert_eq!(first.row, 0);
        assert_eq!(game.current_row(), 1);
        assert_eq!(game.current_col(), 0);

        let second = guess(&mut game, "apple").unwrap().unwrap();
        assert!(second.pattern.is_perfect());
        assert_eq!(second.status, GameStatus::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.end_message().as_deref(), Some("Congratulations, you won!"));
        assert_eq!(game.restart_label(), "Play again");
    }

    #[test]
    fn win_is_detected_on_any_row() {
        let dict = dictionary();
        for misses in 0..MAX_GUESSES {
            let mut game = game_with_secret(&dict, "crane");
            for _ in 0..misses {
                guess(&mut game, "slate").unwrap();
            }
            let submission = guess(&mut game, "crane").unwrap().unwrap();
            assert_eq!(submission.status, GameStatus::Won, "after {misses} misses");
            assert_eq!(submission.row, misses);
        }
    }

    #[test]
    fn sixth_miss_loses() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "crane");

        for row in 0..5 {
            let submission = guess(&mut game, "slate").unwrap().unwrap();
            assert_eq!(submission.status, GameStatus::Collecting, "row {row}");
        }
        let last = guess(&mut game, "audio").unwrap().unwrap();
        assert_eq!(last.row, 5);
        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(game.current_row(), 6);
        assert_eq!(game.current_col(), 0);
        assert_eq!(
            game.end_message().as_deref(),
            Some("Too bad, you lost... The word was: CRANE.")
        );
    }

    #[test]
    fn terminal_state_rejects_input() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "crane");
        guess(&mut game, "crane").unwrap();
        let grid_before = game.grid().clone();

        game.add_letter('a');
        game.remove_letter();
        assert!(game.submit_guess().unwrap().is_none());
        assert_eq!(game.grid(), &grid_before);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn lost_state_rejects_input() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "crane");
        for _ in 0..MAX_GUESSES {
            guess(&mut game, "slate").unwrap();
        }
        assert_eq!(game.status(), GameStatus::Lost);

        game.add_letter('a');
        assert_eq!(game.current_col(), 0);
        assert!(game.submit_guess().unwrap().is_none());
    }

    #[test]
    fn accented_secret_is_won_with_plain_letters() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "mamae");
        assert_eq!(game.secret().text(), "mamãe");

        let submission = guess(&mut game, "MAMAE").unwrap().unwrap();
        assert_eq!(submission.status, GameStatus::Won);
        assert_eq!(submission.guess.text(), "mamãe");
    }

    #[test]
    fn keyboard_tracks_guesses() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");
        guess(&mut game, "zebra").unwrap();

        assert_eq!(game.keyboard().classification('z'), Some(Feedback::Absent));
        assert_eq!(game.keyboard().classification('e'), Some(Feedback::Wrong));
        assert_eq!(game.row_feedback(0), Pattern::from_str("-Y--Y"));
        assert_eq!(game.row_feedback(1), None);

        guess(&mut game, "cease").unwrap();
        assert_eq!(game.keyboard().classification('e'), Some(Feedback::Correct));

        guess(&mut game, "happy").unwrap();
        assert_eq!(game.keyboard().classification('e'), Some(Feedback::Correct));
    }

    #[test]
    fn reset_after_terminal_state_starts_fresh() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");
        guess(&mut game, "zebra").unwrap();
        guess(&mut game, "apple").unwrap();
        assert!(game.is_terminal());

        game.reset();
        assert_eq!(game.status(), GameStatus::Collecting);
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_col(), 0);
        assert!(game.grid().is_blank());
        assert!(game.keyboard().is_empty());
        assert_eq!(game.guesses_used(), 0);
        assert!(dict.contains(game.secret()));
        assert_eq!(game.restart_label(), "Restart");
    }

    #[test]
    fn reset_mid_game_starts_fresh() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");
        guess(&mut game, "zebra").unwrap();
        type_word(&mut game, "hap");

        game.reset();
        assert!(game.grid().is_blank());
        assert_eq!(game.current_col(), 0);
        assert!(game.keyboard().is_empty());
    }

    #[test]
    fn reveal_plan_is_tagged_with_generation() {
        let dict = dictionary();
        let mut game = game_with_secret(&dict, "apple");

        let before = guess(&mut game, "zebra").unwrap().unwrap().reveal;
        assert_eq!(before.generation, game.generation());
        assert_eq!(before.steps.len(), WORD_LENGTH);
        assert!(before.steps.iter().all(|s| s.row == 0));

        game.reset();
        assert_ne!(before.generation, game.generation());
    }
}
