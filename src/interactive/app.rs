//! TUI application state and logic

use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{Game, GameStatus, MAX_GUESSES, RevealPlan};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before advancing the reveal
const TICK_RATE: Duration = Duration::from_millis(50);

/// A reveal being played back
#[derive(Debug, Clone)]
pub struct ActiveReveal {
    pub plan: RevealPlan,
    pub started: Instant,
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    /// Cell colors shown so far; lags behind the engine during a reveal
    pub painted: [[Option<Feedback>; WORD_LENGTH]; MAX_GUESSES],
    pub reveal: Option<ActiveReveal>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Wins per number of guesses, e.g. "1:0 2:1 3:0 4:0 5:0 6:0"
    #[must_use]
    pub fn distribution_line(&self) -> String {
        (1..=MAX_GUESSES)
            .map(|guesses| format!("{guesses}:{}", self.guess_distribution[guesses]))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        Self {
            game,
            painted: [[None; WORD_LENGTH]; MAX_GUESSES],
            reveal: None,
            messages: vec![Message {
                text: format!("Guess the five-letter word in {MAX_GUESSES} tries."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Translate one key press into engine calls
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Tab => self.restart(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(now),
            KeyCode::Backspace | KeyCode::Delete => self.game.remove_letter(),
            KeyCode::Char(c)
                if c.is_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.game.add_letter(c);
            }
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        if self.game.is_terminal() {
            return;
        }

        match self.game.submit_guess() {
            Ok(Some(submission)) => {
                // a new row starts only after the previous one was painted
                self.finish_reveal();
                self.reveal = Some(ActiveReveal {
                    plan: submission.reveal,
                    started: now,
                });
            }
            Ok(None) => self.add_message("Not enough letters", MessageStyle::Error),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn record_result(&mut self, status: GameStatus, guesses: usize) {
        self.stats.total_games += 1;
        if status == GameStatus::Won {
            self.stats.games_won += 1;
            if guesses <= MAX_GUESSES {
                self.stats.guess_distribution[guesses] += 1;
            }
        }
    }

    /// Start a new game; a reveal still in flight is discarded on the next tick
    pub fn restart(&mut self) {
        if self.game.is_terminal() && self.is_revealing() {
            // verdict not announced yet, so not counted yet
            self.record_result(self.game.status(), self.game.guesses_used());
        } else if !self.game.is_terminal() && self.game.guesses_used() > 0 {
            self.record_result(GameStatus::Lost, self.game.guesses_used());
        }
        self.game.reset();
        self.painted = [[None; WORD_LENGTH]; MAX_GUESSES];
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Apply reveal steps that are due at `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(active) = &self.reveal else {
            return;
        };

        if active.plan.generation != self.game.generation() {
            log::debug!(
                "dropping reveal from generation {}",
                active.plan.generation
            );
            self.reveal = None;
            return;
        }

        let elapsed = now.saturating_duration_since(active.started);
        for step in active.plan.due(elapsed) {
            self.painted[step.row][step.col] = Some(step.feedback);
        }

        if active.plan.is_finished(elapsed) {
            self.reveal = None;
            self.announce_verdict();
        }
    }

    /// Paint the whole pending row at once
    fn finish_reveal(&mut self) {
        if let Some(active) = self.reveal.take()
            && active.plan.generation == self.game.generation()
        {
            for step in &active.plan.steps {
                self.painted[step.row][step.col] = Some(step.feedback);
            }
        }
    }

    fn announce_verdict(&mut self) {
        if let Some(message) = self.game.end_message() {
            self.record_result(self.game.status(), self.game.guesses_used());
            let style = if self.game.status() == GameStatus::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&message, style);
            self.add_message(
                &format!("Press Tab to {}.", self.game.restart_label().to_lowercase()),
                MessageStyle::Info,
            );
        }
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Label of the restart control as shown on screen
    ///
    /// Stays "Restart" until the final row has been revealed.
    #[must_use]
    pub fn restart_label(&self) -> &'static str {
        if self.is_revealing() {
            "Restart"
        } else {
            self.game.restart_label()
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI loop failed: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
