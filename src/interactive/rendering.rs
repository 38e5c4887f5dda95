//! TUI rendering with ratatui
//!
//! Grid, on-screen keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::MAX_GUESSES;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + messages
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(main_chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_messages(f, app, side_chunks[0]);
    render_distribution(f, app, side_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Background color for a feedback tier
const fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Wrong => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    }
}

fn tile(letter: Option<char>, feedback: Option<Feedback>, active: bool) -> Span<'static> {
    let text = format!(" {} ", letter.map_or('·', |c| c.to_uppercase().next().unwrap_or(c)));
    let style = match feedback {
        Some(feedback) => Style::default()
            .fg(Color::Black)
            .bg(feedback_color(feedback))
            .add_modifier(Modifier::BOLD),
        None if active => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        None if letter.is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(text, style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 T E R M O 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let is_current = row == game.current_row() && !game.is_terminal();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|col| {
                let active = is_current && col == game.current_col();
                [
                    tile(game.cell(row, col), app.painted[row][col], active),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{MAX_GUESSES} ", (game.guesses_used() + 1).min(MAX_GUESSES)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let style = match keyboard.classification(key) {
                        Some(feedback) => Style::default()
                            .fg(Color::Black)
                            .bg(feedback_color(feedback))
                            .add_modifier(Modifier::BOLD),
                        None => Style::default().fg(Color::White),
                    };
                    [
                        Span::styled(format!(" {} ", key.to_ascii_uppercase()), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    if let Some(last) = lines.last_mut() {
        last.spans.insert(0, Span::styled(" Enter ", Style::default().fg(Color::Cyan)));
        last.spans.push(Span::styled(" ⌫ ", Style::default().fg(Color::Cyan)));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let distribution = Paragraph::new(app.stats.distribution_line())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Wins by guesses ")
                .borders(Borders::ALL),
        );
    f.render_widget(distribution, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = format!(
        "Enter: Submit | ⌫: Delete | Tab: {} | Esc: Quit",
        app.restart_label()
    );
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
