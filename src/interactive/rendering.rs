//! TUI rendering with ratatui
//!
//! Board grid, keyboard summary, hints, statistics and messages.

use super::app::{App, MessageStyle, keyboard_summary};
use crate::core::{Cell, GuessResult, ROWS};
use crate::game::GameState;
use crate::output::formatters::{cell_letter, create_progress_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("💡 HINTLE - Guess the word, one hint per turn")
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(5)])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn cell_style(cell: Cell) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match cell.result {
        Some(GuessResult::Correct) => style.fg(Color::Black).bg(Color::Green),
        Some(GuessResult::Misplaced) => style.fg(Color::Black).bg(Color::Yellow),
        Some(GuessResult::Incorrect) => style.fg(Color::White).bg(Color::DarkGray),
        None if cell.value.is_none() => Style::new().fg(Color::DarkGray),
        None => style.fg(Color::White),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let active = (!game.state().is_over()).then_some(game.turn());

    let mut lines: Vec<Line> = game
        .board()
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let marker = if active == Some(i) { " ▶ " } else { "   " };
            let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Cyan))];
            for &cell in row {
                spans.push(Span::styled(format!(" {} ", cell_letter(cell)), cell_style(cell)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    if game.state() == GameState::Lost {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("   Answer: "),
            Span::styled(
                game.answer().text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let summary = keyboard_summary(app.session.game().board());

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .map(|letter| {
                    let cell = Cell {
                        value: Some(letter),
                        result: summary.get(&letter).copied(),
                    };
                    Span::styled(format!(" {letter} "), cell_style(cell))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Hints
            Constraint::Percentage(30), // Guess distribution
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.game().revealed_hints();
    let items: Vec<ListItem> = if hints.is_empty() {
        vec![ListItem::new("Waiting for hints...").style(Style::default().fg(Color::DarkGray))]
    } else {
        hints
            .iter()
            .enumerate()
            .map(|(i, hint)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        hint.clone(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let dist = &app.stats.guess_distribution;
    let max = dist.iter().copied().max().unwrap_or(0);

    let lines: Vec<Line> = (1..=ROWS)
        .map(|guesses| {
            let count = dist[guesses];
            Line::from(vec![
                Span::raw(format!("{guesses}: ")),
                Span::styled(create_progress_bar(count, max, 16), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let game = app.session.game();
    let turn_text = match game.state() {
        GameState::InProgress => format!("Turn {}/{ROWS}", game.turn() + 1),
        state => format!("Game {state}"),
    };
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if game.state().is_over() {
        "n: New Game | q: Quit"
    } else {
        "Type to guess | Bksp: Delete | ^N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
