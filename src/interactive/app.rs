//! TUI application state and logic

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{Board, GuessResult, ROWS};
use crate::game::{KeyInput, Session, Transition};
use crate::wordlists::{AnswerSource, WordList};

/// How often the loop wakes to pick up hints when no key is pressed
const TICK: Duration = Duration::from_millis(100);

/// The session type the TUI drives
pub type TuiSession = Session<WordList, Box<dyn AnswerSource + Send>>;

/// Application state
pub struct App {
    pub session: TuiSession,
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

/// Results across the games played in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guess count (index 0 unused)
    pub guess_distribution: [usize; ROWS + 1],
}

impl Statistics {
    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(KeyInput),
    NewGame,
    Quit,
    Noop,
}

/// Translate a terminal key event
///
/// Once a game is over, `n` and `q` start a new game or quit instead of
/// typing.
#[must_use]
pub fn map_key(key: KeyEvent, game_over: bool) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('n') if ctrl => Action::NewGame,
        KeyCode::Char(_) if ctrl => Action::Noop,
        KeyCode::Char('n' | 'N') if game_over => Action::NewGame,
        KeyCode::Char('q' | 'Q') if game_over => Action::Quit,
        KeyCode::Char(c) => Action::Key(KeyInput::from(c)),
        KeyCode::Backspace | KeyCode::Delete => Action::Key(KeyInput::Delete),
        _ => Action::Noop,
    }
}

/// Best grade seen for each letter, for the keyboard summary
#[must_use]
pub fn keyboard_summary(board: &Board) -> FxHashMap<char, GuessResult> {
    let mut summary = FxHashMap::default();
    for cell in board.rows().flatten() {
        if let (Some(letter), Some(result)) = (cell.value, cell.result) {
            summary
                .entry(letter)
                .and_modify(|best: &mut GuessResult| {
                    if rank(result) > rank(*best) {
                        *best = result;
                    }
                })
                .or_insert(result);
        }
    }
    summary
}

const fn rank(result: GuessResult) -> u8 {
    match result {
        GuessResult::Incorrect => 0,
        GuessResult::Misplaced => 1,
        GuessResult::Correct => 2,
    }
}

impl App {
    #[must_use]
    pub fn new(session: TuiSession) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Welcome to Hintle! Guess the five-letter word.", MessageStyle::Info);
        app.add_message("A new hint unlocks with every guess.", MessageStyle::Info);
        app
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Key(key) => {
                let transition = self.session.handle_key(key);
                debug!(?key, ?transition, "Key handled");
                self.after_transition(transition);
            }
            Action::NewGame => self.new_game(),
            Action::Quit => self.should_quit = true,
            Action::Noop => {}
        }
    }

    fn after_transition(&mut self, transition: Transition) {
        let game = self.session.game();
        match transition {
            Transition::Rejected => {
                let word = game
                    .board()
                    .row(game.turn())
                    .map(|row| row.iter().filter_map(|c| c.value).collect::<String>())
                    .unwrap_or_default();
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            Transition::Won => {
                let guesses = game.turn() + 1;
                self.stats.record_win(guesses);
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Transition::Lost => {
                let text = format!("Out of guesses! The word was {}", game.answer());
                self.stats.record_loss();
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Transition::Ignored | Transition::Edited | Transition::Advanced => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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
/// Must be called from inside a tokio runtime, which runs the hint fetches.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.session.poll_hints();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            let over = app.session.game().state().is_over();
            app.apply(map_key(key, over));
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{Edit, Word, grade_row};
    use crate::game::{Game, GameState};
    use crate::hints::Offline;
    use crate::wordlists::FixedAnswer;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(answer: &str) -> App {
        let answers: Box<dyn AnswerSource + Send> =
            Box::new(FixedAnswer(Word::new(answer).unwrap()));
        let game = Game::new(WordList::embedded(), answers);
        App::new(Session::new(game, Arc::new(Offline)))
    }

    fn type_keys(app: &mut App, word: &str) {
        for c in word.chars() {
            let over = app.session.game().state().is_over();
            app.apply(map_key(press(KeyCode::Char(c)), over));
        }
    }

    #[test]
    fn letters_type_while_playing() {
        assert_eq!(
            map_key(press(KeyCode::Char('n')), false),
            Action::Key(KeyInput::Letter('N'))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), false),
            Action::Key(KeyInput::Delete)
        );
    }

    #[test]
    fn shortcuts_after_game_over() {
        assert_eq!(map_key(press(KeyCode::Char('n')), true), Action::NewGame);
        assert_eq!(map_key(press(KeyCode::Char('q')), true), Action::Quit);
        assert_eq!(map_key(ctrl('n'), false), Action::NewGame);
        assert_eq!(map_key(ctrl('c'), false), Action::Quit);
        assert_eq!(map_key(press(KeyCode::Esc), false), Action::Quit);
        assert_eq!(map_key(press(KeyCode::Tab), false), Action::Noop);
    }

    #[test]
    fn statistics_track_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record_win(3);
        stats.record_loss();
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.guess_distribution[3], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn keyboard_summary_keeps_best_grade() {
        let mut board = Board::empty();
        let guess = Word::new("eerie").unwrap();
        let answer = Word::new("emcee").unwrap();
        for (col, &b) in guess.chars().iter().enumerate() {
            board = board.update_cell(0, col, Edit::Set(char::from(b)), Edit::Keep);
        }
        let graded = grade_row(board.row(0).unwrap(), &answer).unwrap();
        let board = board.with_row(0, graded);

        let summary = keyboard_summary(&board);
        assert_eq!(summary[&'E'], GuessResult::Correct);
        assert_eq!(summary[&'R'], GuessResult::Incorrect);
        assert!(!summary.contains_key(&'Z'));
    }

    #[tokio::test]
    async fn win_updates_statistics() {
        let mut app = app("crane");
        type_keys(&mut app, "crane");

        assert_eq!(app.session.game().state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        app.apply(map_key(press(KeyCode::Char('n')), true));
        assert_eq!(app.session.game().state(), GameState::InProgress);
    }

    #[tokio::test]
    async fn rejected_word_is_reported() {
        let mut app = app("crane");
        type_keys(&mut app, "abcde");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("ABCDE"));
    }

    #[tokio::test]
    async fn quit_sets_flag() {
        let mut app = app("crane");
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
