//! Hintle
//!
//! A Wordle-style guessing game where every turn unlocks a related-word hint.
//!
//! # Quick Start
//!
//! ```rust
//! use hintle::core::{GuessResult, Word};
//! use hintle::game::{Game, GameState, KeyInput};
//! use hintle::wordlists::{FixedAnswer, WordList};
//!
//! let answer = Word::new("right").unwrap();
//! let mut game = Game::new(WordList::embedded(), FixedAnswer(answer));
//!
//! for ch in "rings".chars() {
//!     game.handle_key(KeyInput::from(ch));
//! }
//!
//! let row = game.board().row(0).unwrap();
//! assert_eq!(row[0].result, Some(GuessResult::Correct));
//! assert_eq!(row[3].result, Some(GuessResult::Misplaced));
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

// Board, cells and grading
pub mod core;

// State machine and hint-aware session
pub mod game;

// Related-word hints
pub mod hints;

// Word lists
pub mod wordlists;

// Runtime configuration and tracing setup
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
