//! Core domain types for the word game
//!
//! This module contains the board model and the grading engine. Everything
//! here is pure and synchronous: values go in, new values come out.

mod board;
mod cell;
mod grades;
mod word;

pub use board::{Board, Edit, Row, row_word};
pub use cell::{Cell, GuessResult};
pub use grades::{Grades, ParseGradesError, grade_row};
pub use word::{Word, WordError};

/// Number of guesses per game
pub const ROWS: usize = 6;

/// Letters per word
pub const COLS: usize = 5;
