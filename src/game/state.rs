//! Game state machine
//!
//! `Game` owns the board, the cursor, the outcome and the answer together, and
//! the only way to change them is through the event handlers below. Each
//! handler runs to completion, grading and win/loss checks included, before
//! it returns.

use std::fmt;

use tracing::{debug, info};

use super::KeyInput;
use crate::core::{Board, COLS, Edit, GuessResult, ROWS, Word, grade_row};
use crate::hints::{HintBatch, HintList};
use crate::wordlists::{AnswerSource, WordValidator};

/// Outcome of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Whether the game has finished
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Won => "WON",
            Self::Lost => "LOST",
        };
        f.write_str(label)
    }
}

/// What an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// A cell or the cursor moved within the active row
    Edited,
    /// The row is complete but not a word; it stays editable
    Rejected,
    /// The row was graded and play moved to the next row
    Advanced,
    Won,
    Lost,
}

/// One game session: board, cursor, state and answer
#[derive(Debug)]
pub struct Game<V, A> {
    validator: V,
    answers: A,
    answer: Word,
    board: Board,
    turn: usize,
    active_square: usize,
    state: GameState,
    hints: HintList,
}

impl<V: WordValidator, A: AnswerSource> Game<V, A> {
    /// Start a game with an answer drawn from `answers`
    pub fn new(validator: V, mut answers: A) -> Self {
        let answer = answers.next_answer();
        info!(turns = ROWS, "New game");
        Self {
            validator,
            answers,
            answer,
            board: Board::empty(),
            turn: 0,
            active_square: 0,
            state: GameState::InProgress,
            hints: HintList::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the active row
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Index of the next column eligible for input
    #[inline]
    #[must_use]
    pub const fn active_square(&self) -> usize {
        self.active_square
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The secret word; shells should only show it once the game is lost
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Hints the player has unlocked so far
    #[must_use]
    pub fn revealed_hints(&self) -> &[String] {
        self.hints.revealed()
    }

    /// Dispatch a key event
    pub fn handle_key(&mut self, key: KeyInput) -> Transition {
        match key {
            KeyInput::Letter(letter) => self.letter_input(letter),
            KeyInput::Delete => self.delete(),
            KeyInput::Ignored => Transition::Ignored,
        }
    }

    /// Type a letter at the cursor
    ///
    /// On the last column this also submits the row.
    pub fn letter_input(&mut self, letter: char) -> Transition {
        if self.state.is_over() || !letter.is_ascii_alphabetic() {
            return Transition::Ignored;
        }

        let letter = letter.to_ascii_uppercase();
        self.board = self.board.update_cell(
            self.turn,
            self.active_square,
            Edit::Set(letter),
            Edit::Keep,
        );

        if self.active_square < COLS - 1 {
            self.active_square += 1;
            Transition::Edited
        } else {
            self.submit_row()
        }
    }

    /// Remove the most recent letter of the active row
    pub fn delete(&mut self) -> Transition {
        if self.state.is_over() || self.active_square == 0 {
            return Transition::Ignored;
        }

        let last = COLS - 1;
        let last_filled = self
            .board
            .cell(self.turn, last)
            .is_some_and(|cell| !cell.is_empty());

        if self.active_square == last && last_filled {
            // Completed-but-rejected row: clear in place so the letter can be retyped
            self.board = self
                .board
                .update_cell(self.turn, last, Edit::Clear, Edit::Keep);
        } else {
            self.active_square -= 1;
            self.board = self.board.update_cell(
                self.turn,
                self.active_square,
                Edit::Clear,
                Edit::Keep,
            );
        }
        Transition::Edited
    }

    /// Check, grade and settle the full active row
    fn submit_row(&mut self) -> Transition {
        let Some(guess) = self.board.word_at(self.turn) else {
            return Transition::Edited;
        };

        if !self.validator.is_real_word(guess.text()) {
            debug!(guess = %guess, turn = self.turn, "Not a word");
            return Transition::Rejected;
        }

        let Some(graded) = self
            .board
            .row(self.turn)
            .and_then(|row| grade_row(row, &self.answer))
        else {
            return Transition::Edited;
        };
        let solved = graded
            .iter()
            .all(|cell| cell.result == Some(GuessResult::Correct));
        self.board = self.board.with_row(self.turn, graded);
        debug!(guess = %guess, turn = self.turn, solved, "Row graded");

        if solved {
            self.state = GameState::Won;
            info!(guesses = self.turn + 1, "Game won");
            Transition::Won
        } else if self.turn == ROWS - 1 {
            self.state = GameState::Lost;
            info!(answer = %self.answer, "Game lost");
            Transition::Lost
        } else {
            self.turn += 1;
            self.active_square = 0;
            self.hints.reveal_through(self.turn);
            Transition::Advanced
        }
    }

    /// Throw the current game away and start over with a new answer
    ///
    /// Allowed in every state.
    pub fn new_game(&mut self) {
        self.answer = self.answers.next_answer();
        self.board = Board::empty();
        self.turn = 0;
        self.active_square = 0;
        self.state = GameState::InProgress;
        self.hints = HintList::default();
        info!(turns = ROWS, "New game");
    }

    /// The answer to fetch hints for, if a fetch should start now
    ///
    /// Marks the fetch as requested, so each game asks at most once.
    pub fn hint_request(&mut self) -> Option<Word> {
        if self.state != GameState::InProgress || !self.hints.needs_fetch() {
            return None;
        }
        self.hints.mark_requested();
        Some(self.answer.clone())
    }

    /// Accept fetched hints
    ///
    /// Batches for any answer other than the current one are stale and
    /// dropped. Returns whether the batch was applied.
    pub fn receive_hints(&mut self, batch: HintBatch) -> bool {
        if batch.answer != self.answer {
            debug!(stale = %batch.answer, "Discarding hints for a previous game");
            return false;
        }
        if !self.hints.fill(batch.hints) {
            return false;
        }
        if self.state == GameState::InProgress {
            self.hints.reveal_through(self.turn);
        }
        true
    }
}
