//! Immutable game board
//!
//! The board is a fixed grid of `ROWS` × `COLS` cells. Every update returns a
//! new board; rows that were not touched are shared with the previous board
//! through `Arc`, so a renderer holding an old board never observes a
//! half-applied change.

use std::sync::Arc;

use super::{COLS, Cell, GuessResult, ROWS, Word};

/// One guess attempt
pub type Row = [Cell; COLS];

/// A row's letters as a word, if every cell is filled
#[must_use]
pub fn row_word(row: &Row) -> Option<Word> {
    let text: Option<String> = row.iter().map(|c| c.value).collect();
    Word::new(text?).ok()
}

/// How a single field of a cell should change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edit<T> {
    /// Leave the field as it is
    #[default]
    Keep,
    /// Reset the field to empty
    Clear,
    /// Replace the field
    Set(T),
}

impl<T: Copy> Edit<T> {
    fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }
}

/// The whole grid of guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Arc<Row>; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every cell empty and ungraded
    #[must_use]
    pub fn empty() -> Self {
        let blank = Arc::new([Cell::EMPTY; COLS]);
        Self {
            rows: std::array::from_fn(|_| Arc::clone(&blank)),
        }
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().map(AsRef::as_ref)
    }

    /// Get a row, or `None` if the index is past the last row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row).map(AsRef::as_ref)
    }

    /// Get a single cell, or `None` when out of range
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.row(row).and_then(|r| r.get(col)).copied()
    }

    /// Return a board with cell `(row, col)` changed
    ///
    /// `value` and `result` are edited independently. Out-of-range
    /// coordinates leave the board as it is; this is what happens when a
    /// finished game receives a late update.
    ///
    /// # Examples
    /// ```
    /// use hintle::core::{Board, Edit};
    ///
    /// let board = Board::empty();
    /// let next = board.update_cell(0, 0, Edit::Set('A'), Edit::Keep);
    /// assert_eq!(next.cell(0, 0).unwrap().value, Some('A'));
    /// assert_eq!(board.cell(0, 0).unwrap().value, None);
    /// ```
    #[must_use]
    pub fn update_cell(
        &self,
        row: usize,
        col: usize,
        value: Edit<char>,
        result: Edit<GuessResult>,
    ) -> Self {
        let Some(current) = self.row(row) else {
            return self.clone();
        };
        if col >= COLS || (value == Edit::Keep && result == Edit::Keep) {
            return self.clone();
        }

        let mut new_row = *current;
        new_row[col] = Cell {
            value: value.apply(current[col].value),
            result: result.apply(current[col].result),
        };
        self.with_row(row, new_row)
    }

    /// Return a board with a whole row replaced
    ///
    /// Out-of-range rows leave the board unchanged.
    #[must_use]
    pub fn with_row(&self, row: usize, new_row: Row) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.rows.get_mut(row) {
            *slot = Arc::new(new_row);
        }
        next
    }

    /// The row's letters as a word, if every cell is filled
    #[must_use]
    pub fn word_at(&self, row: usize) -> Option<Word> {
        self.row(row).and_then(row_word)
    }

    /// Whether both boards hold the very same allocation for `row`
    #[must_use]
    pub fn shares_row(&self, other: &Self, row: usize) -> bool {
        match (self.rows.get(row), other.rows.get(row)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
