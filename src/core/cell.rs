//! Letter cells and their grading results

use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessResult {
    /// Letter is in the answer at this exact position
    Correct,
    /// Letter is in the answer, but somewhere else
    Misplaced,
    /// Letter contributes no further match
    Incorrect,
}

impl GuessResult {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "CORRECT",
            Self::Misplaced => "MISPLACED",
            Self::Incorrect => "INCORRECT",
        };
        f.write_str(label)
    }
}

/// One square of the board
///
/// Cells are plain values: the board replaces them, it never edits one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Uppercase letter, or `None` when the square is empty
    pub value: Option<char>,
    /// Grade, set only once the row passed the word check
    pub result: Option<GuessResult>,
}

impl Cell {
    /// An empty, ungraded cell
    pub const EMPTY: Self = Self {
        value: None,
        result: None,
    };

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.result.is_some()
    }
}
