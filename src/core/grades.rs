//! Guess grading
//!
//! Grades are the per-letter feedback for one guess:
//! - CORRECT: letter in the answer at this position
//! - MISPLACED: letter in the answer, elsewhere
//! - INCORRECT: no further copy of the letter is left to match
//!
//! Duplicate letters are handed out from a pool of the answer's letters, so a
//! guess never earns more CORRECT + MISPLACED marks for a letter than the
//! answer has copies of it.

use std::fmt;
use std::str::FromStr;

use super::{COLS, GuessResult, Row, Word, row_word};

/// Feedback for every position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grades([GuessResult; COLS]);

impl Grades {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([GuessResult::Correct; COLS]);

    /// Grade `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches CORRECT and take them out of the pool
    /// 2. Second pass: left to right, mark a non-CORRECT letter MISPLACED if the
    ///    pool still has a copy, taking that copy out
    /// 3. Everything else stays INCORRECT
    ///
    /// # Examples
    /// ```
    /// use hintle::core::{GuessResult, Grades, Word};
    ///
    /// let guess = Word::new("rings").unwrap();
    /// let answer = Word::new("right").unwrap();
    /// let grades = Grades::calculate(&guess, &answer);
    ///
    /// assert_eq!(grades.get(0), GuessResult::Correct);
    /// assert_eq!(grades.get(3), GuessResult::Misplaced);
    /// assert_eq!(grades.to_emoji(), "🟩🟩⬜🟨⬜");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [GuessResult::Incorrect; COLS];
        let mut remaining = answer.letter_counts();

        // First pass: exact position matches
        #[allow(clippy::needless_range_loop)]
        for i in 0..COLS {
            if guess.char_at(i) == answer.char_at(i) {
                result[i] = GuessResult::Correct;
                if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong place
        #[allow(clippy::needless_range_loop)]
        for i in 0..COLS {
            if result[i] == GuessResult::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = GuessResult::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Result at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> GuessResult {
        self.0[position]
    }

    /// All five results in order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[GuessResult; COLS] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions with the given result
    #[must_use]
    pub fn count(&self, result: GuessResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }

    /// Write these grades onto a row's cells, leaving the letters alone
    #[must_use]
    pub fn apply_to(&self, row: &Row) -> Row {
        let mut graded = *row;
        for (cell, &result) in graded.iter_mut().zip(&self.0) {
            cell.result = Some(result);
        }
        graded
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

/// Grade a filled row against `answer`
///
/// Returns the same row with every result set, or `None` when the row is not
/// completely filled; only complete rows are ever graded.
#[must_use]
pub fn grade_row(row: &Row, answer: &Word) -> Option<Row> {
    let guess = row_word(row)?;
    Some(Grades::calculate(&guess, answer).apply_to(row))
}

/// Error for grade strings that are not five of G / Y / -
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid grade string: {0}")]
pub struct ParseGradesError(String);

impl FromStr for Grades {
    type Err = ParseGradesError;

    /// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts 'G'/🟩 for correct, 'Y'/🟨 for misplaced and '-'/'_'/⬜ for
    /// incorrect, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != COLS {
            return Err(ParseGradesError(s.to_string()));
        }

        let mut result = [GuessResult::Incorrect; COLS];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => GuessResult::Correct,
                'Y' | 'y' | '🟨' => GuessResult::Misplaced,
                '-' | '_' | '⬜' => GuessResult::Incorrect,
                _ => return Err(ParseGradesError(s.to_string())),
            };
        }
        Ok(Self(result))
    }
}

impl fmt::Display for Grades {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
