//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Cell, GuessResult, Row};

/// Format a row as emoji, with `·` for cells not yet graded
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.iter()
        .map(|cell| cell.result.map_or('·', GuessResult::emoji))
        .collect()
}

/// The letter shown in a cell, or `_` when empty
#[must_use]
pub fn cell_letter(cell: Cell) -> char {
    cell.value.unwrap_or('_')
}

/// A cell as a three-column tile coloured by its grade
#[must_use]
pub fn colored_cell(cell: Cell) -> ColoredString {
    let tile = format!(" {} ", cell_letter(cell));
    match cell.result {
        Some(GuessResult::Correct) => tile.black().on_green().bold(),
        Some(GuessResult::Misplaced) => tile.black().on_yellow().bold(),
        Some(GuessResult::Incorrect) => tile.white().on_bright_black(),
        None if cell.is_empty() => tile.bright_black(),
        None => tile.bright_white().bold(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{COLS, Grades, Word};

    fn graded(guess: &str, answer: &str) -> Row {
        let guess = Word::new(guess).unwrap();
        let grades = Grades::calculate(&guess, &Word::new(answer).unwrap());
        let mut row = [Cell::EMPTY; COLS];
        for (cell, &byte) in row.iter_mut().zip(guess.chars()) {
            cell.value = Some(char::from(byte));
        }
        grades.apply_to(&row)
    }

    #[test]
    fn row_to_emoji_graded() {
        assert_eq!(row_to_emoji(&graded("rings", "right")), "🟩🟩⬜🟨⬜");
    }

    #[test]
    fn row_to_emoji_ungraded() {
        assert_eq!(row_to_emoji(&[Cell::EMPTY; COLS]), "·····");
    }

    #[test]
    fn empty_cell_shows_placeholder() {
        assert_eq!(cell_letter(Cell::EMPTY), '_');
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
