//! Display functions for the line-based front ends

use super::formatters::{colored_cell, row_to_emoji};
use crate::commands::GradeResult;
use crate::core::{Board, Row};
use colored::Colorize;

/// Print the result of grading one guess
pub fn print_grade_result(result: &GradeResult) {
    println!(
        "{} vs {}: {}",
        result.guess.text().bright_white().bold(),
        result.answer.text().bright_yellow().bold(),
        result.grades.to_emoji()
    );
}

/// Print the board, marking the active row
pub fn print_board(board: &Board, active_row: Option<usize>) {
    println!("{}", "─".repeat(24).cyan());
    for (i, row) in board.rows().enumerate() {
        let marker = if active_row == Some(i) { "▶" } else { " " };
        let tiles: String = row.iter().map(|&cell| colored_cell(cell).to_string()).collect();
        println!(" {} {}", marker.bright_cyan(), tiles);
    }
    println!("{}", "─".repeat(24).cyan());
}

/// Print the hints the player has unlocked
pub fn print_hints(hints: &[String]) {
    if hints.is_empty() {
        println!("💡 Hints: {}", "(waiting)".bright_black());
        return;
    }
    println!("💡 Hints:");
    for (i, hint) in hints.iter().enumerate() {
        println!("   {}. {}", (i + 1).to_string().bright_black(), hint.bright_white());
    }
}

/// Celebration banner with the guess history
pub fn print_win<'a>(guesses: usize, rows: impl IntoIterator<Item = &'a Row>) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!("{}", "   🎉  H I N T L E   S O L V E D !  🎉".bright_green().bold());
    println!("{}", "═".repeat(50).bright_cyan());

    let verdict = match guesses {
        1 => "🏆 Perfect!",
        2 => "⭐ Excellent!",
        3 => "💫 Great!",
        4 => "✨ Good!",
        _ => "👍 Solved!",
    };
    println!("\n  {}", verdict.bright_yellow().bold());
    println!(
        "  Solved in {} {}\n",
        guesses.to_string().bright_cyan().bold(),
        if guesses == 1 { "guess" } else { "guesses" }
    );
    for row in rows.into_iter().take(guesses) {
        println!("    {}", row_to_emoji(row));
    }
    println!();
}

/// The answer, shown once the player runs out of rows
pub fn print_loss(answer: &str) {
    println!(
        "\n{} The word was {}\n",
        "❌ Out of guesses.".red().bold(),
        answer.bright_yellow().bold()
    );
}
