//! Terminal output formatting
//!
//! Colored printing for the `simple` and `grade` commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_grade_result, print_hints, print_loss, print_win};
