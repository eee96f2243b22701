//! Command implementations

pub mod grade;
pub mod simple;

pub use grade::{GradeResult, grade_words};
pub use simple::run_simple;
