//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary and the dictionary
//! built on top of them.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{
    AnswerSource, FixedAnswer, RandomAnswers, WordList, WordListError, WordValidator,
};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answer_pool_is_never_empty() {
        assert!(ANSWERS_COUNT > 0);
        assert!(!crate::wordlists::WordList::embedded().answers().is_empty());
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_are_valid_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn lists_do_not_overlap() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        for word in ALLOWED {
            assert!(!answers.contains(word), "'{word}' is listed twice");
        }
    }
}
