//! Word validity and answer selection
//!
//! The game only talks to these collaborators through the `WordValidator`
//! and `AnswerSource` traits, so tests can stand in for the dictionary.

use std::sync::Arc;

use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;

/// Decides whether a completed row is a real word
pub trait WordValidator {
    /// Check a word, given in uppercase
    fn is_real_word(&self, word: &str) -> bool;
}

impl<F: Fn(&str) -> bool> WordValidator for F {
    fn is_real_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Supplies the secret word for each new game
pub trait AnswerSource {
    fn next_answer(&mut self) -> Word;
}

impl<A: AnswerSource + ?Sized> AnswerSource for Box<A> {
    fn next_answer(&mut self) -> Word {
        (**self).next_answer()
    }
}

/// Error building a word list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("Answer list is empty")]
    NoAnswers,
}

/// Dictionary of accepted guesses plus the pool answers are drawn from
///
/// Every answer is also an accepted guess.
#[derive(Debug, Clone)]
pub struct WordList {
    allowed: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl WordList {
    /// Build a word list
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }
        let mut accepted: FxHashSet<Word> = allowed.into_iter().collect();
        accepted.extend(answers.iter().cloned());

        Ok(Self {
            allowed: accepted,
            answers,
        })
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let answers = words_from_slice(ANSWERS);
        let mut allowed: FxHashSet<Word> = words_from_slice(ALLOWED).into_iter().collect();
        allowed.extend(answers.iter().cloned());
        Self { allowed, answers }
    }

    /// Embedded answers, with extra accepted guesses
    #[must_use]
    pub fn with_extra_guesses(mut self, extra: impl IntoIterator<Item = Word>) -> Self {
        self.allowed.extend(extra);
        self
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Pick a uniformly random answer
    #[must_use]
    pub fn random_answer(&self) -> Word {
        let index = rand::rng().random_range(0..self.answers.len());
        self.answers[index].clone()
    }
}

impl WordValidator for WordList {
    fn is_real_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.allowed.contains(&w))
    }
}

/// Random answers from a shared word list
#[derive(Debug, Clone)]
pub struct RandomAnswers {
    words: Arc<WordList>,
}

impl RandomAnswers {
    #[must_use]
    pub const fn new(words: Arc<WordList>) -> Self {
        Self { words }
    }
}

impl AnswerSource for RandomAnswers {
    fn next_answer(&mut self) -> Word {
        self.words.random_answer()
    }
}

/// Always the same answer, for debugging and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedAnswer(pub Word);

impl AnswerSource for FixedAnswer {
    fn next_answer(&mut self) -> Word {
        self.0.clone()
    }
}
