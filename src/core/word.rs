//! Five-letter word representation
//!
//! A Word is a validated, uppercase five-letter value used for answers and
//! completed guesses.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;

use super::COLS;

/// A five-letter word, normalised to uppercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; COLS],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hintle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != COLS {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; COLS];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; COLS] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Distinct letters of the word
    #[must_use]
    pub fn letters(&self) -> FxHashSet<u8> {
        self.chars.iter().copied().collect()
    }

    /// Count of each letter in the word
    ///
    /// This is the pool grading draws from when handing out matches.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("RIGHT").unwrap();
        assert_eq!(word.text(), "RIGHT");
        assert_eq!(word.chars(), b"RIGHT");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cranë"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at_and_has_letter() {
        let word = Word::new("close").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
        assert!(word.has_letter(b'L'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_letter_counts_with_triple() {
        let word = Word::new("emcee").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'E'), Some(&3));
        assert_eq!(counts.get(&b'M'), Some(&1));
        assert_eq!(counts.get(&b'C'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = Word::new("eerie").unwrap();
        let letters = word.letters();
        assert_eq!(letters.len(), 3);
        assert!(letters.contains(&b'R'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("right").unwrap();
        assert_eq!(format!("{word}"), "RIGHT");
    }
}
