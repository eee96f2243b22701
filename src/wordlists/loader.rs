//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#`
/// comments and anything that is not a five-letter word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hintle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse one word per line, skipping blanks, comments and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hintle::wordlists::loader::words_from_slice;
/// use hintle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_words_skips_comments_and_blanks() {
        let words = parse_words("# header\n\n  right \nwrong\nnope\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["RIGHT", "WRONG"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
