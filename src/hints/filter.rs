//! Filtering related words so hints never give the answer away

use rustc_hash::FxHashSet;

use crate::core::Word;

/// Hints sharing at least this many distinct letters with the answer are dropped
pub const MAX_SHARED_LETTERS: usize = 3;

/// Whether two words share too many distinct letters
///
/// Spaces are ignored, so multi-word hints are compared letter by letter.
///
/// # Examples
/// ```
/// use hintle::hints::has_too_many_shared_letters;
///
/// assert!(has_too_many_shared_letters("RIGHT", "GIRTH"));
/// assert!(!has_too_many_shared_letters("RIGHT", "CORRECT"));
/// ```
#[must_use]
pub fn has_too_many_shared_letters(first: &str, second: &str) -> bool {
    let letters = |s: &str| -> FxHashSet<char> { s.chars().filter(|c| *c != ' ').collect() };
    let first = letters(first);
    let second = letters(second);
    first.intersection(&second).count() >= MAX_SHARED_LETTERS
}

/// Whether a hint would leak the answer
#[must_use]
pub fn leaks_answer(hint: &str, answer: &Word) -> bool {
    let answer = answer.text();
    hint.contains(answer) || answer.contains(hint) || has_too_many_shared_letters(answer, hint)
}

/// Uppercase raw related words and drop those that leak the answer
///
/// Order is preserved.
#[must_use]
pub fn filter_hints<I, S>(raw: I, answer: &Word) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|hint| hint.as_ref().trim().to_uppercase())
        .filter(|hint| !hint.is_empty() && !leaks_answer(hint, answer))
        .collect()
}
