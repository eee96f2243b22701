//! Grade a single guess against an answer

use crate::core::{Grades, Word, WordError};

/// A guess graded against an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub guess: Word,
    pub answer: Word,
    pub grades: Grades,
}

/// Grade `guess` against `answer`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn grade_words(guess: &str, answer: &str) -> Result<GradeResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let grades = Grades::calculate(&guess, &answer);
    Ok(GradeResult {
        guess,
        answer,
        grades,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_known_pair() {
        let result = grade_words("cheer", "close").unwrap();
        assert_eq!(result.guess.text(), "CHEER");
        assert_eq!(result.grades, "G-Y--".parse().unwrap());
    }

    #[test]
    fn rejects_bad_word() {
        assert_eq!(grade_words("toolong", "close"), Err(WordError::InvalidLength(7)));
        assert!(grade_words("cheer", "cl0se").is_err());
    }
}
