//! Runtime configuration
//!
//! Resolved once from command-line flags and environment variables.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::core::{Word, WordError};
use crate::hints::{DatamuseClient, HintError, Offline, RelatedWords};
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{AnswerSource, FixedAnswer, RandomAnswers, WordList};

/// How long a related-words request may take
pub const HINT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where hints come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintSource {
    Offline,
    Datamuse { url: String },
}

/// Error resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid answer override: {0}")]
    InvalidAnswer(#[from] WordError),
    #[error("cannot read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    HintClient(#[from] HintError),
}

/// Settings shared by every front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed answer for debugging; random when `None`
    pub answer: Option<Word>,
    pub hints: HintSource,
    /// Extra accepted guesses, one per line
    pub wordlist: Option<PathBuf>,
}

impl Config {
    /// Build a configuration
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidAnswer` if the answer override is not a
    /// five-letter word.
    pub fn new(
        answer: Option<&str>,
        offline: bool,
        hint_url: impl Into<String>,
        wordlist: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let answer = answer.map(Word::new).transpose()?;
        let hints = if offline {
            HintSource::Offline
        } else {
            HintSource::Datamuse {
                url: hint_url.into(),
            }
        };
        Ok(Self {
            answer,
            hints,
            wordlist,
        })
    }

    /// The dictionary: embedded lists plus any custom guesses
    ///
    /// # Errors
    /// Returns `ConfigError::WordList` if the custom list cannot be read.
    pub fn word_list(&self) -> Result<WordList, ConfigError> {
        let words = WordList::embedded();
        match &self.wordlist {
            Some(path) => Ok(words.with_extra_guesses(read_list(path)?)),
            None => Ok(words),
        }
    }

    /// Answer source honouring the debug override
    #[must_use]
    pub fn answer_source(&self, words: Arc<WordList>) -> Box<dyn AnswerSource + Send> {
        match &self.answer {
            Some(answer) => Box::new(FixedAnswer(answer.clone())),
            None => Box::new(RandomAnswers::new(words)),
        }
    }

    /// The related-words backend
    ///
    /// # Errors
    /// Returns `ConfigError::HintClient` if the HTTP client cannot be built.
    pub fn hint_service(&self) -> Result<Arc<dyn RelatedWords>, ConfigError> {
        let service: Arc<dyn RelatedWords> = match &self.hints {
            HintSource::Offline => Arc::new(Offline),
            HintSource::Datamuse { url } => {
                Arc::new(DatamuseClient::new(url.as_str(), HINT_TIMEOUT)?)
            }
        };
        Ok(service)
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, ConfigError> {
    load_from_file(path).map_err(|source| ConfigError::WordList {
        path: path.to_path_buf(),
        source,
    })
}
