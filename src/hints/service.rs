//! Related-words lookup
//!
//! Hints come from an external service that, given the answer, returns words
//! with a similar meaning. The default backend is the Datamuse "means like"
//! query; `Offline` is used when no network access is wanted.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Datamuse API root
pub const DATAMUSE_URL: &str = "https://api.datamuse.com";

/// One related word with its relevance score
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelatedWord {
    pub word: String,
    #[serde(default)]
    pub score: f64,
}

/// Failure to obtain related words
#[derive(Debug, Error)]
pub enum HintError {
    #[error("related-words request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("hints are disabled")]
    Offline,
}

/// Source of semantically related words
#[async_trait]
pub trait RelatedWords: Send + Sync {
    /// Look up words related to `answer`
    ///
    /// # Errors
    /// Returns `HintError` when the lookup cannot be completed. Callers
    /// degrade to a placeholder hint rather than failing the game.
    async fn related_words(&self, answer: &str) -> Result<Vec<RelatedWord>, HintError>;
}

/// HTTP client for the Datamuse words API
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: reqwest::Client,
    base_url: String,
}

impl DatamuseClient {
    /// Create a client for the API rooted at `base_url`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HintError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RelatedWords for DatamuseClient {
    #[instrument(skip(self))]
    async fn related_words(&self, answer: &str) -> Result<Vec<RelatedWord>, HintError> {
        // ml: "means like"
        let words = self
            .client
            .get(format!("{}/words", self.base_url))
            .query(&[("ml", answer.to_lowercase())])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RelatedWord>>()
            .await?;

        debug!(base_url = %self.base_url, count = words.len(), "Related words received");
        Ok(words)
    }
}

/// Backend that never has hints
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

#[async_trait]
impl RelatedWords for Offline {
    async fn related_words(&self, _answer: &str) -> Result<Vec<RelatedWord>, HintError> {
        Err(HintError::Offline)
    }
}
