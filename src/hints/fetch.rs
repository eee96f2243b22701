//! One-shot hint fetching
//!
//! A fetch is keyed by the answer it was started for. The game drops any batch
//! whose answer no longer matches, so a slow response from a previous game can
//! never leak into the current one.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::filter::filter_hints;
use super::service::RelatedWords;
use crate::core::Word;

/// Shown when the related-words service cannot be reached
pub const HINTS_UNAVAILABLE: &str = "HINTS NOT AVAILABLE";

/// Filtered hints for one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintBatch {
    pub answer: Word,
    pub hints: Vec<String>,
}

impl HintBatch {
    /// The placeholder batch used when the service fails
    #[must_use]
    pub fn unavailable(answer: Word) -> Self {
        Self {
            answer,
            hints: vec![HINTS_UNAVAILABLE.to_string()],
        }
    }
}

/// Fetch and filter hints for `answer`
///
/// Never fails: a service error is logged and replaced by the placeholder.
pub async fn fetch_hints<S: RelatedWords + ?Sized>(service: &S, answer: &Word) -> HintBatch {
    match service.related_words(answer.text()).await {
        Ok(words) => {
            let total = words.len();
            let hints = filter_hints(words.into_iter().map(|w| w.word), answer);
            info!(total, kept = hints.len(), "Fetched hints");
            HintBatch {
                answer: answer.clone(),
                hints,
            }
        }
        Err(err) => {
            warn!(error = %err, "Hints not available");
            HintBatch::unavailable(answer.clone())
        }
    }
}

/// Spawn a background fetch that reports on `sender`
///
/// Abort the returned handle to cancel; a batch that still arrives is
/// discarded by the game when its answer is stale.
pub fn spawn_fetch(
    service: Arc<dyn RelatedWords>,
    answer: Word,
    sender: UnboundedSender<HintBatch>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let batch = fetch_hints(service.as_ref(), &answer).await;
        if sender.send(batch).is_err() {
            debug!(answer = %answer, "Hint receiver dropped");
        }
    })
}
