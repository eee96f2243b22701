//! A game wired to the hint fetcher
//!
//! Shells drive a `Session` instead of a bare `Game` so that every new
//! answer gets exactly one background fetch and late batches are folded in
//! between key events.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};
use tokio::task::JoinHandle;

use super::{Game, KeyInput, Transition};
use crate::hints::{HintBatch, RelatedWords, spawn_fetch};
use crate::wordlists::{AnswerSource, WordValidator};

/// Game plus its in-flight hint fetch
///
/// Must be created and driven inside a tokio runtime.
pub struct Session<V, A> {
    game: Game<V, A>,
    service: Arc<dyn RelatedWords>,
    sender: UnboundedSender<HintBatch>,
    receiver: UnboundedReceiver<HintBatch>,
    fetch: Option<JoinHandle<()>>,
}

impl<V: WordValidator, A: AnswerSource> Session<V, A> {
    /// Wrap `game` and start fetching hints for its answer
    pub fn new(game: Game<V, A>, service: Arc<dyn RelatedWords>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut session = Self {
            game,
            service,
            sender,
            receiver,
            fetch: None,
        };
        session.request_hints();
        session
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game<V, A> {
        &self.game
    }

    /// Forward a key event to the game
    pub fn handle_key(&mut self, key: KeyInput) -> Transition {
        self.poll_hints();
        self.game.handle_key(key)
    }

    /// Start over, cancelling any fetch for the old answer
    pub fn new_game(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.abort();
        }
        self.game.new_game();
        self.request_hints();
    }

    /// Apply every batch that has arrived so far without waiting
    ///
    /// Returns whether any batch was applied.
    pub fn poll_hints(&mut self) -> bool {
        let mut applied = false;
        loop {
            match self.receiver.try_recv() {
                Ok(batch) => applied |= self.game.receive_hints(batch),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Wait for the current fetch to report
    ///
    /// The session keeps the fetch handle while waiting, so dropping this
    /// future (for example on a timeout) leaves the fetch abortable.
    pub async fn wait_for_hints(&mut self) -> bool {
        if let Some(handle) = &mut self.fetch {
            // A cancelled or panicked fetch simply delivers nothing.
            let _ = handle.await;
            self.fetch = None;
        }
        self.poll_hints()
    }

    /// Whether a hint fetch is still owned by the session
    #[must_use]
    pub const fn fetch_pending(&self) -> bool {
        self.fetch.is_some()
    }

    fn request_hints(&mut self) {
        if let Some(answer) = self.game.hint_request() {
            self.fetch = Some(spawn_fetch(
                Arc::clone(&self.service),
                answer,
                self.sender.clone(),
            ));
        }
    }
}

impl<V, A> Drop for Session<V, A> {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::core::Word;
    use crate::hints::{HINTS_UNAVAILABLE, HintError, Offline, RelatedWord};
    use crate::wordlists::{FixedAnswer, WordList};
    use async_trait::async_trait;

    struct Canned(&'static [&'static str]);

    #[async_trait]
    impl RelatedWords for Canned {
        async fn related_words(&self, _answer: &str) -> Result<Vec<RelatedWord>, HintError> {
            Ok(self
                .0
                .iter()
                .map(|w| RelatedWord {
                    word: (*w).to_string(),
                    score: 1.0,
                })
                .collect())
        }
    }

    /// Never answers; counts how many of its requests were dropped
    struct Stalled(Arc<AtomicUsize>);

    struct DropCounter(Arc<AtomicUsize>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl RelatedWords for Stalled {
        async fn related_words(&self, _answer: &str) -> Result<Vec<RelatedWord>, HintError> {
            let _counter = DropCounter(Arc::clone(&self.0));
            std::future::pending().await
        }
    }

    fn session(service: Arc<dyn RelatedWords>) -> Session<WordList, FixedAnswer> {
        let game = Game::new(
            WordList::embedded(),
            FixedAnswer(Word::new("right").unwrap()),
        );
        Session::new(game, service)
    }

    #[tokio::test]
    async fn first_hint_arrives_for_turn_zero() {
        let mut session = session(Arc::new(Canned(&["correct", "proper", "just"])));
        assert!(session.wait_for_hints().await);
        assert_eq!(session.game().revealed_hints(), ["CORRECT"]);
    }

    #[tokio::test]
    async fn offline_service_shows_sentinel() {
        let mut session = session(Arc::new(Offline));
        session.wait_for_hints().await;
        assert_eq!(session.game().revealed_hints(), [HINTS_UNAVAILABLE]);
    }

    #[tokio::test]
    async fn hints_grow_with_turns() {
        let mut session = session(Arc::new(Canned(&["correct", "proper", "just"])));
        session.wait_for_hints().await;

        for ch in "crane".chars() {
            session.handle_key(KeyInput::Letter(ch));
        }
        assert_eq!(session.game().revealed_hints(), ["CORRECT", "PROPER"]);
    }

    #[tokio::test]
    async fn new_game_fetches_again() {
        let mut session = session(Arc::new(Canned(&["proper"])));
        session.wait_for_hints().await;
        session.new_game();
        assert!(session.game().revealed_hints().is_empty());

        assert!(session.wait_for_hints().await);
        assert_eq!(session.game().revealed_hints(), ["PROPER"]);
    }

    #[tokio::test]
    async fn timed_out_wait_keeps_fetch_abortable() {
        let dropped = Arc::new(AtomicUsize::new(0));
        let mut session = session(Arc::new(Stalled(Arc::clone(&dropped))));

        let waited =
            tokio::time::timeout(Duration::from_millis(20), session.wait_for_hints()).await;
        assert!(waited.is_err());
        assert!(session.fetch_pending());

        session.new_game();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(dropped.load(Ordering::SeqCst), 1);
    }
}
