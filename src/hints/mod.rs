//! Related-word hints
//!
//! Hints are fetched once per game from a related-words service, filtered so
//! they cannot give the answer away, and revealed one per turn.

mod fetch;
mod filter;
mod list;
mod service;

pub use fetch::{HINTS_UNAVAILABLE, HintBatch, fetch_hints, spawn_fetch};
pub use filter::{MAX_SHARED_LETTERS, filter_hints, has_too_many_shared_letters, leaks_answer};
pub use list::HintList;
pub use service::{DATAMUSE_URL, DatamuseClient, HintError, Offline, RelatedWord, RelatedWords};
