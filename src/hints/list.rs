//! Per-game hint bookkeeping

/// Hints for the current game and how many of them the player has seen
///
/// The fetched list is fixed once it arrives. Revealed hints only ever grow
/// until the game is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintList {
    fetched: Option<Vec<String>>,
    revealed: usize,
    requested: bool,
}

impl HintList {
    /// Whether a fetch should be started
    #[must_use]
    pub const fn needs_fetch(&self) -> bool {
        self.fetched.is_none() && !self.requested
    }

    /// Record that a fetch is in flight
    pub fn mark_requested(&mut self) {
        self.requested = true;
    }

    /// Store the fetched hints
    ///
    /// Returns `false` and keeps the existing list if hints were already set.
    pub fn fill(&mut self, hints: Vec<String>) -> bool {
        if self.fetched.is_some() {
            return false;
        }
        self.fetched = Some(hints);
        true
    }

    /// Reveal every hint up to and including index `turn`
    pub fn reveal_through(&mut self, turn: usize) {
        let available = self.fetched.as_ref().map_or(0, Vec::len);
        self.revealed = self.revealed.max((turn + 1).min(available));
    }

    /// Hints the player can see
    #[must_use]
    pub fn revealed(&self) -> &[String] {
        match &self.fetched {
            Some(hints) => &hints[..self.revealed],
            None => &[],
        }
    }

    /// The full filtered list, once fetched
    #[must_use]
    pub fn all(&self) -> Option<&[String]> {
        self.fetched.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn fresh_list_wants_fetch_once() {
        let mut list = HintList::default();
        assert!(list.needs_fetch());
        list.mark_requested();
        assert!(!list.needs_fetch());
    }

    #[test]
    fn fill_is_fixed_once_set() {
        let mut list = HintList::default();
        assert!(list.fill(hints(&["ONE"])));
        assert!(!list.fill(hints(&["TWO"])));
        assert_eq!(list.all().unwrap(), ["ONE"]);
    }

    #[test]
    fn empty_fill_still_counts_as_fetched() {
        let mut list = HintList::default();
        list.fill(Vec::new());
        assert!(!list.needs_fetch());
        list.reveal_through(3);
        assert!(list.revealed().is_empty());
    }

    #[test]
    fn reveal_is_prefix_by_turn() {
        let mut list = HintList::default();
        list.fill(hints(&["A", "B", "C"]));
        list.reveal_through(0);
        assert_eq!(list.revealed(), ["A"]);
        list.reveal_through(1);
        assert_eq!(list.revealed(), ["A", "B"]);
        list.reveal_through(5);
        assert_eq!(list.revealed(), ["A", "B", "C"]);
    }

    #[test]
    fn reveal_never_shrinks() {
        let mut list = HintList::default();
        list.fill(hints(&["A", "B", "C"]));
        list.reveal_through(2);
        list.reveal_through(0);
        assert_eq!(list.revealed().len(), 3);
    }
}
