//! Terminal-suffix index: decides when a history has reached a stop
//! sequence.

use crate::trie::SequenceTrie;
use crate::TokenId;

/// Answers "does this generation history end in one of the registered
/// suffixes".
///
/// Each suffix is stored reversed, so a match is a prefix walk over the
/// reversed history. Unlike [`PhraseIndex`](crate::PhraseIndex) the walk
/// is eager: *any* registered suffix at the tail should stop generation,
/// so the first (shallowest) match ends the query.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    trie: SequenceTrie<()>,
}

impl SuffixIndex {
    /// Build the index from terminal suffixes.
    ///
    /// Node presence is the marker, so registering a suffix twice is a
    /// no-op. Registering the empty suffix makes every history — including
    /// the empty one — an immediate match; callers that never want to stop
    /// before the first token must special-case zero-length histories
    /// themselves.
    pub fn build<S: AsRef<[TokenId]>>(suffixes: &[S]) -> Self {
        let mut trie = SequenceTrie::new();
        for suffix in suffixes {
            trie.insert(suffix.as_ref().iter().rev().copied(), ());
        }
        Self { trie }
    }

    /// Length of the shortest registered suffix ending `history`, if any.
    ///
    /// Consumers typically strip the terminal suffix from the emitted
    /// sequence, which is why the matched length is exposed and not just
    /// the boolean.
    pub fn matched_len(&self, history: &[TokenId]) -> Option<usize> {
        self.trie
            .shortest_prefix(history.iter().rev().copied())
            .map(|(len, _)| len)
    }

    /// `true` iff `history` ends in a registered suffix of any length.
    ///
    /// An empty history is a valid query: it matches iff the empty suffix
    /// was registered.
    pub fn is_match(&self, history: &[TokenId]) -> bool {
        self.matched_len(history).is_some()
    }

    /// `true` if no suffix was registered (no history ever matches).
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_suffix_reported() {
        // [5] is itself a suffix of [9,5]; a history ending in [9,5]
        // matches both, and the shorter one is found first.
        let index = SuffixIndex::build(&[vec![5], vec![9, 5]]);

        assert!(index.is_match(&[1, 9, 5]));
        assert_eq!(index.matched_len(&[1, 9, 5]), Some(1));
    }

    #[test]
    fn test_no_match() {
        let index = SuffixIndex::build(&[vec![1, 2]]);

        assert!(!index.is_match(&[3, 4, 5]));
        assert_eq!(index.matched_len(&[3, 4, 5]), None);
    }

    #[test]
    fn test_full_suffix_required() {
        let index = SuffixIndex::build(&[vec![1, 2]]);

        assert!(index.is_match(&[1, 2]));
        assert!(index.is_match(&[9, 1, 2]));
        // Ends in [2] alone: only part of the suffix.
        assert!(!index.is_match(&[2]));
        // Suffix tokens present but not at the tail.
        assert!(!index.is_match(&[1, 2, 3]));
    }

    #[test]
    fn test_empty_suffix_matches_everything() {
        let index = SuffixIndex::build(&[vec![]]);

        assert!(index.is_match(&[]));
        assert!(index.is_match(&[1]));
        assert!(index.is_match(&[1, 2, 3]));
        assert_eq!(index.matched_len(&[1, 2, 3]), Some(0));
    }

    #[test]
    fn test_empty_index_never_matches() {
        let index = SuffixIndex::build::<Vec<TokenId>>(&[]);

        assert!(index.is_empty());
        assert!(!index.is_match(&[]));
        assert!(!index.is_match(&[1, 2, 3]));
    }

    #[test]
    fn test_empty_history_without_empty_suffix() {
        let index = SuffixIndex::build(&[vec![7]]);

        assert!(!index.is_match(&[]));
        assert_eq!(index.matched_len(&[]), None);
    }

    #[test]
    fn test_reregistration_is_noop() {
        let once = SuffixIndex::build(&[vec![3, 4]]);
        let twice = SuffixIndex::build(&[vec![3, 4], vec![3, 4]]);

        for history in [&[][..], &[4], &[3, 4], &[1, 3, 4]] {
            assert_eq!(once.is_match(history), twice.is_match(history));
            assert_eq!(once.matched_len(history), twice.matched_len(history));
        }
    }

    #[test]
    fn test_longer_suffix_still_matches() {
        let index = SuffixIndex::build(&[vec![9, 5]]);

        assert!(index.is_match(&[1, 9, 5]));
        assert_eq!(index.matched_len(&[1, 9, 5]), Some(2));
        // Ending in [5] alone is not enough without the shorter suffix
        // registered.
        assert!(!index.is_match(&[1, 5]));
    }
}
