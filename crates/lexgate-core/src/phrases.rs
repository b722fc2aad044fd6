//! Allowed-next-token index built from a list of permitted phrases.

use crate::trie::SequenceTrie;
use crate::{TokenId, TokenSet};

/// Answers "which tokens may follow this generation history".
///
/// Built once from a list of permitted phrases, then queried once per
/// generation step (per beam hypothesis). Matching is anchored to the tail
/// of the history: a phrase `[2, 7, 9]` contributes the reversed-prefix
/// keys `[] → {2}`, `[2] → {7}` and `[7, 2] → {9}`, and a query walks the
/// reversed history to the deepest key that stores a set.
///
/// Queries take `&self` only; a built index can be shared across beam
/// hypotheses or threads without locking.
#[derive(Debug, Clone)]
pub struct PhraseIndex {
    trie: SequenceTrie<TokenSet>,
}

impl PhraseIndex {
    /// Build the index from permitted phrases.
    ///
    /// Phrases may repeat or overlap arbitrarily; sets at shared prefixes
    /// are unioned, so insertion order never affects the result. A
    /// zero-length phrase contributes nothing.
    pub fn build<S: AsRef<[TokenId]>>(phrases: &[S]) -> Self {
        let mut trie = SequenceTrie::new();
        for phrase in phrases {
            let phrase = phrase.as_ref();
            for (i, &token) in phrase.iter().enumerate() {
                // Key: the phrase prefix before position i, reversed so the
                // most recently generated token comes first.
                trie.insert_with(phrase[..i].iter().rev().copied(), |existing| {
                    let mut set: TokenSet = existing.unwrap_or_default();
                    set.insert(token);
                    set
                });
            }
        }
        Self { trie }
    }

    /// The set of tokens permitted immediately after `history`.
    ///
    /// `None` means no constraint applies: no reversed prefix of the
    /// history — not even the empty one — stores a set, and the caller
    /// should fall back to the full vocabulary. With at least one
    /// non-empty phrase the empty prefix always stores the phrase starting
    /// tokens, so an unmatched history yields that set rather than `None`;
    /// the index never answers "no tokens allowed", which would dead-end
    /// generation.
    ///
    /// An empty history is a valid query and returns the starting-token
    /// set (or `None` for an empty index).
    pub fn allowed_tokens(&self, history: &[TokenId]) -> Option<&TokenSet> {
        self.trie
            .longest_prefix(history.iter().rev().copied())
            .map(|(_, set)| set)
    }

    /// `true` if no phrase contributed any constraint (every history is
    /// unconstrained).
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
