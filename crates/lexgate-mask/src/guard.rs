//! High-level guard combining both indexes behind one mask-producing API.

use lexgate_core::{PhraseIndex, SuffixIndex, TokenId};

use crate::mask::TokenMask;

/// Turns phrase and suffix indexes into per-step vocabulary masks and stop
/// decisions for a generation loop.
///
/// The guard holds no per-hypothesis state: every call takes the history
/// it should judge, so one guard serves any number of beams, including
/// concurrently.
///
/// # Example
///
/// ```
/// use lexgate_mask::DecodeGuard;
///
/// let guard = DecodeGuard::build(&[vec![2, 3]], &[vec![3]], 5);
///
/// let mask = guard.next_mask(&[]);
/// assert!(mask.is_allowed(2));
/// assert!(!mask.is_allowed(4));
///
/// assert!(guard.should_stop(&[2, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct DecodeGuard {
    phrases: PhraseIndex,
    suffixes: SuffixIndex,
    vocab_size: usize,
}

impl DecodeGuard {
    /// Create a guard from already-built indexes.
    pub fn new(phrases: PhraseIndex, suffixes: SuffixIndex, vocab_size: usize) -> Self {
        Self {
            phrases,
            suffixes,
            vocab_size,
        }
    }

    /// Build both indexes and wrap them in a guard.
    pub fn build<P, S>(phrases: &[P], suffixes: &[S], vocab_size: usize) -> Self
    where
        P: AsRef<[TokenId]>,
        S: AsRef<[TokenId]>,
    {
        Self::new(
            PhraseIndex::build(phrases),
            SuffixIndex::build(suffixes),
            vocab_size,
        )
    }

    /// The phrase index.
    pub fn phrases(&self) -> &PhraseIndex {
        &self.phrases
    }

    /// The suffix index.
    pub fn suffixes(&self) -> &SuffixIndex {
        &self.suffixes
    }

    /// The vocabulary size masks are produced for.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// The vocabulary mask for the next token of one hypothesis.
    ///
    /// When the phrase index constrains the step, phrase tokens outside
    /// the vocabulary are silently dropped from the mask. When it does
    /// not (no phrases were registered), the whole vocabulary is allowed.
    pub fn next_mask(&self, history: &[TokenId]) -> TokenMask {
        match self.phrases.allowed_tokens(history) {
            Some(allowed) => {
                let ids: Vec<TokenId> = allowed
                    .iter()
                    .copied()
                    .filter(|&id| (id as usize) < self.vocab_size)
                    .collect();
                TokenMask::new(self.vocab_size, ids)
            }
            None => TokenMask::allow_all(self.vocab_size),
        }
    }

    /// Whether this hypothesis has produced a terminal suffix.
    pub fn should_stop(&self, history: &[TokenId]) -> bool {
        self.suffixes.is_match(history)
    }

    /// Length of the shortest terminal suffix ending `history`, if any.
    ///
    /// Callers that strip the stop sequence from the output use this to
    /// know how many tokens to drop.
    pub fn stop_len(&self, history: &[TokenId]) -> Option<usize> {
        self.suffixes.matched_len(history)
    }
}
