//! lexgate: lexicon-gated decoding primitives.
//!
//! This crate constrains autoregressive generation to a predefined
//! lexicon. It sits between a generation loop and its scoring step and
//! answers two questions at every step, one per index:
//!
//! - **"Which tokens may follow this history?"** — [`PhraseIndex`], built
//!   from permitted phrases, queried by longest-matching-prefix.
//! - **"Has this history reached a stop sequence?"** — [`SuffixIndex`],
//!   built from terminal suffixes, queried by shortest-matching-prefix.
//!
//! Both are views over one structure, [`SequenceTrie`], keyed on
//! *reversed* token sequences: matching must anchor to the most recently
//! generated token, and reversing keys and queries turns that tail
//! matching into an ordinary prefix walk.
//!
//! Indexes are built once per generation call and then only read. All
//! queries are pure in-memory walks taking `&self`, so one index can
//! serve every beam hypothesis — or every thread — without locking.
//!
//! # Constraining continuations
//!
//! ```
//! use lexgate_core::PhraseIndex;
//!
//! let phrases = vec![vec![7, 8], vec![7, 9, 3]];
//! let index = PhraseIndex::build(&phrases);
//!
//! // Both phrases continue token 7, so both continuations are permitted.
//! let after_7 = index.allowed_tokens(&[7]).unwrap();
//! assert!(after_7.contains(&8));
//! assert!(after_7.contains(&9));
//!
//! // A history matching no phrase prefix falls back to the phrase
//! // starting tokens, registered at the empty reversed prefix.
//! let fallback = index.allowed_tokens(&[42, 43]).unwrap();
//! assert!(fallback.contains(&7));
//!
//! // Only an index with no usable phrases leaves histories unconstrained.
//! let unconstrained = PhraseIndex::build::<Vec<lexgate_core::TokenId>>(&[]);
//! assert!(unconstrained.allowed_tokens(&[7]).is_none());
//! ```
//!
//! # Stopping on terminal suffixes
//!
//! ```
//! use lexgate_core::SuffixIndex;
//!
//! let stop = SuffixIndex::build(&[vec![0], vec![99, 0]]);
//!
//! // The shorter suffix [0] already ends this history.
//! assert!(stop.is_match(&[5, 99, 0]));
//! assert_eq!(stop.matched_len(&[5, 99, 0]), Some(1));
//!
//! assert!(!stop.is_match(&[5, 99]));
//! ```

pub mod phrases;
pub mod suffixes;
pub mod trie;

pub use phrases::PhraseIndex;
pub use suffixes::SuffixIndex;
pub use trie::SequenceTrie;

/// Token identifier in the model vocabulary.
///
/// Tokens are opaque to this crate: no semantics are read out of the id,
/// and any value is accepted as a trie key. Vocabulary bounds only matter
/// at the score-vector boundary, which lives in `lexgate-mask`.
pub type TokenId = u32;

/// The tokens permitted immediately after some history.
///
/// A `BTreeSet` keeps the union-of-continuations invariant (no
/// duplicates) and iterates in ascending token order, which downstream
/// mask construction relies on for determinism.
pub type TokenSet = std::collections::BTreeSet<TokenId>;
