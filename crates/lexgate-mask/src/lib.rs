//! Vocabulary masking and score adjustment for lexicon-gated decoding.
//!
//! This crate sits between [`lexgate_core`]'s indexes and an inference
//! engine's score vectors. Per decoding step it produces a [`TokenMask`]
//! restricting the next token to registered phrase continuations, answers
//! whether a hypothesis has hit a terminal suffix, and optionally applies
//! a fixed additive [`ScoreBias`] across all beams.
//!
//! ```
//! use lexgate_mask::{DecodeGuard, ScoreBias};
//!
//! let guard = DecodeGuard::build(&[vec![1, 2], vec![1, 3]], &[vec![3]], 4);
//! let bias = ScoreBias::new(4, vec![0.0, 0.5, 0.0, 0.0]).unwrap();
//!
//! let mut scores = vec![0.1, 0.2, 0.3, 0.4];
//! bias.apply(&mut scores).unwrap();
//! guard.next_mask(&[1]).apply_to_scores(&mut scores);
//!
//! // Only the registered continuations of `1` survive.
//! assert_eq!(scores, vec![f32::NEG_INFINITY, f32::NEG_INFINITY, 0.3, 0.4]);
//! ```

pub use lexgate_core;

pub mod bias;
pub mod guard;
pub mod mask;

pub use bias::{BiasError, ScoreBias};
pub use guard::DecodeGuard;
pub use mask::TokenMask;
