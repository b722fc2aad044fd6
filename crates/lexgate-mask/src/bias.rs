//! Additive score adjustment, replicated across beam hypotheses.

use thiserror::Error;

/// Errors from building or applying a [`ScoreBias`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BiasError {
    /// Delta vector does not cover the vocabulary exactly.
    #[error("delta vector length {actual} != vocab_size {expected}")]
    DeltaLengthMismatch { expected: usize, actual: usize },

    /// Score buffer is not a whole number of vocabulary-sized rows.
    #[error("score buffer length {actual} != expected {expected}")]
    ScoreLengthMismatch { expected: usize, actual: usize },
}

/// A fixed per-token score delta, added to every hypothesis identically.
///
/// The delta vector is validated against the vocabulary size once at
/// construction; application is then plain vector addition. One bias is
/// shared by all beams — per-beam deltas are deliberately not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBias {
    deltas: Vec<f32>,
}

impl ScoreBias {
    /// Create a bias from one delta per vocabulary entry.
    pub fn new(vocab_size: usize, deltas: Vec<f32>) -> Result<Self, BiasError> {
        if deltas.len() != vocab_size {
            return Err(BiasError::DeltaLengthMismatch {
                expected: vocab_size,
                actual: deltas.len(),
            });
        }
        Ok(Self { deltas })
    }

    /// The vocabulary size this bias covers.
    pub fn vocab_size(&self) -> usize {
        self.deltas.len()
    }

    /// The per-token deltas.
    pub fn deltas(&self) -> &[f32] {
        &self.deltas
    }

    /// Add the deltas to one score vector in place.
    pub fn apply(&self, scores: &mut [f32]) -> Result<(), BiasError> {
        self.apply_to_beams(scores, 1)
    }

    /// Add the deltas to every row of a flat `[beams * vocab_size]` score
    /// buffer, row-major, the same deltas for each beam.
    pub fn apply_to_beams(&self, scores: &mut [f32], beams: usize) -> Result<(), BiasError> {
        let expected = beams * self.deltas.len();
        if scores.len() != expected {
            return Err(BiasError::ScoreLengthMismatch {
                expected,
                actual: scores.len(),
            });
        }
        if self.deltas.is_empty() {
            return Ok(());
        }
        for row in scores.chunks_exact_mut(self.deltas.len()) {
            for (score, delta) in row.iter_mut().zip(&self.deltas) {
                *score += *delta;
            }
        }
        Ok(())
    }

    /// Add the deltas to a copy of the score vector and return it.
    pub fn applied(&self, scores: &[f32]) -> Result<Vec<f32>, BiasError> {
        let mut result = scores.to_vec();
        self.apply(&mut result)?;
        Ok(result)
    }
}
