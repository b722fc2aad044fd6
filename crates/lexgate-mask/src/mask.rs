//! Vocabulary masks over per-token score vectors.

use lexgate_core::TokenId;

/// A vocabulary mask naming the tokens a decoding step may emit.
///
/// Holds a sorted list of allowed token IDs and applies itself to a score
/// vector by knocking every other entry down to negative infinity, which
/// removes those tokens from any argmax or softmax that follows.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMask {
    vocab_size: usize,
    /// Allowed token IDs, kept sorted for binary search.
    allowed: Vec<TokenId>,
}

impl TokenMask {
    /// Create a mask from an arbitrary list of allowed token IDs.
    ///
    /// The list is sorted and deduplicated internally. Every ID must be
    /// below `vocab_size`.
    pub fn new(vocab_size: usize, mut allowed: Vec<TokenId>) -> Self {
        allowed.sort_unstable();
        allowed.dedup();
        debug_assert!(allowed.iter().all(|&id| (id as usize) < vocab_size));
        Self {
            vocab_size,
            allowed,
        }
    }

    /// A mask that permits the entire vocabulary.
    pub fn allow_all(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            allowed: (0..vocab_size as TokenId).collect(),
        }
    }

    /// A mask that permits nothing.
    pub fn allow_none(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            allowed: Vec::new(),
        }
    }

    /// Whether `id` survives this mask.
    pub fn is_allowed(&self, id: TokenId) -> bool {
        self.allowed.binary_search(&id).is_ok()
    }

    /// The allowed token IDs in ascending order.
    pub fn allowed_ids(&self) -> &[TokenId] {
        &self.allowed
    }

    /// How many tokens the mask permits.
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// The vocabulary size this mask was built for.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Whether the mask permits no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Apply the mask to one score vector in place.
    ///
    /// Disallowed entries become negative infinity; allowed entries keep
    /// their original values. Runs in O(vocab_size + allowed_count).
    ///
    /// # Panics
    ///
    /// Panics if `scores.len() != vocab_size`.
    pub fn apply_to_scores(&self, scores: &mut [f32]) {
        assert_eq!(
            scores.len(),
            self.vocab_size,
            "score vector length {} != vocab_size {}",
            scores.len(),
            self.vocab_size
        );

        if self.allowed.is_empty() {
            scores.fill(f32::NEG_INFINITY);
            return;
        }

        // Save the surviving scores, blanket-fill, then put them back.
        let kept: Vec<f32> = self.allowed.iter().map(|&id| scores[id as usize]).collect();
        scores.fill(f32::NEG_INFINITY);
        for (&id, &score) in self.allowed.iter().zip(&kept) {
            scores[id as usize] = score;
        }
    }

    /// Apply the mask to a copy of the score vector and return it.
    pub fn masked_scores(&self, scores: &[f32]) -> Vec<f32> {
        let mut result = scores.to_vec();
        self.apply_to_scores(&mut result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allowed() {
        let mask = TokenMask::new(50, vec![4, 9, 31]);

        assert!(mask.is_allowed(4));
        assert!(mask.is_allowed(9));
        assert!(mask.is_allowed(31));
        assert!(!mask.is_allowed(0));
        assert!(!mask.is_allowed(10));
        assert!(!mask.is_allowed(49));
    }

    #[test]
    fn test_apply_to_scores() {
        let mask = TokenMask::new(6, vec![1, 4]);
        let mut scores = vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5];

        mask.apply_to_scores(&mut scores);

        assert_eq!(
            scores,
            vec![
                f32::NEG_INFINITY,
                1.5,
                f32::NEG_INFINITY,
                f32::NEG_INFINITY,
                4.5,
                f32::NEG_INFINITY,
            ]
        );
    }

    #[test]
    fn test_allow_all_is_identity() {
        let mask = TokenMask::allow_all(4);
        let scores = vec![0.1, 0.2, 0.3, 0.4];

        assert_eq!(mask.masked_scores(&scores), scores);
        assert_eq!(mask.allowed_count(), 4);
    }

    #[test]
    fn test_allow_none_erases_everything() {
        let mask = TokenMask::allow_none(5);
        let mut scores = vec![1.0; 5];

        mask.apply_to_scores(&mut scores);

        for &s in &scores {
            assert_eq!(s, f32::NEG_INFINITY);
        }
        assert!(mask.is_empty());
    }

    #[test]
    fn test_unsorted_input_is_normalized() {
        let mask = TokenMask::new(10, vec![7, 2, 7, 2, 5]);
        assert_eq!(mask.allowed_ids(), &[2, 5, 7]);
        assert_eq!(mask.allowed_count(), 3);
    }

    #[test]
    fn test_masked_scores_leaves_input_untouched() {
        let mask = TokenMask::new(3, vec![0]);
        let scores = vec![1.0, 2.0, 3.0];

        let masked = mask.masked_scores(&scores);

        assert_eq!(scores, vec![1.0, 2.0, 3.0]);
        assert_eq!(masked, vec![1.0, f32::NEG_INFINITY, f32::NEG_INFINITY]);
    }

    #[test]
    #[should_panic(expected = "score vector length")]
    fn test_wrong_length_panics() {
        let mask = TokenMask::new(8, vec![2]);
        let mut scores = vec![0.0; 4];
        mask.apply_to_scores(&mut scores);
    }
}
