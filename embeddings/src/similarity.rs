//! Similarity computation for embeddings.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EmbeddingError, Result};

/// Compute the cosine similarity between two embeddings.
///
/// Returns a value near the range -1.0 to 1.0, where:
/// - 1.0 means identical direction
/// - 0.0 means orthogonal vectors
/// - -1.0 means opposite vectors
///
/// Mismatched dimensionality and zero vectors both score 0.0 instead of
/// failing. The result is not clamped, so rounding drift at the boundaries
/// shows through unchanged.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    match try_cosine_similarity(a, b) {
        Ok(score) => score,
        Err(EmbeddingError::DimensionMismatch { expected, actual }) => {
            // Usually means the embedding model changed under us.
            warn!("cosine similarity on mismatched dimensions ({expected} vs {actual}), scoring 0.0");
            0.0
        }
        Err(_) => 0.0,
    }
}

/// Checked cosine similarity.
///
/// Fails with [`EmbeddingError::DimensionMismatch`] when the lengths differ
/// and [`EmbeddingError::DegenerateVector`] when either magnitude is zero.
pub fn try_cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    let dot = dot_product(a, b)?;
    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Err(EmbeddingError::DegenerateVector);
    }

    Ok(dot / (magnitude_a * magnitude_b))
}

/// Compute the dot product between two embeddings.
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Euclidean length of an embedding.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Score of one comparison entry against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Label of the compared entry.
    pub label: String,

    /// Cosine similarity score.
    pub score: f64,
}

impl SimilarityResult {
    /// Create a new similarity result.
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// The highest-scoring result, leaving the slice order alone.
///
/// Ties go to the earliest entry.
pub fn best_match(results: &[SimilarityResult]) -> Option<&SimilarityResult> {
    results
        .iter()
        .rev()
        .max_by_key(|result| OrderedFloat(result.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_cosine_similarity_identical() {
        let v = vec![0.12, -0.5, 0.33, 0.9];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let a = vec![0.25, -1.5, 3.0];
        let b: Vec<f64> = a.iter().map(|x| -x).collect();
        let sim = cosine_similarity(&a, &b);
        assert!((sim + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_similarity_symmetric() {
        let a = vec![0.3, 0.1, -0.7, 0.2];
        let b = vec![-0.4, 0.8, 0.05, 0.6];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_dimension_mismatch_scores_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert!(matches!(
            try_cosine_similarity(&a, &b),
            Err(EmbeddingError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let zero = vec![0.0; 3];
        let b = vec![0.5, 0.5, 0.5];
        assert_eq!(cosine_similarity(&zero, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &zero), 0.0);
        assert!(matches!(
            try_cosine_similarity(&zero, &b),
            Err(EmbeddingError::DegenerateVector)
        ));
    }

    #[test]
    fn test_empty_vectors_are_degenerate() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_exact_score_for_integral_norms() {
        // |a| = 3 and |b| = 3, so the division is exact.
        let a = vec![1.0, 2.0, 2.0];
        let b = vec![2.0, 1.0, -2.0];
        assert_eq!(cosine_similarity(&a, &a), 1.0);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &[2.0, 2.0, 1.0]), 8.0 / 9.0);
    }

    #[test]
    fn test_self_similarity_of_full_size_embedding_is_not_rounded() {
        let v: Vec<f64> = (0..1536).map(|i| 1.0 / (f64::from(i) + 3.0)).collect();
        let sim = cosine_similarity(&v, &v);

        assert!((sim - 1.0).abs() < EPSILON);
        assert_eq!(sim, 1.0 - f64::EPSILON / 2.0);
    }

    #[test]
    fn test_drift_past_the_bounds_is_kept() {
        let a = vec![0.1, 0.6];
        let b: Vec<f64> = a.iter().map(|x| -x).collect();

        assert_eq!(cosine_similarity(&a, &a), 1.0 + f64::EPSILON);
        assert_eq!(cosine_similarity(&a, &b), -1.0 - f64::EPSILON);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude(&[]), 0.0);
    }

    #[test]
    fn test_best_match_prefers_first_on_tie() {
        let results = vec![
            SimilarityResult::new("a", 0.2),
            SimilarityResult::new("b", 0.9),
            SimilarityResult::new("c", 0.9),
        ];
        assert_eq!(best_match(&results).map(|r| r.label.as_str()), Some("b"));
        assert_eq!(best_match(&[]), None);
    }
}
