//! Similarity scoring and top-k ranking over candidate fields.

pub mod error;


pub use error::RankingError;

use std::cmp::Ordering;

use tracing::debug;

use crate::field::Field;
use crate::matcher::MatchResult;

/// Default number of top matches returned.
pub const DEFAULT_TOP_K: usize = 3;

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm, or when the lengths differ
/// or are zero. Degenerate inputs are a legitimate numeric edge case, not an
/// error, and must never produce NaN.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Scores every candidate against the query vector and returns the top `top_k`
/// as [`MatchResult`]s, descending by score.
///
/// Equal scores keep the candidates' original relative order (the sort is
/// stable), so ranking is fully deterministic. Fewer than `top_k` candidates
/// simply returns all of them. Raw cosine values are returned; callers apply
/// their own confidence thresholds.
///
/// `candidates` and `vectors` are parallel slices; a length mismatch is a
/// caller-encoding bug and fails with [`RankingError::CandidateVectorMismatch`].
pub fn rank<'a>(
    query: &[f32],
    candidates: &'a [Field],
    vectors: &[Vec<f32>],
    top_k: usize,
) -> Result<Vec<MatchResult<'a>>, RankingError> {
    if top_k == 0 {
        return Err(RankingError::InvalidTopK { top_k });
    }

    if candidates.len() != vectors.len() {
        return Err(RankingError::CandidateVectorMismatch {
            candidates: candidates.len(),
            vectors: vectors.len(),
        });
    }

    // Pair each score with its source field before sorting, never by
    // positional index alone.
    let mut results: Vec<MatchResult<'a>> = candidates
        .iter()
        .zip(vectors.iter())
        .map(|(field, vector)| MatchResult::new(field, cosine_similarity(query, vector)))
        .collect();

    // sort_by is stable: ties preserve original candidate order.
    results.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
    });

    results.truncate(top_k);

    debug!(
        candidate_count = candidates.len(),
        returned = results.len(),
        top_k,
        "Ranked candidates"
    );

    Ok(results)
}
