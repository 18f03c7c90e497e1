use thiserror::Error;

/// Malformed ranker calls. These indicate a programming error in the calling
/// layer, not user input; they are fatal to the call and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("top_k must be positive, got {top_k}")]
    InvalidTopK { top_k: usize },

    #[error("candidate/vector count mismatch: {candidates} candidates, {vectors} vectors")]
    CandidateVectorMismatch { candidates: usize, vectors: usize },
}
