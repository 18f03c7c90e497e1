use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::ranking::RankingError;

/// Errors from a match call. The call either fully succeeds or fails
/// entirely; a truncated result list is never returned.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The embedding provider was unavailable or failed mid-call.
    #[error("embedding provider failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Malformed ranker arguments (non-positive top_k, internal mismatch).
    #[error("invalid match arguments: {0}")]
    Ranking(#[from] RankingError),
}
