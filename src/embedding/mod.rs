//! Embedding providers.
//!
//! [`TextEmbedder`] is the capability the matcher consumes. [`SentenceEmbedder`]
//! is the candle-backed implementation (with a deterministic stub mode for
//! tests and model-less runs); [`MockTextEmbedder`] is a scripted double for
//! ranking tests.

/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Candle BERT sentence embedder.
pub mod sentence;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use config::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, EmbedderConfig};
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTextEmbedder;
pub use sentence::SentenceEmbedder;

/// Text → fixed-length vector capability.
///
/// Implementations must be deterministic for a fixed model version, and
/// outputs must be directly comparable under cosine similarity. The matcher
/// never inspects the dimension or the model identity.
pub trait TextEmbedder {
    /// Embeds a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds a batch of strings; an empty batch yields an empty result.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}
