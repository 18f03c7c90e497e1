//! Scripted embedder for tests.

use std::collections::HashMap;

use super::TextEmbedder;
use super::error::EmbeddingError;

/// Test double returning pre-registered vectors by exact text.
///
/// Unregistered texts embed to a zero vector (which scores 0.0 under cosine
/// similarity); [`MockTextEmbedder::failing`] simulates an unavailable
/// provider.
#[derive(Debug, Default, Clone)]
pub struct MockTextEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fail: bool,
}

impl MockTextEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an embedder whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Registers the vector returned for `text`.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }
}

impl TextEmbedder for MockTextEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock embedder configured to fail".to_string(),
            });
        }
        Ok(self.vectors.get(text).cloned().unwrap_or_else(|| vec![0.0; 4]))
    }
}
