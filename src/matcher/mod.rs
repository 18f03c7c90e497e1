//! Match orchestration.
//!
//! [`FieldMatcher`] drives the full pipeline for one input field: render
//! every field to canonical text, obtain embeddings from the injected
//! [`TextEmbedder`], and delegate scoring and ordering to [`crate::ranking`].

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::MatchError;
pub use types::MatchResult;

use tracing::debug;

use crate::canon::canonical_text;
use crate::embedding::TextEmbedder;
use crate::field::Field;
use crate::ranking::{self, RankingError};

/// Matches an input field against candidate fields by semantic similarity.
///
/// Holds no state beyond the injected embedder; a single `find_matches` call
/// runs synchronously to completion and has no side effects beyond the
/// embedder's own.
#[derive(Debug)]
pub struct FieldMatcher<E> {
    embedder: E,
}

impl<E: TextEmbedder> FieldMatcher<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    /// Returns the injected embedder.
    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Finds the `top_k` candidates most similar to `input`, descending by
    /// cosine score, ties in original candidate order.
    ///
    /// An empty candidate list returns an empty result ("no targets
    /// configured" is a valid caller state, not an error) without touching
    /// the embedder. `top_k == 0` is always an error, even with no
    /// candidates. Either the whole call succeeds or it fails; there is no
    /// partial-result mode.
    pub fn find_matches<'a>(
        &self,
        input: &Field,
        candidates: &'a [Field],
        top_k: usize,
    ) -> Result<Vec<MatchResult<'a>>, MatchError> {
        if top_k == 0 {
            return Err(RankingError::InvalidTopK { top_k }.into());
        }

        if candidates.is_empty() {
            debug!(input_handle = input.handle(), "No candidate fields; empty match set");
            return Ok(Vec::new());
        }

        let input_text = canonical_text(input);
        let candidate_texts: Vec<String> = candidates.iter().map(canonical_text).collect();
        let candidate_refs: Vec<&str> = candidate_texts.iter().map(String::as_str).collect();

        let query = self.embedder.embed(&input_text)?;
        let vectors = self.embedder.embed_batch(&candidate_refs)?;

        let results = ranking::rank(&query, candidates, &vectors, top_k)?;

        debug!(
            input_handle = input.handle(),
            candidate_count = candidates.len(),
            returned = results.len(),
            "Match complete"
        );

        Ok(results)
    }
}
