use std::fmt;

use crate::field::Field;

/// One ranked candidate with its cosine similarity score.
///
/// Borrows the matched candidate rather than copying it, and is only ever
/// constructed by the ranker/orchestrator. Scores are raw cosine values in
/// `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    field: &'a Field,
    score: f32,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn new(field: &'a Field, score: f32) -> Self {
        Self { field, score }
    }

    /// The matched candidate field.
    pub fn field(&self) -> &'a Field {
        self.field
    }

    /// Cosine similarity to the input field.
    pub fn score(&self) -> f32 {
        self.score
    }
}

impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {:.3})", self.field.handle(), self.score)
    }
}
