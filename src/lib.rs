//! Semantic schema-field matching.
//!
//! `semalign` matches an input data field against the fields of a target
//! schema without hardcoded name-mapping rules: every field is rendered as a
//! short natural-language description, embedded as a vector, and candidates
//! are ranked by cosine similarity to the input.
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types
//! - [`Field`], [`FieldType`], [`ValidationError`] - Validated field descriptors
//! - [`MatchResult`] - A ranked candidate with its similarity score
//!
//! ## Matching Pipeline
//! - [`canonical_text`] - Deterministic text rendering used for embedding
//! - [`rank`], [`cosine_similarity`] - Similarity scoring over candidate sets
//! - [`FieldMatcher`] - The orchestrator driving canonicalize → embed → rank
//!
//! ## Embedding
//! - [`TextEmbedder`] - The capability the matcher consumes
//! - [`SentenceEmbedder`], [`EmbedderConfig`] - Candle-backed sentence
//!   embedder with a deterministic stub mode
//!
//! ## Configuration & I/O
//! - [`Config`], [`ConfigError`] - Environment-backed process configuration
//! - [`load_target_fields`] - JSON loading of target-schema field lists
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod canon;
pub mod config;
pub mod embedding;
pub mod field;
pub mod matcher;
pub mod ranking;
pub mod targets;

pub use canon::canonical_text;
pub use config::{Config, ConfigError};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockTextEmbedder;
pub use embedding::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, EmbedderConfig, EmbeddingError, SentenceEmbedder,
    TextEmbedder,
};
pub use field::{Field, FieldType, ValidationError};
pub use matcher::{FieldMatcher, MatchError, MatchResult};
pub use ranking::{DEFAULT_TOP_K, RankingError, cosine_similarity, rank};
pub use targets::{TargetsError, load_target_fields};
