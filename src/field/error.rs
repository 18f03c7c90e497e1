//! Field validation error types.

use thiserror::Error;

/// Errors raised by [`Field::new`](super::Field::new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `fieldHandle` was empty or whitespace-only.
    #[error("fieldHandle is required and cannot be empty")]
    EmptyHandle,

    /// `fieldLabel` was empty or whitespace-only.
    #[error("fieldLabel is required and cannot be empty")]
    EmptyLabel,

    /// `fieldType` was not one of the recognized type names.
    #[error("unrecognized fieldType '{value}': expected one of string, int, number, date, boolean")]
    UnrecognizedType { value: String },
}
