//! Canonical text rendering of fields.
//!
//! The embedding model works best on short descriptive sentences, so each
//! [`Field`] is rendered to a fixed-format string before embedding.

use crate::field::Field;

/// Renders a field as the deterministic text handed to the embedder.
///
/// Handle, label, and type always appear, in that order, with fixed
/// separators; the description is appended only when present. Structurally
/// identical fields always produce byte-identical text, which keeps
/// embeddings cacheable and tests reproducible.
pub fn canonical_text(field: &Field) -> String {
    let mut text = format!(
        "Handle: {} | Label: {} | Type: {}",
        field.handle(),
        field.label(),
        field.field_type()
    );
    if let Some(description) = field.description() {
        text.push_str(" | Description: ");
        text.push_str(description);
    }
    text
}
