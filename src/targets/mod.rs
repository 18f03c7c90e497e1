//! Target-schema field lists on disk.
//!
//! A target list is a JSON array of field records in the wire shape of
//! [`Field`]:
//!
//! ```json
//! [
//!   {"fieldHandle": "sku", "fieldLabel": "SKU", "fieldType": "string"},
//!   {"fieldHandle": "price", "fieldLabel": "Price", "fieldType": "number"}
//! ]
//! ```

pub mod error;


pub use error::TargetsError;

use std::path::Path;

use tracing::debug;

use crate::field::Field;

/// Loads and validates target fields from a JSON file.
///
/// Every record passes through [`Field::new`], so a file containing an empty
/// handle or an unrecognized type fails to load as a whole; there is no
/// partially loaded list.
pub fn load_target_fields(path: impl AsRef<Path>) -> Result<Vec<Field>, TargetsError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|source| TargetsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let fields: Vec<Field> =
        serde_json::from_str(&contents).map_err(|source| TargetsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), count = fields.len(), "Loaded target fields");
    Ok(fields)
}
