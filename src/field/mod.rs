//! Validated field descriptors.
//!
//! A [`Field`] describes one attribute of a data schema: a programmatic
//! handle, a human-readable label, a data type, and an optional free-text
//! description. Construction validates and fails fast; a `Field` is never
//! partially built and never mutated afterwards.

pub mod error;


pub use error::ValidationError;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Data type of a schema field.
///
/// Parsed case-insensitively; rendered in lowercase canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Int,
    Number,
    Date,
    Boolean,
}

impl FieldType {
    /// Lowercase canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
        }
    }
}

impl FromStr for FieldType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(FieldType::String),
            "int" => Ok(FieldType::Int),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "boolean" => Ok(FieldType::Boolean),
            _ => Err(ValidationError::UnrecognizedType {
                value: value.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of a field record (`fieldHandle`, `fieldLabel`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    field_handle: String,
    field_label: String,
    field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field_description: Option<String>,
}

/// A described attribute of a data schema.
///
/// Immutable value object: handle and label are stored trimmed and are
/// guaranteed non-empty, the type is one of [`FieldType`], and an empty
/// description is normalized to absent. Equality is by value.
///
/// Deserialization goes through [`Field::new`], so a JSON record with an
/// empty handle or an unrecognized type fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub struct Field {
    handle: String,
    label: String,
    field_type: FieldType,
    description: Option<String>,
}

impl Field {
    /// Builds a validated field from raw attributes.
    ///
    /// `handle` and `label` are trimmed and must be non-empty afterwards;
    /// `field_type` is parsed case-insensitively. A `Some("")` description
    /// becomes `None`; any other description is kept verbatim.
    pub fn new(
        handle: &str,
        label: &str,
        field_type: &str,
        description: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(ValidationError::EmptyHandle);
        }

        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::EmptyLabel);
        }

        let field_type = field_type.parse::<FieldType>()?;

        let description = description
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Self {
            handle: handle.to_string(),
            label: label.to_string(),
            field_type,
            description,
        })
    }

    /// The programmatic identifier (e.g. `productSku`).
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The human-readable name (e.g. `Product SKU`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The field's data type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Optional free-text description; never `Some("")`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl TryFrom<RawField> for Field {
    type Error = ValidationError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        Field::new(
            &raw.field_handle,
            &raw.field_label,
            &raw.field_type,
            raw.field_description.as_deref(),
        )
    }
}

impl From<Field> for RawField {
    fn from(field: Field) -> Self {
        RawField {
            field_handle: field.handle,
            field_label: field.label,
            field_type: field.field_type.as_str().to_string(),
            field_description: field.description,
        }
    }
}
