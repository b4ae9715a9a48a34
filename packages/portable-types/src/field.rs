//! Field descriptor definitions for portable class schemas.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for field descriptor validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The field name is empty.
    #[error("field name is empty")]
    EmptyName,
    /// The field type name is empty.
    #[error("field '{name}' has an empty type name")]
    EmptyTypeName {
        /// The name of the offending field.
        name: String,
    },
}

/// Describes one serialized field within a portable class schema.
///
/// A descriptor carries the field's wire name, the identifier of its type
/// and its numeric wire id. Instances are immutable once constructed;
/// schema-level concerns such as name uniqueness are left to the component
/// that assembles the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Name of the field as written on the wire.
    name: String,
    /// Identifier of the field's type (e.g. "i32", "string").
    #[serde(rename = "type")]
    type_name: String,
    /// Numeric wire id of the field within its class schema.
    field_id: i32,
}

impl FieldMetadata {
    /// Creates a new field descriptor.
    ///
    /// The inputs are stored as given; nothing is validated here. Use
    /// [`FieldMetadata::validate`] to check a descriptor before admitting
    /// it into a schema.
    pub fn new(name: String, type_name: String, field_id: i32) -> Self {
        Self {
            name,
            type_name,
            field_id,
        }
    }

    /// Returns the name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the field's type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the numeric wire id of the field.
    pub fn field_id(&self) -> i32 {
        self.field_id
    }

    /// Validates that the descriptor is well-formed.
    ///
    /// Returns an error if the field name or the type name is empty.
    /// Duplicate names across a schema are not detectable at this level
    /// and remain the responsibility of the schema assembler.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.is_empty() {
            return Err(FieldError::EmptyName);
        }

        if self.type_name.is_empty() {
            return Err(FieldError::EmptyTypeName {
                name: self.name.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for FieldMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors() {
        let field = FieldMetadata::new("age".to_string(), "i32".to_string(), 1);

        assert_eq!(field.name(), "age");
        assert_eq!(field.type_name(), "i32");
        assert_eq!(field.field_id(), 1);
    }

    #[test]
    fn test_field_equality() {
        let field1 = FieldMetadata::new("age".to_string(), "i32".to_string(), 1);
        let field2 = FieldMetadata::new("age".to_string(), "i32".to_string(), 1);
        let field3 = FieldMetadata::new("score".to_string(), "f32".to_string(), 2);

        assert_eq!(field1, field2);
        assert_ne!(field1, field3);
    }

    #[test]
    fn test_field_serialization() {
        let field = FieldMetadata::new("age".to_string(), "i32".to_string(), 3);
        let json = serde_json::to_string(&field).unwrap();
        let decoded: FieldMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.name(), "age");
        assert_eq!(decoded.type_name(), "i32");
        assert_eq!(decoded.field_id(), 3);
    }

    #[test]
    fn test_field_serialized_type_key() {
        let field = FieldMetadata::new("age".to_string(), "i32".to_string(), 3);
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(json["name"], "age");
        assert_eq!(json["type"], "i32");
        assert_eq!(json["field_id"], 3);
    }

    #[test]
    fn test_field_validate() {
        let field = FieldMetadata::new("age".to_string(), "i32".to_string(), 1);
        assert!(field.validate().is_ok());
    }

    #[test]
    fn test_field_validate_empty_name() {
        let field = FieldMetadata::new(String::new(), "i32".to_string(), 1);

        let result = field.validate();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), FieldError::EmptyName);
    }

    #[test]
    fn test_field_validate_empty_type_name() {
        let field = FieldMetadata::new("age".to_string(), String::new(), 1);

        let result = field.validate();
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            FieldError::EmptyTypeName {
                name: "age".to_string(),
            }
        );
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::EmptyTypeName {
            name: "age".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("field 'age' has an empty type name"));
    }

    #[test]
    fn test_field_display() {
        let field = FieldMetadata::new("age".to_string(), "i32".to_string(), 1);
        assert_eq!(field.to_string(), "age: i32");
    }
}
