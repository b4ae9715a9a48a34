//! Schema metadata types for portable binary object serialization.
//!
//! This crate defines the class-level and field-level descriptors that a
//! portable object serializer exchanges with its metadata registry and
//! wire protocol layer.

pub mod field;
pub mod metadata;

pub use field::{FieldError, FieldMetadata};
pub use metadata::ClassMetadata;
