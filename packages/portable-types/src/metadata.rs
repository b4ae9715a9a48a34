//! Class-level schema metadata for portable objects.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::field::FieldMetadata;

/// Returns the shared empty field collection.
///
/// Every instance constructed without fields holds a reference-counted
/// handle to this one zero-length collection instead of allocating its own.
fn empty_fields() -> Arc<[FieldMetadata]> {
    static EMPTY_FIELDS: OnceLock<Arc<[FieldMetadata]>> = OnceLock::new();
    EMPTY_FIELDS.get_or_init(|| Vec::new().into()).clone()
}

/// Schema metadata for one portable class.
///
/// Associates an optional type identity with the ordered collection of
/// field descriptors that make up the class's wire layout. Instances are
/// immutable once constructed and cheap to clone; the field collection is
/// shared by reference rather than copied.
///
/// # Invariants
///
/// - `fields` is never absent: constructing without fields substitutes the
///   shared empty collection, so consumers iterate unconditionally.
/// - Neither attribute changes after construction.
/// - Iteration over `fields` is stable (wire order as given) but names are
///   not guaranteed unique; duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassMetadata {
    /// Name of the described type, when known.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    type_name: Option<String>,
    /// Field descriptors in wire order.
    #[serde(default = "empty_fields")]
    fields: Arc<[FieldMetadata]>,
}

impl ClassMetadata {
    /// Returns the canonical "no metadata" instance: no type, no fields.
    ///
    /// Reuse this by reference wherever an absent-metadata marker is
    /// needed. An independently constructed empty instance compares equal
    /// to it.
    pub fn empty() -> &'static ClassMetadata {
        static EMPTY: OnceLock<ClassMetadata> = OnceLock::new();
        EMPTY.get_or_init(|| ClassMetadata::new(None, None))
    }

    /// Creates metadata for one class.
    ///
    /// `type_name` is stored as given; `None` means no concrete type is
    /// known, as with anonymous or dynamic schemas. When `fields` is
    /// `None`, the shared empty collection is substituted. A given
    /// collection is stored by reference without a defensive copy, and its
    /// contents are not validated here.
    pub fn new(type_name: Option<String>, fields: Option<Arc<[FieldMetadata]>>) -> Self {
        Self {
            type_name,
            fields: fields.unwrap_or_else(empty_fields),
        }
    }

    /// Returns the name of the described type, if known.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Returns the field descriptors in wire order.
    pub fn fields(&self) -> &[FieldMetadata] {
        &self.fields
    }

    /// Returns the number of field descriptors.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the first field descriptor with the given name.
    ///
    /// Names are not guaranteed unique; when duplicates exist, the first
    /// one in wire order wins.
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns `true` if this metadata carries any information worth
    /// transmitting: a known type or at least one field.
    pub fn is_needed(&self) -> bool {
        self.type_name.is_some() || !self.fields.is_empty()
    }
}

impl Default for ClassMetadata {
    fn default() -> Self {
        ClassMetadata::empty().clone()
    }
}
