//! Document store adapter contracts.
//!
//! # Responsibility
//! - Define the key-value document contract the repository layer talks to.
//! - Keep every storage backend behind one trait so the repository never
//!   sees connection or query details.
//!
//! # Invariants
//! - A document id is unique within its collection.
//! - A merge write touches only the fields present in the patch.
//! - A write must never materialize a document with missing fields.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Adapter-level failure taxonomy.
#[derive(Debug)]
pub enum StoreError {
    /// The backing store could not serve the request. Not recovered;
    /// callers surface it once and abandon the operation.
    Unavailable { details: String },
    /// A write would create a document with missing fields.
    IncompleteDocument { collection: String, id: String },
    /// A stored document cannot be mapped back onto the field contract.
    InvalidDocument {
        collection: String,
        id: String,
        details: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { details } => write!(f, "document store unavailable: {details}"),
            Self::IncompleteDocument { collection, id } => write!(
                f,
                "write would create incomplete document `{id}` in `{collection}`"
            ),
            Self::InvalidDocument {
                collection,
                id,
                details,
            } => write!(
                f,
                "invalid document `{id}` in `{collection}`: {details}"
            ),
        }
    }
}

impl Error for StoreError {}

/// Full field set of one inventory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub quantity: u32,
    pub category: String,
}

/// Partial field set used by `set_one`.
///
/// Absent fields are left untouched on merge writes and make a non-merge
/// (or document-creating) write fail with `IncompleteDocument`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub quantity: Option<u32>,
    pub category: Option<String>,
}

impl FieldPatch {
    /// Builds a patch carrying every field of a full document.
    pub fn full(fields: ItemFields) -> Self {
        Self {
            quantity: Some(fields.quantity),
            category: Some(fields.category),
        }
    }

    /// Returns the complete field set when every field is present.
    pub fn into_fields(self) -> Option<ItemFields> {
        Some(ItemFields {
            quantity: self.quantity?,
            category: self.category?,
        })
    }

    /// Applies this patch on top of existing fields.
    pub fn apply_to(&self, existing: &ItemFields) -> ItemFields {
        ItemFields {
            quantity: self.quantity.unwrap_or(existing.quantity),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| existing.category.clone()),
        }
    }
}

/// Key-value document collection contract.
///
/// Ids are caller-chosen strings (the item name for the inventory
/// collection). Backends are free to ignore `collection` partitioning only
/// if they serve exactly one collection.
pub trait DocumentStore {
    /// Returns every `(id, fields)` pair in the collection, unordered.
    fn get_all(&self, collection: &str) -> StoreResult<Vec<(String, ItemFields)>>;

    /// Returns one document's fields, or `None` when the id is absent.
    fn get_one(&self, collection: &str, id: &str) -> StoreResult<Option<ItemFields>>;

    /// Writes one document.
    ///
    /// # Contract
    /// - `merge = true`: fields present in `patch` overwrite the stored
    ///   values; absent fields keep their stored values. Writing to an
    ///   absent id creates the document and requires a complete patch.
    /// - `merge = false`: the document is replaced wholesale; the patch
    ///   must be complete.
    fn set_one(&self, collection: &str, id: &str, patch: &FieldPatch, merge: bool)
        -> StoreResult<()>;

    /// Deletes one document. Deleting an absent id is a no-op.
    fn delete_one(&self, collection: &str, id: &str) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::{FieldPatch, ItemFields};

    #[test]
    fn partial_patch_does_not_convert_to_full_fields() {
        let patch = FieldPatch {
            quantity: Some(2),
            category: None,
        };
        assert!(patch.into_fields().is_none());
    }

    #[test]
    fn apply_to_keeps_absent_fields() {
        let existing = ItemFields {
            quantity: 4,
            category: "Dairy".to_string(),
        };
        let patch = FieldPatch {
            quantity: Some(3),
            category: None,
        };
        let merged = patch.apply_to(&existing);
        assert_eq!(merged.quantity, 3);
        assert_eq!(merged.category, "Dairy");
    }
}
