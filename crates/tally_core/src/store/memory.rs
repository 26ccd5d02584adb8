//! In-memory document store adapter.
//!
//! # Responsibility
//! - Serve the `DocumentStore` contract from process memory for tests and
//!   ephemeral sessions.
//!
//! # Invariants
//! - Single-threaded by design; the application model is event-driven with
//!   no parallel repository calls.

use super::{DocumentStore, FieldPatch, ItemFields, StoreError, StoreResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Map-backed store keyed by `(collection, id)`.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RefCell<BTreeMap<(String, String), ItemFields>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents across all collections. Test helper.
    pub fn len(&self) -> usize {
        self.documents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.borrow().is_empty()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get_all(&self, collection: &str) -> StoreResult<Vec<(String, ItemFields)>> {
        let documents = self.documents.borrow();
        Ok(documents
            .iter()
            .filter(|((held, _), _)| held == collection)
            .map(|((_, id), fields)| (id.clone(), fields.clone()))
            .collect())
    }

    fn get_one(&self, collection: &str, id: &str) -> StoreResult<Option<ItemFields>> {
        let key = (collection.to_string(), id.to_string());
        Ok(self.documents.borrow().get(&key).cloned())
    }

    fn set_one(
        &self,
        collection: &str,
        id: &str,
        patch: &FieldPatch,
        merge: bool,
    ) -> StoreResult<()> {
        let key = (collection.to_string(), id.to_string());
        let mut documents = self.documents.borrow_mut();

        let fields = if merge {
            match documents.get(&key) {
                Some(existing) => patch.apply_to(existing),
                None => patch.clone().into_fields().ok_or_else(|| {
                    StoreError::IncompleteDocument {
                        collection: collection.to_string(),
                        id: id.to_string(),
                    }
                })?,
            }
        } else {
            patch
                .clone()
                .into_fields()
                .ok_or_else(|| StoreError::IncompleteDocument {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })?
        };

        documents.insert(key, fields);
        Ok(())
    }

    fn delete_one(&self, collection: &str, id: &str) -> StoreResult<()> {
        let key = (collection.to_string(), id.to_string());
        self.documents.borrow_mut().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryDocumentStore;
    use crate::store::{DocumentStore, FieldPatch, ItemFields, StoreError};

    #[test]
    fn merge_on_absent_id_requires_complete_patch() {
        let store = MemoryDocumentStore::new();
        let partial = FieldPatch {
            quantity: Some(1),
            category: None,
        };

        let err = store
            .set_one("inventory", "Milk", &partial, true)
            .unwrap_err();
        assert!(matches!(err, StoreError::IncompleteDocument { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        let fields = FieldPatch::full(ItemFields {
            quantity: 1,
            category: "Dairy".to_string(),
        });
        store.set_one("inventory", "Milk", &fields, false).unwrap();

        assert!(store.get_one("archive", "Milk").unwrap().is_none());
        assert_eq!(store.get_all("archive").unwrap().len(), 0);
        assert_eq!(store.get_all("inventory").unwrap().len(), 1);
    }
}
