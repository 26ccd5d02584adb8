//! Inventory repository contract and store-backed implementation.
//!
//! # Responsibility
//! - Provide the increment/decrement/list operations over the fixed
//!   `inventory` collection.
//! - Keep quantity lifecycle rules (create at one, delete at zero) in one
//!   place.
//!
//! # Invariants
//! - A quantity never goes negative: decrementing an absent item is a
//!   silent no-op, and a decrement from one deletes the document.
//! - Increment overwrites the stored category with the supplied value.
//! - Each operation is a read-then-write pair with no transactional guard;
//!   overlapping operations on one name resolve last-write-wins.

use crate::model::item::{Item, ItemValidationError};
use crate::store::{DocumentStore, FieldPatch, ItemFields, StoreError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collection holding one document per item, keyed by item name.
pub const INVENTORY_COLLECTION: &str = "inventory";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for inventory persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    Store(StoreError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for inventory operations.
pub trait InventoryRepository {
    /// Returns every item ordered by name ascending (case-insensitive,
    /// raw name as tie-break).
    fn list_all(&self) -> RepoResult<Vec<Item>>;

    /// Adds one unit of `name`, creating the item at quantity one when it
    /// does not exist. The stored category is overwritten either way.
    fn increment(&self, name: &str, category: &str) -> RepoResult<()>;

    /// Removes one unit of `name`. Deletes the document when the quantity
    /// would reach zero; does nothing when the item does not exist.
    fn decrement(&self, name: &str) -> RepoResult<()>;
}

/// Inventory repository over any document store adapter.
pub struct StoreInventoryRepository<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> StoreInventoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying adapter. Used by callers that share one store
    /// between a repository and direct inspection (tests, tooling).
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: DocumentStore> InventoryRepository for StoreInventoryRepository<S> {
    fn list_all(&self) -> RepoResult<Vec<Item>> {
        let documents = self.store.get_all(INVENTORY_COLLECTION)?;

        let mut items = Vec::with_capacity(documents.len());
        for (name, fields) in documents {
            items.push(item_from_document(name, fields)?);
        }

        items.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(items)
    }

    fn increment(&self, name: &str, category: &str) -> RepoResult<()> {
        // Validate the shape the write would produce before any store call.
        Item::new(name, category).validate()?;

        match self.store.get_one(INVENTORY_COLLECTION, name)? {
            Some(existing) => {
                let patch = FieldPatch {
                    quantity: Some(existing.quantity.saturating_add(1)),
                    category: Some(category.to_string()),
                };
                self.store.set_one(INVENTORY_COLLECTION, name, &patch, true)?;
            }
            None => {
                let patch = FieldPatch::full(ItemFields {
                    quantity: 1,
                    category: category.to_string(),
                });
                self.store.set_one(INVENTORY_COLLECTION, name, &patch, false)?;
            }
        }

        Ok(())
    }

    fn decrement(&self, name: &str) -> RepoResult<()> {
        match self.store.get_one(INVENTORY_COLLECTION, name)? {
            None => {
                debug!("event=item_decrement module=repo status=noop name_absent=true");
                Ok(())
            }
            Some(existing) if existing.quantity <= 1 => {
                self.store.delete_one(INVENTORY_COLLECTION, name)?;
                Ok(())
            }
            Some(existing) => {
                let patch = FieldPatch {
                    quantity: Some(existing.quantity - 1),
                    category: None,
                };
                self.store.set_one(INVENTORY_COLLECTION, name, &patch, true)?;
                Ok(())
            }
        }
    }
}

fn item_from_document(name: String, fields: ItemFields) -> RepoResult<Item> {
    let item = Item {
        name,
        quantity: fields.quantity,
        category: fields.category,
    };
    item.validate().map_err(|err| {
        RepoError::InvalidData(format!("document `{}` rejected: {err}", item.name))
    })?;
    Ok(item)
}
