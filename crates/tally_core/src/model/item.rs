//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical inventory record shared by repository and view.
//! - Provide validation enforced on every write path.
//!
//! # Invariants
//! - `name` is the primary key; it is never empty and never reused for a
//!   different item while the item exists.
//! - `quantity >= 1` whenever the item exists; a decrement that would reach
//!   zero deletes the item instead.
//! - `category` is a free-text non-empty label; the category set is derived
//!   from items, never persisted on its own.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical inventory record.
///
/// The category is plain text on purpose: categories are a derived grouping
/// label, so the model carries no reference to a category entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item name, acting as the document id in the store.
    pub name: String,
    /// Units on hand. Never zero for an existing item.
    pub quantity: u32,
    /// Grouping label shown in the list view.
    pub category: String,
}

/// Validation failure for item field contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Name is empty after trimming.
    EmptyName,
    /// Category is empty after trimming.
    EmptyCategory,
    /// Quantity is zero; such an item must not exist.
    ZeroQuantity { name: String },
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::EmptyCategory => write!(f, "item category must not be empty"),
            Self::ZeroQuantity { name } => {
                write!(f, "item `{name}` has zero quantity and must not exist")
            }
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates a new item with the initial quantity of one.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            category: category.into(),
        }
    }

    /// Checks field contracts shared by all write paths.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptyCategory` when the trimmed field is empty.
    /// - `ZeroQuantity` when `quantity == 0`.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if self.category.trim().is_empty() {
            return Err(ItemValidationError::EmptyCategory);
        }
        if self.quantity == 0 {
            return Err(ItemValidationError::ZeroQuantity {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemValidationError};

    #[test]
    fn new_item_starts_at_quantity_one() {
        let item = Item::new("Milk", "Dairy");
        assert_eq!(item.quantity, 1);
        item.validate().expect("fresh item should be valid");
    }

    #[test]
    fn validate_rejects_blank_fields_and_zero_quantity() {
        let blank_name = Item::new("   ", "Dairy");
        assert_eq!(blank_name.validate(), Err(ItemValidationError::EmptyName));

        let blank_category = Item::new("Milk", "");
        assert_eq!(
            blank_category.validate(),
            Err(ItemValidationError::EmptyCategory)
        );

        let mut zero = Item::new("Milk", "Dairy");
        zero.quantity = 0;
        assert!(matches!(
            zero.validate(),
            Err(ItemValidationError::ZeroQuantity { .. })
        ));
    }

    #[test]
    fn item_serde_roundtrip_preserves_fields() {
        let item = Item {
            name: "Oat Milk".to_string(),
            quantity: 3,
            category: "Dairy".to_string(),
        };
        let json = serde_json::to_string(&item).expect("item should serialize");
        let back: Item = serde_json::from_str(&json).expect("item should deserialize");
        assert_eq!(back, item);
    }
}
