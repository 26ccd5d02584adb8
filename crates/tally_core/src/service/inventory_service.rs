//! Inventory use-case service.
//!
//! # Responsibility
//! - Validate user input before any repository call is made.
//! - Pair every mutation with a full list refresh so callers always hold a
//!   current read-through snapshot.
//!
//! # Invariants
//! - Validation failures block the mutation; no store call happens.
//! - Mutation results are never patched locally; the returned list is a
//!   fresh `list_all()` read.

use crate::model::item::Item;
use crate::repo::inventory_repo::{InventoryRepository, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for inventory use-cases.
#[derive(Debug)]
pub enum InventoryServiceError {
    /// Item name is empty after trimming.
    InvalidName,
    /// Category is empty after trimming.
    InvalidCategory,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for InventoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "item name must not be empty"),
            Self::InvalidCategory => write!(f, "category must not be empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InventoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for InventoryServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case facade over an inventory repository.
pub struct InventoryService<R: InventoryRepository> {
    repo: R,
}

impl<R: InventoryRepository> InventoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Adds one unit of `name` under `category` and returns the refreshed
    /// sorted item list.
    ///
    /// # Contract
    /// - Trims both inputs; empty values fail validation with no store call.
    /// - Repeat adds increment the quantity and overwrite the category.
    pub fn add_item(
        &self,
        name: &str,
        category: &str,
    ) -> Result<Vec<Item>, InventoryServiceError> {
        let name = name.trim();
        let category = category.trim();
        if name.is_empty() {
            return Err(InventoryServiceError::InvalidName);
        }
        if category.is_empty() {
            return Err(InventoryServiceError::InvalidCategory);
        }

        self.repo.increment(name, category)?;
        Ok(self.repo.list_all()?)
    }

    /// Removes one unit of `name` and returns the refreshed sorted list.
    ///
    /// Removing an absent item is a no-op; the refreshed list is returned
    /// either way.
    pub fn remove_item(&self, name: &str) -> Result<Vec<Item>, InventoryServiceError> {
        self.repo.decrement(name.trim())?;
        Ok(self.repo.list_all()?)
    }

    /// Lists all items ordered by name ascending.
    pub fn list_items(&self) -> RepoResult<Vec<Item>> {
        self.repo.list_all()
    }
}
