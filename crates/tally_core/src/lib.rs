//! Core domain logic for the tally inventory tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemValidationError};
pub use query::categories::derive_categories;
pub use query::filter::{filter_items, group_by_category};
pub use repo::inventory_repo::{
    InventoryRepository, RepoError, RepoResult, StoreInventoryRepository, INVENTORY_COLLECTION,
};
pub use service::inventory_service::{InventoryService, InventoryServiceError};
pub use store::{
    DocumentStore, FieldPatch, ItemFields, MemoryDocumentStore, SqliteDocumentStore, StoreError,
    StoreResult,
};
pub use view::state::{ViewAction, ViewController, ViewState, ADD_VALIDATION_MESSAGE};
pub use view::theme::{palette, Palette};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
