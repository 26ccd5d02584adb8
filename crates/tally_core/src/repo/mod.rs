//! Repository layer abstractions and the inventory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for inventory.
//! - Isolate document-store call details from service/view orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Item::validate()` before touching the store.
//! - Repository reads return semantic errors (`InvalidData`) for corrupt
//!   persisted state instead of masking it.

pub mod inventory_repo;
