//! Pure list-shaping queries for the inventory view.
//!
//! # Responsibility
//! - Derive the category set from the current item list.
//! - Filter and group items for display without touching storage.
//!
//! # Invariants
//! - Query functions are pure; they never reorder input beyond their
//!   documented contract and never call the store.

pub mod categories;
pub mod filter;
