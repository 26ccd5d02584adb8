//! Domain model for tracked inventory.
//!
//! # Responsibility
//! - Define the canonical item record used by core business logic.
//! - Keep identity semantics (name as primary key) in one place.
//!
//! # Invariants
//! - An item's `name` is its stable identity; two items never share a name.
//! - A persisted item always has `quantity >= 1`; zero quantity means the
//!   item is deleted, never stored.

pub mod item;
