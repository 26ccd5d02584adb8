//! View-facing state for the single-page inventory screen.
//!
//! # Responsibility
//! - Own the explicit UI state struct and its discrete action handlers.
//! - Map theme flags to the display palette.
//!
//! # Invariants
//! - State changes happen only through `ViewController::handle`; there is
//!   no ambient mutable state.

pub mod state;
pub mod theme;
