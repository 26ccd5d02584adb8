//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the view layer decoupled from storage details.

pub mod inventory_service;
