//! View state controller for the inventory screen.
//!
//! # Responsibility
//! - Hold the full screen state in one explicit struct.
//! - Apply user actions through discrete handlers and dispatch repository
//!   calls via the inventory service.
//!
//! # Invariants
//! - The item cache is a read-through snapshot: it is fully replaced after
//!   every successful mutation or refresh, never patched in place.
//! - A failed store round trip leaves the displayed list stale and records
//!   the error; there is no retry.
//! - Validation failures surface a user-visible message and make no
//!   repository call.

use crate::model::item::Item;
use crate::query::categories::derive_categories;
use crate::query::filter::{filter_items, group_by_category};
use crate::repo::inventory_repo::InventoryRepository;
use crate::service::inventory_service::{InventoryService, InventoryServiceError};
use indexmap::IndexMap;
use log::error;
use std::collections::BTreeSet;

/// User-visible message shown when the add form fails validation.
pub const ADD_VALIDATION_MESSAGE: &str = "Please enter a valid item name and category.";

/// One user action on the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    OpenAddModal,
    CloseAddModal,
    SetPendingName(String),
    SetPendingCategory(String),
    /// Confirm the add form (modal "Add" button).
    ConfirmAdd,
    /// Per-row add control; reuses the row's displayed category.
    IncrementRow(String),
    /// Per-row remove control.
    DecrementRow(String),
    /// `""` selects all categories.
    SetCategoryFilter(String),
    SetSearchQuery(String),
    ToggleAccessible,
    ToggleDarkMode,
    Refresh,
}

/// Full state of the inventory screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Read-through snapshot of the store, sorted by name.
    pub items: Vec<Item>,
    /// Categories derived from `items`; recomputed on every refresh.
    pub categories: BTreeSet<String>,
    pub modal_open: bool,
    pub pending_name: String,
    pub pending_category: String,
    /// Current category filter; empty means all categories.
    pub category_filter: String,
    pub search_query: String,
    pub accessible: bool,
    pub dark_mode: bool,
    /// Set when the add form failed validation; cleared on the next
    /// successful add or form edit.
    pub validation_message: Option<String>,
    /// Last store failure, surfaced once. The list stays stale until a
    /// later action refreshes it.
    pub last_error: Option<String>,
}

/// Controller owning the view state and dispatching actions.
pub struct ViewController<R: InventoryRepository> {
    service: InventoryService<R>,
    state: ViewState,
}

impl<R: InventoryRepository> ViewController<R> {
    /// Creates a controller with an empty item cache. Callers usually send
    /// `ViewAction::Refresh` right after construction.
    pub fn new(service: InventoryService<R>) -> Self {
        Self {
            service,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Items matching the current category filter and search query,
    /// cache order preserved.
    pub fn visible_items(&self) -> Vec<Item> {
        filter_items(
            &self.state.items,
            &self.state.category_filter,
            &self.state.search_query,
        )
    }

    /// Visible items grouped by category in first-occurrence order.
    pub fn visible_groups(&self) -> IndexMap<String, Vec<Item>> {
        group_by_category(&self.visible_items())
    }

    /// Applies one user action to the state.
    pub fn handle(&mut self, action: ViewAction) {
        match action {
            ViewAction::OpenAddModal => {
                self.state.modal_open = true;
            }
            ViewAction::CloseAddModal => {
                self.state.modal_open = false;
                self.state.pending_name.clear();
                self.state.pending_category.clear();
                self.state.validation_message = None;
            }
            ViewAction::SetPendingName(value) => {
                self.state.pending_name = value;
                self.state.validation_message = None;
            }
            ViewAction::SetPendingCategory(value) => {
                self.state.pending_category = value;
                self.state.validation_message = None;
            }
            ViewAction::ConfirmAdd => self.confirm_add(),
            ViewAction::IncrementRow(name) => self.increment_row(&name),
            ViewAction::DecrementRow(name) => self.decrement_row(&name),
            ViewAction::SetCategoryFilter(value) => {
                self.state.category_filter = value;
            }
            ViewAction::SetSearchQuery(value) => {
                self.state.search_query = value;
            }
            ViewAction::ToggleAccessible => {
                self.state.accessible = !self.state.accessible;
            }
            ViewAction::ToggleDarkMode => {
                self.state.dark_mode = !self.state.dark_mode;
            }
            ViewAction::Refresh => self.refresh(),
        }
    }

    fn confirm_add(&mut self) {
        let name = self.state.pending_name.clone();
        let category = self.state.pending_category.clone();

        match self.service.add_item(&name, &category) {
            Ok(items) => {
                self.replace_cache(items);
                self.state.pending_name.clear();
                self.state.pending_category.clear();
                self.state.validation_message = None;
                self.state.modal_open = false;
            }
            Err(
                InventoryServiceError::InvalidName | InventoryServiceError::InvalidCategory,
            ) => {
                self.state.validation_message = Some(ADD_VALIDATION_MESSAGE.to_string());
            }
            Err(InventoryServiceError::Repo(err)) => self.record_store_failure("add", &err),
        }
    }

    fn increment_row(&mut self, name: &str) {
        // The row control reuses the category already displayed for the
        // item; an unknown name means the row vanished under us -> no-op.
        let Some(category) = self
            .state
            .items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.category.clone())
        else {
            return;
        };

        match self.service.add_item(name, &category) {
            Ok(items) => self.replace_cache(items),
            Err(err) => self.record_store_failure("row_add", &err),
        }
    }

    fn decrement_row(&mut self, name: &str) {
        match self.service.remove_item(name) {
            Ok(items) => self.replace_cache(items),
            Err(err) => self.record_store_failure("row_remove", &err),
        }
    }

    fn refresh(&mut self) {
        match self.service.list_items() {
            Ok(items) => self.replace_cache(items),
            Err(err) => {
                error!("event=view_refresh module=view status=error error={err}");
                self.state.last_error = Some(err.to_string());
            }
        }
    }

    fn replace_cache(&mut self, items: Vec<Item>) {
        self.state.categories = derive_categories(&items);
        self.state.items = items;
        self.state.last_error = None;
    }

    fn record_store_failure(&mut self, op: &str, err: &dyn std::fmt::Display) {
        error!("event=view_action module=view status=error op={op} error={err}");
        self.state.last_error = Some(err.to_string());
    }
}
