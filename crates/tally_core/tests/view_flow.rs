use std::cell::Cell;
use std::rc::Rc;
use tally_core::{
    DocumentStore, FieldPatch, InventoryService, ItemFields, MemoryDocumentStore,
    StoreError, StoreInventoryRepository, StoreResult, ViewAction, ViewController,
    ADD_VALIDATION_MESSAGE,
};

fn memory_controller() -> ViewController<StoreInventoryRepository<MemoryDocumentStore>> {
    let repo = StoreInventoryRepository::new(MemoryDocumentStore::new());
    ViewController::new(InventoryService::new(repo))
}

fn add_through_modal(
    controller: &mut ViewController<StoreInventoryRepository<MemoryDocumentStore>>,
    name: &str,
    category: &str,
) {
    controller.handle(ViewAction::OpenAddModal);
    controller.handle(ViewAction::SetPendingName(name.to_string()));
    controller.handle(ViewAction::SetPendingCategory(category.to_string()));
    controller.handle(ViewAction::ConfirmAdd);
}

#[test]
fn confirm_add_persists_clears_form_and_closes_modal() {
    let mut controller = memory_controller();

    add_through_modal(&mut controller, "Milk", "Dairy");

    let state = controller.state();
    assert!(!state.modal_open);
    assert!(state.pending_name.is_empty());
    assert!(state.pending_category.is_empty());
    assert!(state.validation_message.is_none());
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Milk");
    assert!(state.categories.contains("Dairy"));
}

#[test]
fn blank_form_surfaces_validation_message_and_writes_nothing() {
    let mut controller = memory_controller();

    controller.handle(ViewAction::OpenAddModal);
    controller.handle(ViewAction::SetPendingName("  ".to_string()));
    controller.handle(ViewAction::SetPendingCategory("Dairy".to_string()));
    controller.handle(ViewAction::ConfirmAdd);

    let state = controller.state();
    assert!(state.modal_open);
    assert_eq!(state.validation_message.as_deref(), Some(ADD_VALIDATION_MESSAGE));
    assert!(state.items.is_empty());

    // Editing the form clears the message.
    controller.handle(ViewAction::SetPendingName("Milk".to_string()));
    assert!(controller.state().validation_message.is_none());
}

#[test]
fn closing_the_modal_discards_pending_input() {
    let mut controller = memory_controller();

    controller.handle(ViewAction::OpenAddModal);
    controller.handle(ViewAction::SetPendingName("Milk".to_string()));
    controller.handle(ViewAction::SetPendingCategory("Dairy".to_string()));
    controller.handle(ViewAction::CloseAddModal);

    let state = controller.state();
    assert!(!state.modal_open);
    assert!(state.pending_name.is_empty());
    assert!(state.pending_category.is_empty());
    assert!(state.items.is_empty());
}

#[test]
fn row_controls_increment_and_decrement_the_cached_item() {
    let mut controller = memory_controller();
    add_through_modal(&mut controller, "Milk", "Dairy");

    controller.handle(ViewAction::IncrementRow("Milk".to_string()));
    assert_eq!(controller.state().items[0].quantity, 2);
    assert_eq!(controller.state().items[0].category, "Dairy");

    controller.handle(ViewAction::DecrementRow("Milk".to_string()));
    assert_eq!(controller.state().items[0].quantity, 1);

    controller.handle(ViewAction::DecrementRow("Milk".to_string()));
    assert!(controller.state().items.is_empty());
    assert!(controller.state().categories.is_empty());
}

#[test]
fn increment_of_unknown_row_is_a_noop() {
    let mut controller = memory_controller();
    add_through_modal(&mut controller, "Milk", "Dairy");

    controller.handle(ViewAction::IncrementRow("Bread".to_string()));
    assert_eq!(controller.state().items.len(), 1);
    assert_eq!(controller.state().items[0].quantity, 1);
}

#[test]
fn category_disappears_once_its_last_item_is_removed() {
    let mut controller = memory_controller();
    add_through_modal(&mut controller, "Milk", "Dairy");
    add_through_modal(&mut controller, "Cheese", "Dairy");
    add_through_modal(&mut controller, "Bread", "Bakery");

    controller.handle(ViewAction::DecrementRow("Bread".to_string()));
    assert!(!controller.state().categories.contains("Bakery"));
    assert!(controller.state().categories.contains("Dairy"));

    controller.handle(ViewAction::DecrementRow("Milk".to_string()));
    assert!(controller.state().categories.contains("Dairy"));
}

#[test]
fn filter_and_search_shape_the_visible_groups() {
    let mut controller = memory_controller();
    add_through_modal(&mut controller, "Apple", "Fruit");
    add_through_modal(&mut controller, "Banana", "Fruit");
    add_through_modal(&mut controller, "Apricot", "Veg");

    controller.handle(ViewAction::SetCategoryFilter("Fruit".to_string()));
    controller.handle(ViewAction::SetSearchQuery("ap".to_string()));

    let visible = controller.visible_items();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Apple");

    controller.handle(ViewAction::SetCategoryFilter(String::new()));
    controller.handle(ViewAction::SetSearchQuery(String::new()));

    let groups = controller.visible_groups();
    let keys: Vec<&String> = groups.keys().collect();
    assert_eq!(keys, ["Fruit", "Veg"]);
    assert_eq!(groups["Fruit"].len(), 2);
}

#[test]
fn theme_toggles_never_touch_inventory_data() {
    let mut controller = memory_controller();
    add_through_modal(&mut controller, "Milk", "Dairy");

    controller.handle(ViewAction::ToggleAccessible);
    controller.handle(ViewAction::ToggleDarkMode);

    let state = controller.state();
    assert!(state.accessible);
    assert!(state.dark_mode);
    assert_eq!(state.items.len(), 1);

    controller.handle(ViewAction::ToggleDarkMode);
    assert!(!controller.state().dark_mode);
}

/// Store double that can be switched into an outage mid-test.
struct FlakyStore {
    inner: MemoryDocumentStore,
    offline: Rc<Cell<bool>>,
}

impl FlakyStore {
    fn outage() -> StoreError {
        StoreError::Unavailable {
            details: "simulated outage".to_string(),
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.offline.get() {
            Err(Self::outage())
        } else {
            Ok(())
        }
    }
}

impl DocumentStore for FlakyStore {
    fn get_all(&self, collection: &str) -> StoreResult<Vec<(String, ItemFields)>> {
        self.check()?;
        self.inner.get_all(collection)
    }

    fn get_one(&self, collection: &str, id: &str) -> StoreResult<Option<ItemFields>> {
        self.check()?;
        self.inner.get_one(collection, id)
    }

    fn set_one(
        &self,
        collection: &str,
        id: &str,
        patch: &FieldPatch,
        merge: bool,
    ) -> StoreResult<()> {
        self.check()?;
        self.inner.set_one(collection, id, patch, merge)
    }

    fn delete_one(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.delete_one(collection, id)
    }
}

#[test]
fn store_outage_surfaces_once_and_leaves_the_list_stale() {
    let offline = Rc::new(Cell::new(false));
    let store = FlakyStore {
        inner: MemoryDocumentStore::new(),
        offline: Rc::clone(&offline),
    };
    let mut controller = ViewController::new(InventoryService::new(
        StoreInventoryRepository::new(store),
    ));

    controller.handle(ViewAction::OpenAddModal);
    controller.handle(ViewAction::SetPendingName("Milk".to_string()));
    controller.handle(ViewAction::SetPendingCategory("Dairy".to_string()));
    controller.handle(ViewAction::ConfirmAdd);
    assert_eq!(controller.state().items.len(), 1);

    offline.set(true);
    controller.handle(ViewAction::DecrementRow("Milk".to_string()));

    let state = controller.state();
    assert!(state.last_error.as_deref().unwrap().contains("unavailable"));
    // Displayed list stays stale until a later action refreshes it.
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].quantity, 1);

    offline.set(false);
    controller.handle(ViewAction::Refresh);
    assert!(controller.state().last_error.is_none());
    assert_eq!(controller.state().items.len(), 1);
}
