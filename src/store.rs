//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::menu::{MenuList, ValidationError};

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The menu list being edited
    pub list: MenuList,
    /// Current search string; empty means no filter
    pub search: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Validate and append a pending name, returning the new item's id
pub fn store_add_item(store: &AppStore, input: &str) -> Result<u64, ValidationError> {
    store.list().write().add(input)
}

/// Remove an item from the store by id
pub fn store_remove_item(store: &AppStore, id: u64) {
    store.list().write().remove(id);
}
