//! Menu Items App
//!
//! Root component: owns the store and lays out form, search and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{MenuForm, MenuListView, SearchBar};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide the store to all children
    provide_context(store);

    view! {
        <div class="menu-container">
            <h2>"Menu Items"</h2>

            <MenuForm />
            <SearchBar />
            <MenuListView />

            <p class="item-count">
                {move || {
                    let total = store.list().read().len();
                    let shown = store.list().read().filtered(&store.search().get()).len();
                    if shown == total {
                        format!("{} items", total)
                    } else {
                        format!("{} of {} items", shown, total)
                    }
                }}
            </p>
        </div>
    }
}
