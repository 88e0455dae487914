//! Search Bar Component
//!
//! Narrows the rendered list by case-insensitive substring match.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search items..."
                autocomplete="off"
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
        </div>
    }
}
