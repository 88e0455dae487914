//! Menu List Component
//!
//! Renders the (optionally filtered) items with per-row delete controls.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::store::{store_remove_item, use_app_store, AppStateStoreFields};

#[component]
pub fn MenuListView() -> impl IntoView {
    let store = use_app_store();

    let visible = move || store.list().read().filtered(&store.search().get());

    view! {
        <Show
            when=move || !store.list().read().is_empty()
            fallback=|| view! {
                <div class="empty-state">
                    "No items added yet. Start by adding some items above!"
                </div>
            }
        >
            <ul class="menu-list">
                <For
                    each=visible
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let name = item.name.clone();
                        view! {
                            <li class="menu-row">
                                <span class="menu-name">{name}</span>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |_| store_remove_item(&store, id))
                                />
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
