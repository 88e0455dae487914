//! Menu Form Component
//!
//! Text input with per-keystroke validation and an Add button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::menu::ValidationError;
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Form for adding new menu items
#[component]
pub fn MenuForm() -> impl IntoView {
    let store = use_app_store();

    let (pending, set_pending) = signal(String::new());
    let (error, set_error) = signal::<Option<ValidationError>>(None);

    // Re-validate on every keystroke; the list itself is untouched
    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let text = input.value();
        set_error.set(store.list().read_untracked().validate(&text).err());
        set_pending.set(text);
    };

    // Covers both the Add button and the Enter key
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = pending.get();
        if text.trim().is_empty() {
            return;
        }
        match store_add_item(&store, &text) {
            Ok(_) => {
                set_pending.set(String::new());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    let submit_disabled =
        move || error.get().is_some() || pending.get().trim().is_empty();

    view! {
        <form class="menu-form" on:submit=on_submit>
            <label class="form-label" for="menu-item-input">
                "Menu Item Name " <span class="required">"*"</span>
            </label>
            <div class="input-group">
                <input
                    id="menu-item-input"
                    type="text"
                    class="menu-input"
                    placeholder="Enter menu item"
                    autocomplete="off"
                    prop:value=move || pending.get()
                    on:input=on_input
                />
                <button type="submit" class="add-button" prop:disabled=submit_disabled>
                    "+ Add Item"
                </button>
            </div>
            {move || error.get().map(|e| view! {
                <p class="error-message">{e.to_string()}</p>
            })}
        </form>
    }
}
