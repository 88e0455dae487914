//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod menu_form;
mod menu_list_view;
mod search_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use menu_form::MenuForm;
pub use menu_list_view::MenuListView;
pub use search_bar::SearchBar;
