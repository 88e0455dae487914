//! Frontend Models
//!
//! Data structures for the menu editor.

/// A single named entry in the menu list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
}
