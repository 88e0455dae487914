//! Menu List Logic
//!
//! Pure validation, mutation and filter operations over the in-memory
//! item list, independent of the DOM.

use thiserror::Error;

use crate::models::MenuItem;

/// Minimum item name length after trimming
pub const MIN_NAME_LEN: usize = 3;

/// Why a pending name cannot be added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item name must be at least 3 characters long")]
    TooShort,
    #[error("This item already exists")]
    Duplicate,
}

/// Insertion-ordered menu items plus the next id to hand out.
///
/// Ids are monotonic and never reused, so deleting and re-adding a name
/// yields a fresh id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuList {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl Default for MenuList {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuList {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check a pending input against the rules, first failure wins.
    /// Returns the trimmed name ready for storage.
    pub fn validate(&self, input: &str) -> Result<String, ValidationError> {
        let name = input.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::TooShort);
        }
        let lower = name.to_lowercase();
        if self.items.iter().any(|item| item.name.to_lowercase() == lower) {
            return Err(ValidationError::Duplicate);
        }
        Ok(name.to_string())
    }

    /// Validate and append, returning the new item's id
    pub fn add(&mut self, input: &str) -> Result<u64, ValidationError> {
        let name = self.validate(input)?;
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(MenuItem { id, name });
        Ok(id)
    }

    /// Remove the item with this id. Missing ids are a silent no-op.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Items whose name contains `query` case-insensitively, in
    /// insertion order. An empty query matches everything.
    pub fn filtered(&self, query: &str) -> Vec<MenuItem> {
        if query.is_empty() {
            return self.items.clone();
        }
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(names: &[&str]) -> MenuList {
        let mut list = MenuList::new();
        for name in names {
            list.add(name).unwrap();
        }
        list
    }

    #[test]
    fn test_add_appends_trimmed_name() {
        let mut list = MenuList::new();
        let id = list.add("  Pizza  ").unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, id);
        assert_eq!(list.items()[0].name, "Pizza");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let list = list_with(&["Pizza", "Pasta", "Salad"]);
        let names: Vec<&str> = list.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Pasta", "Salad"]);
    }

    #[test]
    fn test_add_rejects_short_names() {
        let mut list = list_with(&["Pizza"]);

        assert_eq!(list.add("So"), Err(ValidationError::TooShort));
        assert_eq!(list.add("  ab  "), Err(ValidationError::TooShort));
        assert_eq!(list.add(""), Err(ValidationError::TooShort));
        assert_eq!(list.add("   "), Err(ValidationError::TooShort));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicates() {
        let mut list = list_with(&["Pizza"]);

        assert_eq!(list.add("pizza"), Err(ValidationError::Duplicate));
        assert_eq!(list.add("  PIZZA "), Err(ValidationError::Duplicate));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_unique_and_never_reused() {
        let mut list = MenuList::new();
        let first = list.add("Pizza").unwrap();
        let second = list.add("Pasta").unwrap();
        assert!(second > first);

        list.remove(second);
        let third = list.add("Salad").unwrap();
        assert!(third > second);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = list_with(&["Pizza", "Pasta", "Salad"]);
        let id = list.items()[1].id;

        list.remove(id);
        assert_eq!(list.len(), 2);
        assert!(list.items().iter().all(|item| item.id != id));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = list_with(&["Pizza"]);
        list.remove(9999);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_filtered_matches_substring_case_insensitively() {
        let list = list_with(&["Pizza", "Pasta", "Garlic Bread"]);

        let hits = list.filtered("pA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Pasta");

        let hits = list.filtered("zz");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Pizza");

        assert_eq!(list.filtered("a").len(), 3);
        assert!(list.filtered("soup").is_empty());
    }

    #[test]
    fn test_empty_query_returns_full_list() {
        let list = list_with(&["Pizza", "Pasta"]);
        assert_eq!(list.filtered(""), list.items());
    }

    #[test]
    fn test_validate_returns_trimmed_name_without_mutating() {
        let list = list_with(&["Pizza"]);
        assert_eq!(list.validate("  Pasta "), Ok("Pasta".to_string()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Item name must be at least 3 characters long"
        );
        assert_eq!(
            ValidationError::Duplicate.to_string(),
            "This item already exists"
        );
    }

    #[test]
    fn test_add_duplicate_then_short_then_delete() {
        let mut list = MenuList::new();
        let pizza = list.add("Pizza").unwrap();
        assert_eq!(list.items()[0].name, "Pizza");

        assert_eq!(list.add("pizza"), Err(ValidationError::Duplicate));
        assert_eq!(list.len(), 1);

        assert_eq!(list.add("So"), Err(ValidationError::TooShort));
        assert_eq!(list.len(), 1);

        list.remove(pizza);
        assert!(list.is_empty());
    }
}
