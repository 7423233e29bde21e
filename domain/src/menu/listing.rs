//! Menu listing with category browsing

use super::item::MenuItem;
use serde::{Deserialize, Serialize};

/// Pseudo-category that matches every dish
pub const ALL_CATEGORIES: &str = "all";

/// An ordered menu listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Distinct category keys in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            let key = item.category_key();
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }

    /// Items in a category; `"all"` returns the whole menu
    pub fn in_category<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items
            .iter()
            .filter(move |i| key == ALL_CATEGORIES || i.category_key() == key)
    }
}

impl From<Vec<MenuItem>> for Menu {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::new(items)
    }
}
