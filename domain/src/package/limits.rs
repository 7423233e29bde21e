//! Per-category selection limits for custom packages

use serde::{Deserialize, Serialize};

/// Limit applied to categories that are not explicitly configured
pub const DEFAULT_CATEGORY_LIMIT: usize = 5;

/// How many dishes a customer may pick from one category (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimit {
    pub key: String,
    pub label: String,
    pub limit: usize,
}

impl CategoryLimit {
    pub fn new(key: impl Into<String>, label: impl Into<String>, limit: usize) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            limit,
        }
    }
}

/// Fixed category limit table
///
/// Entries keep their configured order, which is also the display order of
/// the package picker. Unknown categories fall back to `default_limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimits {
    entries: Vec<CategoryLimit>,
    default_limit: usize,
}

impl CategoryLimits {
    /// Build a table; later entries with a repeated key are ignored
    pub fn new(entries: Vec<CategoryLimit>, default_limit: usize) -> Self {
        let mut unique: Vec<CategoryLimit> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|e| e.key == entry.key) {
                unique.push(entry);
            }
        }
        Self {
            entries: unique,
            default_limit,
        }
    }

    /// The caterer's standard table
    pub fn reference() -> Self {
        Self::new(
            vec![
                CategoryLimit::new("appetizers", "Appetizers", 3),
                CategoryLimit::new("curries", "Curries / Main Course", 5),
                CategoryLimit::new("biryani", "Biryani", 2),
                CategoryLimit::new("grilled", "Grilled / Tandoori", 3),
                CategoryLimit::new("vegetarian", "Vegetarian", 2),
                CategoryLimit::new("desserts", "Desserts", 2),
            ],
            DEFAULT_CATEGORY_LIMIT,
        )
    }

    pub fn get(&self, key: &str) -> Option<&CategoryLimit> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Maximum selectable count for a category
    pub fn limit_for(&self, key: &str) -> usize {
        self.get(key).map(|e| e.limit).unwrap_or(self.default_limit)
    }

    /// Display label for a category, falling back to its key
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map(|e| e.label.as_str()).unwrap_or(key)
    }

    pub fn entries(&self) -> &[CategoryLimit] {
        &self.entries
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }
}

impl Default for CategoryLimits {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table() {
        let limits = CategoryLimits::reference();
        assert_eq!(limits.limit_for("appetizers"), 3);
        assert_eq!(limits.limit_for("curries"), 5);
        assert_eq!(limits.limit_for("biryani"), 2);
        assert_eq!(limits.limit_for("grilled"), 3);
        assert_eq!(limits.limit_for("vegetarian"), 2);
        assert_eq!(limits.limit_for("desserts"), 2);
        assert_eq!(limits.entries().len(), 6);
    }

    #[test]
    fn test_unknown_category_uses_default() {
        let limits = CategoryLimits::reference();
        assert_eq!(limits.limit_for("uncategorized"), DEFAULT_CATEGORY_LIMIT);
        assert_eq!(limits.limit_for("drinks"), 5);
        assert_eq!(limits.label_for("drinks"), "drinks");
    }

    #[test]
    fn test_custom_default() {
        let limits = CategoryLimits::new(vec![CategoryLimit::new("a", "A", 1)], 9);
        assert_eq!(limits.limit_for("a"), 1);
        assert_eq!(limits.limit_for("b"), 9);
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        let limits = CategoryLimits::new(
            vec![CategoryLimit::new("a", "First", 1), CategoryLimit::new("a", "Second", 4)],
            5,
        );
        assert_eq!(limits.entries().len(), 1);
        assert_eq!(limits.label_for("a"), "First");
        assert_eq!(limits.limit_for("a"), 1);
    }
}
