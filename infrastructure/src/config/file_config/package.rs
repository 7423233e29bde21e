//! Package customizer configuration from TOML (`[package]` section)
//!
//! ```toml
//! [package]
//! default_limit = 5
//!
//! [[package.categories]]
//! key = "biryani"
//! label = "Biryani"
//! limit = 2
//! ```

use kababhut_domain::{
    CategoryLimit, CategoryLimits, ConfigIssue, ConfigIssueCode, DEFAULT_CATEGORY_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One `[[package.categories]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCategoryConfig {
    pub key: String,
    /// Display label; defaults to the key
    #[serde(default)]
    pub label: Option<String>,
    pub limit: usize,
}

/// Raw package configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePackageConfig {
    /// Cap for categories not listed below
    pub default_limit: usize,
    pub categories: Vec<FileCategoryConfig>,
}

impl Default for FilePackageConfig {
    fn default() -> Self {
        let reference = CategoryLimits::reference();
        Self {
            default_limit: DEFAULT_CATEGORY_LIMIT,
            categories: reference
                .entries()
                .iter()
                .map(|c| FileCategoryConfig {
                    key: c.key.clone(),
                    label: Some(c.label.clone()),
                    limit: c.limit,
                })
                .collect(),
        }
    }
}

impl FilePackageConfig {
    /// Convert to domain limits. Duplicate keys keep their first entry.
    pub fn to_category_limits(&self) -> CategoryLimits {
        let entries = self
            .categories
            .iter()
            .map(|c| {
                let label = c.label.clone().unwrap_or_else(|| c.key.clone());
                CategoryLimit::new(c.key.trim(), label, c.limit)
            })
            .collect();
        CategoryLimits::new(entries, self.default_limit)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.default_limit == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroValue {
                    field: "package.default_limit".to_string(),
                },
                "package.default_limit is 0: dishes from unlisted categories cannot be picked",
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let key = category.key.trim();
            if key.is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: "package.categories.key".to_string(),
                    },
                    "package category key cannot be empty",
                ));
                continue;
            }
            if !seen.insert(key) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateCategory {
                        key: key.to_string(),
                    },
                    format!("package category '{}' is listed more than once", key),
                ));
            }
            if category.limit == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ZeroValue {
                        field: format!("package.categories.{}.limit", key),
                    },
                    format!("package category '{}' has limit 0: nothing can be picked", key),
                ));
            }
        }

        issues
    }
}
