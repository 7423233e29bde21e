//! "Build your own package" selection flow
//!
//! The customizer holds a free-text guest count and an ordered, id-unique set
//! of selected dishes. Every category is capped by [`CategoryLimits`]; an
//! addition that would exceed the cap is rejected with [`CategoryFull`] and
//! leaves the selection untouched.
//!
//! State is never stored as a flag. It is derived from the data:
//!
//! ```text
//! Empty ──(guests or items)──▶ InProgress ──(guests and items)──▶ Ready
//!   ▲                                                               │
//!   └──────────────────── confirm() + reset() ──────────────────────┘
//! ```

use super::limits::CategoryLimits;
use crate::inquiry::{CUSTOM_PACKAGE_ID, QuoteRequest};
use crate::menu::item::MenuItem;
use serde::Serialize;
use thiserror::Error;

/// Derived lifecycle state of a customizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomizerState {
    /// No guest count, no dishes
    Empty,
    /// Some input, but not yet confirmable
    InProgress,
    /// Guest count set and at least one dish selected
    Ready,
}

/// Result of a successful `add_item` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The dish was already selected; nothing changed
    AlreadySelected,
}

/// The category an item belongs to has no room left
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("You can only pick {limit} items from {label}.")]
pub struct CategoryFull {
    pub category: String,
    pub label: String,
    pub limit: usize,
}

/// Why a selection cannot be confirmed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfirmError {
    #[error("Enter a guest count before confirming")]
    MissingGuestCount,

    #[error("Select at least one item before confirming")]
    NoItemsSelected,
}

/// Per-category counter for picker displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryUsage {
    pub key: String,
    pub label: String,
    pub selected: usize,
    pub limit: usize,
}

impl CategoryUsage {
    pub fn is_full(&self) -> bool {
        self.selected >= self.limit
    }
}

/// The in-progress custom package selection
#[derive(Debug, Clone)]
pub struct PackageCustomizer {
    limits: CategoryLimits,
    guest_count: String,
    selected: Vec<MenuItem>,
}

impl PackageCustomizer {
    pub fn new(limits: CategoryLimits) -> Self {
        Self {
            limits,
            guest_count: String::new(),
            selected: Vec::new(),
        }
    }

    /// Store the guest count as typed; numeric validation happens downstream
    pub fn set_guest_count(&mut self, text: impl Into<String>) {
        self.guest_count = text.into();
    }

    /// Try to add a dish to the selection.
    ///
    /// The category cap is checked first, so an already-selected dish in a
    /// full category reports [`CategoryFull`].
    pub fn add_item(&mut self, item: &MenuItem) -> Result<AddOutcome, CategoryFull> {
        let category = item.category_key();
        let limit = self.limits.limit_for(category);

        if self.selected_in(category) >= limit {
            return Err(CategoryFull {
                category: category.to_string(),
                label: self.limits.label_for(category).to_string(),
                limit,
            });
        }

        if self.is_selected(&item.id) {
            return Ok(AddOutcome::AlreadySelected);
        }

        self.selected.push(item.clone());
        Ok(AddOutcome::Added)
    }

    /// Drop a dish from the selection; unknown ids are ignored
    pub fn remove_item(&mut self, id: &str) {
        self.selected.retain(|i| i.id != id);
    }

    /// Back to the empty state
    pub fn reset(&mut self) {
        self.guest_count.clear();
        self.selected.clear();
    }

    /// Materialize the selection into a quote request.
    ///
    /// The customizer itself is left as-is; callers reset it once the quote
    /// has been handed off.
    pub fn confirm(&self) -> Result<QuoteRequest, ConfirmError> {
        if self.guest_count.trim().is_empty() {
            return Err(ConfirmError::MissingGuestCount);
        }
        if self.selected.is_empty() {
            return Err(ConfirmError::NoItemsSelected);
        }

        let items = self
            .selected
            .iter()
            .map(|i| format!("- {}", i.name))
            .collect::<Vec<_>>()
            .join("\n");
        let message = format!(
            "Custom Package: {} guests\nItems:\n{}",
            self.guest_count, items
        );

        Ok(QuoteRequest {
            headcount: self.guest_count.clone(),
            package_id: CUSTOM_PACKAGE_ID.to_string(),
            message,
            ..QuoteRequest::default()
        })
    }

    pub fn state(&self) -> CustomizerState {
        let has_guests = !self.guest_count.trim().is_empty();
        let has_items = !self.selected.is_empty();
        match (has_guests, has_items) {
            (true, true) => CustomizerState::Ready,
            (false, false) if self.guest_count.is_empty() => CustomizerState::Empty,
            _ => CustomizerState::InProgress,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == CustomizerState::Ready
    }

    pub fn guest_count(&self) -> &str {
        &self.guest_count
    }

    pub fn selected(&self) -> &[MenuItem] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|i| i.id == id)
    }

    /// Number of selected dishes in a category
    pub fn selected_in(&self, category: &str) -> usize {
        self.selected
            .iter()
            .filter(|i| i.category_key() == category)
            .count()
    }

    pub fn is_category_full(&self, category: &str) -> bool {
        self.selected_in(category) >= self.limits.limit_for(category)
    }

    /// Usage of every configured category, in configured order
    pub fn category_usage(&self) -> Vec<CategoryUsage> {
        self.limits
            .entries()
            .iter()
            .map(|entry| CategoryUsage {
                key: entry.key.clone(),
                label: entry.label.clone(),
                selected: self.selected_in(&entry.key),
                limit: entry.limit,
            })
            .collect()
    }

    pub fn limits(&self) -> &CategoryLimits {
        &self.limits
    }
}

impl Default for PackageCustomizer {
    fn default() -> Self {
        Self::new(CategoryLimits::reference())
    }
}
