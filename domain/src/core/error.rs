//! Domain error types

use crate::package::{CategoryFull, ConfirmError};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No menu item with id '{0}'")]
    UnknownMenuItem(String),

    #[error("Category full: {0}")]
    CategoryFull(#[from] CategoryFull),

    #[error("Nothing to confirm: {0}")]
    NothingToConfirm(#[from] ConfirmError),
}

impl DomainError {
    /// Check if this error is a user-input rejection that leaves state unchanged
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::CategoryFull(_) | DomainError::NothingToConfirm(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_item_display() {
        let error = DomainError::UnknownMenuItem("m42".to_string());
        assert_eq!(error.to_string(), "No menu item with id 'm42'");
    }

    #[test]
    fn test_category_full_display() {
        let error: DomainError = CategoryFull {
            category: "biryani".into(),
            label: "Biryani".into(),
            limit: 2,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Category full: You can only pick 2 items from Biryani."
        );
    }

    #[test]
    fn test_is_rejection_check() {
        assert!(DomainError::from(ConfirmError::NoItemsSelected).is_rejection());
        assert!(!DomainError::UnknownMenuItem("x".into()).is_rejection());
    }
}
