//! Storefront session
//!
//! One [`StorefrontSession`] owns everything a single customer works on: the
//! menu being browsed, the cart, the package customizer, and the quote
//! drafted from a confirmed package. Menu-facing operations take item ids
//! and resolve them against the loaded menu.

use crate::config::StorefrontConfig;
use crate::use_cases::submit_inquiry::SubmissionReceipt;
use kababhut_domain::{
    AddOutcome, Cart, DomainError, Menu, MenuItem, PackageCustomizer, QuoteRequest,
};

#[derive(Debug, Clone)]
pub struct StorefrontSession {
    menu: Menu,
    cart: Cart,
    customizer: PackageCustomizer,
    draft: Option<QuoteRequest>,
}

impl StorefrontSession {
    pub fn new(menu: Menu, config: &StorefrontConfig) -> Self {
        Self {
            menu,
            cart: Cart::new(),
            customizer: PackageCustomizer::new(config.category_limits.clone()),
            draft: None,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Swap in a freshly loaded menu. Cart lines keep the name and price
    /// they were added with.
    pub fn replace_menu(&mut self, menu: Menu) {
        self.menu = menu;
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn customizer(&self) -> &PackageCustomizer {
        &self.customizer
    }

    fn lookup(&self, id: &str) -> Result<&MenuItem, DomainError> {
        self.menu
            .find(id)
            .ok_or_else(|| DomainError::UnknownMenuItem(id.to_string()))
    }

    // ==================== Cart ====================

    pub fn add_to_cart(&mut self, id: &str, quantity: u32) -> Result<(), DomainError> {
        let item = self.lookup(id)?.clone();
        self.cart.add_item(item, quantity);
        Ok(())
    }

    /// Returns whether the dish is in the cart afterwards
    pub fn toggle_in_cart(&mut self, id: &str) -> Result<bool, DomainError> {
        let item = self.lookup(id)?.clone();
        Ok(self.cart.toggle_item(item))
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.remove_item(id);
    }

    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        self.cart.update_quantity(id, quantity);
    }

    // ==================== Package ====================

    pub fn set_guest_count(&mut self, text: impl Into<String>) {
        self.customizer.set_guest_count(text);
    }

    pub fn pick(&mut self, id: &str) -> Result<AddOutcome, DomainError> {
        let item = self.lookup(id)?.clone();
        Ok(self.customizer.add_item(&item)?)
    }

    pub fn unpick(&mut self, id: &str) {
        self.customizer.remove_item(id);
    }

    pub fn reset_package(&mut self) {
        self.customizer.reset();
    }

    /// Confirm the package selection, reset the customizer, and keep the
    /// resulting quote as the current draft.
    ///
    /// Returns the unsent draft this one replaced, if any. On rejection the
    /// selection and any existing draft are left untouched.
    pub fn confirm_package(&mut self) -> Result<Option<QuoteRequest>, DomainError> {
        let quote = self.customizer.confirm()?;
        self.customizer.reset();
        Ok(self.draft.replace(quote))
    }

    pub fn draft(&self) -> Option<&QuoteRequest> {
        self.draft.as_ref()
    }

    pub fn clear_draft(&mut self) {
        self.draft = None;
    }

    /// Record the outcome of submitting the draft. Only a confirmed delivery
    /// drops it; an unconfirmed receipt keeps it for another attempt.
    ///
    /// Returns whether the draft was dropped.
    pub fn complete_submission(&mut self, receipt: &SubmissionReceipt) -> bool {
        if receipt.is_delivered() {
            self.draft = None;
            true
        } else {
            false
        }
    }
}
