//! Checkout use case
//!
//! Checkout requires a signed-in user. A completed checkout returns the
//! purchased lines and clears the cart.

use crate::ports::token_store::{TokenStore, TokenStoreError};
use kababhut_domain::{Cart, CartLine};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

/// What was purchased
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReceipt {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// No session token; the cart is untouched
    LoginRequired,
    EmptyCart,
    Completed(CheckoutReceipt),
}

pub struct CheckoutUseCase<T: TokenStore + ?Sized> {
    tokens: Arc<T>,
}

impl<T: TokenStore + ?Sized> CheckoutUseCase<T> {
    pub fn new(tokens: Arc<T>) -> Self {
        Self { tokens }
    }

    pub fn execute(&self, cart: &mut Cart) -> Result<CheckoutOutcome, CheckoutError> {
        if self.tokens.get_token()?.is_none() {
            return Ok(CheckoutOutcome::LoginRequired);
        }
        if cart.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let receipt = CheckoutReceipt {
            lines: cart.lines().to_vec(),
            total: cart.total(),
        };
        cart.clear();

        info!(
            "Checked out {} lines, total {:.2}",
            receipt.lines.len(),
            receipt.total
        );
        Ok(CheckoutOutcome::Completed(receipt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::token_store::InMemoryTokenStore;
    use kababhut_domain::{AuthToken, MenuItem};

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&MenuItem::new("a", "Samosa").with_price(4.5), 2);
        cart.add_item(&MenuItem::new("b", "Kheer"), 1);
        cart
    }

    #[test]
    fn test_login_required_leaves_cart() {
        let use_case = CheckoutUseCase::new(Arc::new(InMemoryTokenStore::new()));
        let mut cart = cart();

        let outcome = use_case.execute(&mut cart).unwrap();
        assert_eq!(outcome, CheckoutOutcome::LoginRequired);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_empty_cart() {
        let tokens = InMemoryTokenStore::with_token(AuthToken::new("t").unwrap());
        let use_case = CheckoutUseCase::new(Arc::new(tokens));

        let outcome = use_case.execute(&mut Cart::new()).unwrap();
        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
    }

    #[test]
    fn test_completed_clears_cart() {
        let tokens = InMemoryTokenStore::with_token(AuthToken::new("t").unwrap());
        let use_case = CheckoutUseCase::new(Arc::new(tokens));
        let mut cart = cart();

        match use_case.execute(&mut cart).unwrap() {
            CheckoutOutcome::Completed(receipt) => {
                assert_eq!(receipt.lines.len(), 2);
                assert_eq!(receipt.total, 9.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(cart.is_empty());
    }
}
