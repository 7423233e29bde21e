//! Shopping cart
//!
//! The [`Cart`] is the authoritative cart state for one storefront session.
//! It holds at most one [`CartLine`] per menu item id, and a line never sits
//! at quantity zero: any operation that would drop it to zero removes it.
//!
//! Operations on ids that are not in the cart are silent no-ops.
//!
//! # Example
//!
//! ```
//! use kababhut_domain::cart::Cart;
//! use kababhut_domain::MenuItem;
//!
//! let biryani = MenuItem::new("m1", "Chicken Biryani").with_price(13.5);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&biryani, 2);
//! assert_eq!(cart.total(), 27.0);
//!
//! cart.add_item(&biryani, 1);
//! assert_eq!(cart.quantity_of("m1"), Some(3));
//! assert_eq!(cart.total(), 40.5);
//!
//! cart.remove_item("m1");
//! assert!(cart.is_empty());
//! ```

use crate::menu::item::MenuItem;
use crate::menu::price::Price;
use serde::{Deserialize, Serialize};

/// The menu-item fields a cart needs when adding (Value Object)
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: Option<Price>,
    pub image: Option<String>,
}

impl CartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Option<Price>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
        }
    }
}

impl From<&MenuItem> for CartItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
        }
    }
}

impl From<MenuItem> for CartItem {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            image: item.image,
        }
    }
}

/// One entry in the cart (Entity)
///
/// The price is captured when the item is first added and is not refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity, with an unpriced line contributing 0
    pub fn subtotal(&self) -> f64 {
        self.price.map(|p| p.amount()).unwrap_or(0.0) * f64::from(self.quantity)
    }
}

/// Shopping cart state (Aggregate)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an item.
    ///
    /// An existing line is incremented (no upper bound); otherwise a new line
    /// is appended. A zero quantity changes nothing.
    pub fn add_item(&mut self, item: impl Into<CartItem>, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let item = item.into();

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine {
            id: item.id,
            name: item.name,
            price: item.price,
            image: item.image,
            quantity,
        });
    }

    /// Remove the line for `id`, if any
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Set the quantity of an existing line.
    ///
    /// Values at or below zero remove the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        let Some(pos) = self.lines.iter().position(|l| l.id == id) else {
            return;
        };

        if quantity <= 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove the item if present, otherwise add one. Returns whether the
    /// item is in the cart afterwards.
    pub fn toggle_item(&mut self, item: impl Into<CartItem>) -> bool {
        let item = item.into();
        if self.contains(&item.id) {
            self.remove_item(&item.id);
            false
        } else {
            self.add_item(item, 1);
            true
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines; unpriced lines contribute 0
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.line(id).map(|l| l.quantity)
    }

    pub fn line_total(&self, id: &str) -> Option<f64> {
        self.line(id).map(CartLine::subtotal)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.line(id).is_some()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biryani() -> MenuItem {
        MenuItem::new("m1", "Chicken Biryani").with_price(13.5)
    }

    fn samosa() -> MenuItem {
        MenuItem::new("m13", "Samosa").with_category("appetizers")
    }

    fn assert_unique_ids(cart: &Cart) {
        let mut ids: Vec<_> = cart.lines().iter().map(|l| l.id.clone()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before, "duplicate cart lines: {:?}", cart.lines());
    }

    #[test]
    fn test_reference_scenario() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("m1"), Some(2));
        assert_eq!(cart.total(), 27.0);

        cart.add_item(&biryani(), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("m1"), Some(3));
        assert_eq!(cart.total(), 40.5);

        cart.remove_item("m1");
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 0);
        assert!(cart.is_empty());

        cart.add_item(&biryani(), 1);
        cart.add_item(&biryani(), 0);
        assert_eq!(cart.quantity_of("m1"), Some(1));
    }

    #[test]
    fn test_unpriced_item_contributes_zero() {
        let mut cart = Cart::new();
        cart.add_item(&samosa(), 40);
        assert_eq!(cart.total(), 0.0);

        cart.add_item(&biryani(), 1);
        assert_eq!(cart.total(), 13.5);
    }

    #[test]
    fn test_price_captured_at_add_time() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 1);
        // A later add with a different price does not rewrite the line
        cart.add_item(&MenuItem::new("m1", "Chicken Biryani").with_price(99.0), 1);
        assert_eq!(cart.total(), 27.0);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 1);
        cart.update_quantity("m1", 4);
        assert_eq!(cart.quantity_of("m1"), Some(4));
        assert_eq!(cart.total(), 54.0);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 3);
        cart.update_quantity("m1", 0);
        assert!(!cart.contains("m1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 3);
        cart.add_item(&samosa(), 1);
        cart.update_quantity("m1", -5);
        assert!(!cart.contains("m1"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 2);
        let before = cart.clone();

        cart.remove_item("nope");
        cart.update_quantity("nope", 7);
        cart.update_quantity("nope", -1);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_always_empties() {
        let mut cart = Cart::new();
        cart.clear();
        assert!(cart.is_empty());

        cart.add_item(&biryani(), 2);
        cart.add_item(&samosa(), 5);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_toggle_item() {
        let mut cart = Cart::new();
        assert!(cart.toggle_item(&samosa()));
        assert_eq!(cart.quantity_of("m13"), Some(1));
        assert!(!cart.toggle_item(&samosa()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&samosa(), 1);
        cart.add_item(&biryani(), 1);
        cart.add_item(&samosa(), 1);
        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["m13", "m1"]);
    }

    #[test]
    fn test_ids_stay_unique_across_mixed_operations() {
        let mut cart = Cart::new();
        let items = [biryani(), samosa(), MenuItem::new("m5", "Tandoori Chicken")];

        for step in 0..60i64 {
            let item = &items[(step % 3) as usize];
            match step % 5 {
                0 | 1 => cart.add_item(item, (step % 4) as u32),
                2 => cart.update_quantity(&item.id, step % 7 - 3),
                3 => {
                    cart.toggle_item(item);
                }
                _ => cart.remove_item(&item.id),
            }
            assert_unique_ids(&cart);
            assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        }
    }

    #[test]
    fn test_total_matches_line_sum() {
        let mut cart = Cart::new();
        cart.add_item(&biryani(), 3);
        cart.add_item(CartItem::new("m2", "Beef Karhai", Price::new(15.25)), 2);
        cart.add_item(&samosa(), 10);

        let expected: f64 = cart
            .lines()
            .iter()
            .map(|l| l.price.map(|p| p.amount()).unwrap_or(0.0) * l.quantity as f64)
            .sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.line_total("m2"), Some(30.5));
        assert_eq!(cart.item_count(), 15);
    }
}
