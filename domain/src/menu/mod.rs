//! Menu subdomain
//!
//! - [`item::MenuItem`] — a dish as served by the menu source
//! - [`price::Price`] — normalized unit price
//! - [`listing::Menu`] — ordered listing with category browsing

pub mod item;
pub mod listing;
pub mod price;
