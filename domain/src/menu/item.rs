//! Menu item entity

use super::price::{self, Price};
use serde::{Deserialize, Deserializer, Serialize};

/// Category key used when a dish has no category
pub const UNCATEGORIZED: &str = "uncategorized";

/// A dish on the catering menu (Entity)
///
/// Provided by the menu source and never mutated by the cart or the
/// package customizer. Field names follow the REST wire shape, so `desc`
/// is accepted as an alias for `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default, deserialize_with = "price::deserialize_lenient")]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "non_empty")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub image: Option<String>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price: None,
            category: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the price; non-finite or negative amounts leave the item unpriced
    pub fn with_price(mut self, amount: f64) -> Self {
        self.price = Price::new(amount);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Resolved category key (`"uncategorized"` when absent)
    pub fn category_key(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Whether the price has to be requested from the caterer
    pub fn is_contact_for_pricing(&self) -> bool {
        self.price.is_none()
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
