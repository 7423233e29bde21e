//! Price value object
//!
//! The menu API is loose about prices: a dish may carry a number, a numeric
//! string, an empty string, or nothing at all. All of that is normalized here,
//! once, when menu data is ingested. Everything downstream sees
//! `Option<Price>` where `None` means "contact for pricing".

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A finite, non-negative unit price (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a price, returning None for NaN, infinities, or negative amounts
    pub fn new(amount: f64) -> Option<Self> {
        if amount.is_finite() && amount >= 0.0 {
            Some(Self(amount))
        } else {
            None
        }
    }

    /// Parse a textual price such as `"13.5"` or `" 12 "`
    ///
    /// Empty or non-numeric text yields None.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().and_then(Self::new)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Wire representation accepted from the menu API
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Lenient deserializer for optional prices.
///
/// Never fails on odd values: anything that is not a usable number maps to None.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPrice::Number(n)) => Price::new(n),
        Some(RawPrice::Text(s)) => Price::parse(&s),
        Some(RawPrice::Other(_)) | None => None,
    })
}
