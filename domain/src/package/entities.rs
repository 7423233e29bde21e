//! Catering package entities

use crate::inquiry::CUSTOM_PACKAGE_ID;
use serde::{Deserialize, Serialize};

/// A titled group of dishes inside a preset package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSection {
    pub title: String,
    pub items: Vec<String>,
}

impl PackageSection {
    pub fn new(title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            title: title.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A package offered by the caterer (Entity)
///
/// Preset packages list their sections; the custom package has none and is
/// filled in by the customer through the package customizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CateringPackage {
    pub id: String,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<PackageSection>,
}

impl CateringPackage {
    pub fn preset(
        id: impl Into<String>,
        name: impl Into<String>,
        summary: impl Into<String>,
        sections: Vec<PackageSection>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            summary: summary.into(),
            sections,
        }
    }

    pub fn custom() -> Self {
        Self {
            id: CUSTOM_PACKAGE_ID.to_string(),
            name: "Build Your Own".to_string(),
            summary: "Pick dishes from each category for your guest count.".to_string(),
            sections: Vec::new(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_PACKAGE_ID
    }
}
