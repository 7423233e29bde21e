//! Types shared across use cases.

use serde::Serialize;

/// Where a piece of data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Served by the storefront API
    Remote,
    /// Served from the built-in catalog because the API was unavailable
    Fallback,
}

impl DataOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataOrigin::Fallback)
    }
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataOrigin::Remote => write!(f, "remote"),
            DataOrigin::Fallback => write!(f, "built-in"),
        }
    }
}
