//! API configuration from TOML (`[api]` section)

use kababhut_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Root of the storefront REST API
    pub base_url: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "api.base_url".to_string(),
                },
                "api.base_url cannot be empty",
            ));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "api.timeout_seconds".to_string(),
                },
                "api.timeout_seconds cannot be 0",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_invalid_values() {
        let config = FileApiConfig {
            base_url: " ".to_string(),
            timeout_seconds: 0,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
    }
}
