//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod inquiry;
mod output;
mod package;
mod storage;

pub use api::{DEFAULT_BASE_URL, FileApiConfig};
pub use inquiry::FileInquiryConfig;
pub use output::FileOutputConfig;
pub use package::{FileCategoryConfig, FilePackageConfig};
pub use storage::FileStorageConfig;

use kababhut_application::StorefrontConfig;
use kababhut_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Storefront REST API
    pub api: FileApiConfig,
    /// Package customizer limits
    pub package: FilePackageConfig,
    /// Inquiry submission
    pub inquiry: FileInquiryConfig,
    /// Local storage
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.api.validate());
        issues.extend(self.package.validate());
        issues
    }

    /// Application-level settings derived from this file
    pub fn storefront_config(&self) -> StorefrontConfig {
        StorefrontConfig::default()
            .with_category_limits(self.package.to_category_limits())
            .with_submission_policy(self.inquiry.submission_policy())
    }
}
