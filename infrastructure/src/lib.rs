//! Infrastructure layer for kababhut
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod api;
pub mod catalog;
pub mod config;
pub mod storage;

// Re-export commonly used types
pub use api::{
    ApiClient, ApiError, HttpAuthGateway, HttpInquiryGateway, HttpMenuSource, HttpStatsSource,
};
pub use catalog::StaticCatalog;
pub use config::{
    ConfigLoader, DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileInquiryConfig,
    FileOutputConfig, FilePackageConfig, FileStorageConfig,
};
pub use storage::{FileOnboardingStore, FileTokenStore};
