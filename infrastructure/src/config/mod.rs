//! Configuration file loading for kababhut
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KABABHUT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./kababhut.toml` or `./.kababhut.toml`
//! 4. Global: `$XDG_CONFIG_HOME/kababhut/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, FileApiConfig, FileCategoryConfig, FileConfig, FileInquiryConfig,
    FileOutputConfig, FilePackageConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
