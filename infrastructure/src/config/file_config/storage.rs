//! Local storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name under the platform data dir
const APP_DIR: &str = "kababhut";

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Where the session token, onboarding flag, and shell history live
    pub data_dir: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Configured directory, else `$XDG_DATA_HOME/kababhut`
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
    }
}
