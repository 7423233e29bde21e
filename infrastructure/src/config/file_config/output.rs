//! Output configuration from TOML (`[output]` section)

use kababhut_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: OutputFormat,
    /// Colored terminal output; `NO_COLOR` in the environment wins
    pub color: bool,
}

impl FileOutputConfig {
    pub fn use_color(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").is_none()
    }
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}
