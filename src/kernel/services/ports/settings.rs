use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::config::EditorConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where the two storage providers live. A provider without a location is
/// treated as absent by feature detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(default = "default_prefer_directory")]
    pub prefer_directory: bool,
}

fn default_prefer_directory() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: None,
            database: None,
            prefer_directory: default_prefer_directory(),
        }
    }
}

impl StorageConfig {
    pub fn is_unset(&self) -> bool {
        self.directory.is_none() && self.database.is_none()
    }
}
