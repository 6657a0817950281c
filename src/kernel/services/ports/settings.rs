use super::config::BuilderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub builder: BuilderConfig,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Where the working tree is persisted. Defaults to the app data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forest_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presets_file: Option<PathBuf>,
}
