use crate::models::FolderPreset;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Category name -> presets in that category.
pub type PresetCategories = BTreeMap<String, Vec<FolderPreset>>;

pub const GENERAL_CATEGORY: &str = "General";

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid preset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid preset structure for key: {key}")]
    Invalid { key: String },
    #[error("no temporary presets to export")]
    Empty,
}

pub trait PresetCatalog {
    fn list_presets(&self) -> PresetCategories;

    fn load_preset(&self, key: &str) -> Option<FolderPreset>;
}
