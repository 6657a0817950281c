//! JSON file persistence for the working tree.

use crate::kernel::services::ports::{ForestStore, StoreError};
use crate::models::{Forest, TreeNode};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct JsonForestStore {
    path: PathBuf,
}

impl JsonForestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ForestStore for JsonForestStore {
    fn load(&self) -> Result<Option<Forest>, StoreError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let forest: Forest = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), roots = forest.len(), "loaded tree");
        Ok(Some(forest))
    }

    fn save(&self, forest: &[TreeNode]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(forest)?;
        // Write beside the target, then swap it in.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/forest_store.rs"]
mod tests;
