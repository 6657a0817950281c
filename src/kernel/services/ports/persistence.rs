use crate::models::{default_forest, Forest, TreeNode};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid stored data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save contract for the working tree.
pub trait ForestStore: Send + Sync {
    fn load(&self) -> Result<Option<Forest>, StoreError>;

    fn save(&self, forest: &[TreeNode]) -> Result<(), StoreError>;

    /// Stored tree, or the default one. Failures are logged, never raised.
    fn load_or_default(&self) -> Forest {
        match self.load() {
            Ok(Some(forest)) if !forest.is_empty() => forest,
            Ok(_) => default_forest(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load stored tree, using default");
                default_forest()
            }
        }
    }

    /// Fire-and-forget save.
    fn save_best_effort(&self, forest: &[TreeNode]) {
        if let Err(e) = self.save(forest) {
            tracing::warn!(error = %e, "failed to persist tree");
        }
    }
}
