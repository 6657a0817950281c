use super::runtime::BoxFuture;
use crate::models::Forest;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Write real folders under a directory; `None` means the user cancelled
    /// the directory picker.
    Folder(Option<PathBuf>),
    /// Build an archive and write it to this file.
    Zip(PathBuf),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("nothing to export")]
    EmptyForest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Completed { location: PathBuf },
    /// The user backed out. Not an error.
    Aborted,
    Failed(String),
}

impl ExportOutcome {
    pub fn from_result(result: Result<PathBuf, ExportError>) -> Self {
        match result {
            Ok(location) => ExportOutcome::Completed { location },
            Err(e) => ExportOutcome::Failed(e.to_string()),
        }
    }
}

/// Materializes a forest somewhere outside the process. The forest is owned
/// by the job, so edits made after the call never leak into it.
pub trait Exporter: Send + Sync {
    fn export(&self, forest: Forest, target: ExportTarget) -> BoxFuture<'_, ExportOutcome>;
}

/// Completion report for an export job, delivered over the kernel bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMessage {
    pub job: u64,
    pub outcome: ExportOutcome,
}
