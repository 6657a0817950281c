//! Materializes a forest outside the process: real folders on disk or a ZIP
//! archive.

mod archive;
mod fs;

pub use self::archive::{archive_file_name, build_archive, write_archive};
pub use self::fs::export_to_dir;

use crate::kernel::naming::{generate_incremented_name, SuffixStyle};
use crate::kernel::services::ports::{BoxFuture, ExportOutcome, ExportTarget, Exporter};
use crate::models::{names_equal, Forest, TreeNode};

/// Turns a node name into a single safe path component.
pub(crate) fn safe_component(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    match cleaned.trim() {
        "" | "." | ".." => "_".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Path components for one list of siblings. Names that clean up to the same
/// component (`a/b` and `a_b`) get a numbered suffix, first one wins.
pub(crate) fn sibling_components(nodes: &[TreeNode]) -> Vec<String> {
    let mut used: Vec<String> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let base = safe_component(&node.name);
        let component = if used.iter().any(|taken| names_equal(taken, &base)) {
            generate_incremented_name(&base, used.as_slice(), SuffixStyle::Underscore)
        } else {
            base
        };
        used.push(component);
    }
    used
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalExporter;

impl Exporter for LocalExporter {
    fn export(&self, forest: Forest, target: ExportTarget) -> BoxFuture<'_, ExportOutcome> {
        Box::pin(async move {
            match target {
                ExportTarget::Folder(None) => {
                    tracing::info!("export cancelled");
                    ExportOutcome::Aborted
                }
                ExportTarget::Folder(Some(dir)) => {
                    ExportOutcome::from_result(export_to_dir(&forest, &dir).await)
                }
                ExportTarget::Zip(path) => {
                    ExportOutcome::from_result(write_archive(forest, &path).await)
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/export.rs"]
mod tests;
