use super::sibling_components;
use crate::kernel::services::ports::ExportError;
use crate::models::{NodeKind, TreeNode};
use std::path::{Path, PathBuf};

/// Creates every folder and an empty file for every file under `target`.
/// Existing files are left as they are. Returns the created root folder
/// (or `target` itself for several roots).
pub async fn export_to_dir(forest: &[TreeNode], target: &Path) -> Result<PathBuf, ExportError> {
    let roots = sibling_components(forest);
    let location = match roots.as_slice() {
        [] => return Err(ExportError::EmptyForest),
        [single] => target.join(single),
        _ => target.to_path_buf(),
    };

    let mut stack: Vec<(PathBuf, &TreeNode)> = forest
        .iter()
        .zip(roots)
        .rev()
        .map(|(node, component)| (target.join(component), node))
        .collect();
    let mut written = 0usize;

    while let Some((path, node)) = stack.pop() {
        match node.kind {
            NodeKind::Folder => {
                tokio::fs::create_dir_all(&path)
                    .await
                    .map_err(|source| io_error(&path, source))?;
                let children = node.children();
                for (child, component) in children.iter().zip(sibling_components(children)).rev() {
                    stack.push((path.join(component), child));
                }
            }
            NodeKind::File => {
                tokio::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .await
                    .map_err(|source| io_error(&path, source))?;
            }
        }
        written += 1;
    }

    tracing::info!(location = %location.display(), entries = written, "exported to disk");
    Ok(location)
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}
