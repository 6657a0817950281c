use super::{safe_component, sibling_components};
use crate::kernel::services::ports::ExportError;
use crate::models::{Forest, NodeKind, TreeNode, DEFAULT_ROOT_NAME};
use chrono::{Local, NaiveDate};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
}

/// `<root>-<YYYY-MM-DD>.zip`
pub fn archive_file_name(forest: &[TreeNode], date: NaiveDate) -> String {
    let root = forest
        .first()
        .map(|node| safe_component(&node.name))
        .unwrap_or_else(|| DEFAULT_ROOT_NAME.to_string());
    format!("{root}-{}.zip", date.format("%Y-%m-%d"))
}

/// Builds the archive in memory: one directory entry per folder and an
/// empty entry per file, rooted at the top-level folders.
pub fn build_archive(forest: &[TreeNode]) -> Result<Vec<u8>, ExportError> {
    if forest.is_empty() {
        return Err(ExportError::EmptyForest);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut stack: Vec<(String, &TreeNode)> = forest
        .iter()
        .zip(sibling_components(forest))
        .rev()
        .map(|(node, component)| (component, node))
        .collect();

    while let Some((path, node)) = stack.pop() {
        match node.kind {
            NodeKind::Folder => {
                writer.add_directory(format!("{path}/"), entry_options())?;
                let children = node.children();
                for (child, component) in children.iter().zip(sibling_components(children)).rev() {
                    stack.push((format!("{path}/{component}"), child));
                }
            }
            NodeKind::File => writer.start_file(path, entry_options())?,
        }
    }

    Ok(writer.finish()?.into_inner())
}

/// Builds the archive off the async workers and writes it. When `target` is
/// an existing directory the archive gets its dated default name inside it.
pub async fn write_archive(forest: Forest, target: &Path) -> Result<PathBuf, ExportError> {
    let path = if tokio::fs::metadata(target)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
    {
        target.join(archive_file_name(&forest, Local::now().date_naive()))
    } else {
        target.to_path_buf()
    };

    let bytes = tokio::task::spawn_blocking(move || build_archive(&forest))
        .await
        .map_err(|e| ExportError::Io {
            path: path.clone(),
            source: std::io::Error::other(e),
        })??;

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "exported archive");
    Ok(path)
}
