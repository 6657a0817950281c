//! Read-only views over a forest: the text outline and the flattened row list
//! a host renders.

use crate::models::{NodeId, TreeNode, DEFAULT_ROOT_NAME};

const FOLDER_ICON: &str = "📁";
const FILE_ICON: &str = "📄";

/// Lazily yields the outline one line at a time. Each top-level folder gets
/// a header line followed by its descendants drawn with box connectors.
pub struct OutlineLines<'a> {
    roots: std::slice::Iter<'a, TreeNode>,
    stack: Vec<Level<'a>>,
    emitted_header: bool,
}

struct Level<'a> {
    items: &'a [TreeNode],
    next: usize,
    prefix: String,
}

impl<'a> OutlineLines<'a> {
    pub fn new(forest: &'a [TreeNode]) -> Self {
        Self {
            roots: forest.iter(),
            stack: Vec::new(),
            emitted_header: false,
        }
    }
}

impl Iterator for OutlineLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let Some(level) = self.stack.last_mut() else {
                let Some(root) = self.roots.next() else {
                    if self.emitted_header {
                        return None;
                    }
                    self.emitted_header = true;
                    return Some(format!("{FOLDER_ICON} {DEFAULT_ROOT_NAME}"));
                };
                self.emitted_header = true;
                self.stack.push(Level {
                    items: root.children(),
                    next: 0,
                    prefix: String::new(),
                });
                let icon = if root.is_folder() { FOLDER_ICON } else { FILE_ICON };
                return Some(format!("{icon} {}", root.name));
            };

            let Some(item) = level.items.get(level.next) else {
                self.stack.pop();
                continue;
            };
            level.next += 1;

            let is_last = level.next == level.items.len();
            let connector = if is_last { "└─" } else { "├─" };
            let icon = if item.is_folder() { FOLDER_ICON } else { FILE_ICON };
            let line = format!("{}{connector} {icon} {}", level.prefix, item.name);

            if !item.children().is_empty() {
                let prefix = format!("{}{}", level.prefix, if is_last { "    " } else { "│   " });
                self.stack.push(Level {
                    items: item.children(),
                    next: 0,
                    prefix,
                });
            }
            return Some(line);
        }
    }
}

pub fn outline_lines(forest: &[TreeNode]) -> OutlineLines<'_> {
    OutlineLines::new(forest)
}

/// The whole outline, newline-terminated.
pub fn generate_outline(forest: &[TreeNode]) -> String {
    let mut out = String::new();
    for line in outline_lines(forest) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: String,
    pub is_folder: bool,
    pub is_expanded: bool,
    pub has_children: bool,
}

/// Rows in display order, descending only into expanded folders.
pub fn visible_rows(forest: &[TreeNode]) -> Vec<TreeRow> {
    let mut result = Vec::new();
    let mut stack: Vec<(&TreeNode, u16)> = forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        result.push(TreeRow {
            id: node.id.clone(),
            depth,
            name: node.name.clone(),
            is_folder: node.is_folder(),
            is_expanded: node.expanded,
            has_children: !node.children().is_empty(),
        });

        if node.is_folder() && node.expanded {
            for child in node.children().iter().rev() {
                stack.push((child, depth.saturating_add(1)));
            }
        }
    }

    result
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/outline.rs"]
mod tests;
