//! 目录树数据模型
//!
//! 整个状态是一个有序的根节点列表（Forest）。节点按值拥有其子节点，
//! 没有父指针；所有结构修改都返回新的 Forest。

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the distinguished single-root folder.
pub const ROOT_ID: &str = "root";

/// Name given to the distinguished root when nothing else is known.
pub const DEFAULT_ROOT_NAME: &str = "root";

pub type Forest = Vec<TreeNode>;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// A fresh id that has never been handed out before.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Folder => "folder",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file or folder. `children` is `Some` exactly when the node is a folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// UI state only; never part of a history snapshot.
    #[serde(default)]
    pub expanded: bool,
}

impl TreeNode {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::with_id(NodeId::generate(), kind, name)
    }

    pub fn with_id(id: NodeId, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            children: match kind {
                NodeKind::Folder => Some(Vec::new()),
                NodeKind::File => None,
            },
            expanded: false,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(NodeKind::File, name)
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Folder, name)
    }

    /// The distinguished root folder, expanded.
    pub fn root(name: impl Into<String>) -> Self {
        let mut node = Self::with_id(NodeId::root(), NodeKind::Folder, name);
        node.expanded = true;
        node
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        if self.kind == NodeKind::Folder {
            self.children = Some(children);
        }
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn name_matches(&self, other: &str) -> bool {
        names_equal(&self.name, other)
    }
}

/// Sibling names are compared case-insensitively.
pub fn names_equal(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

pub fn default_forest() -> Forest {
    default_forest_named(DEFAULT_ROOT_NAME)
}

pub fn default_forest_named(root_name: &str) -> Forest {
    vec![TreeNode::root(root_name)]
}

/// Copy of `forest` with every `expanded` flag cleared.
pub fn strip_expansion(forest: &[TreeNode]) -> Forest {
    forest
        .iter()
        .map(|node| TreeNode {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind,
            children: node.children.as_deref().map(strip_expansion),
            expanded: false,
        })
        .collect()
}

/// Equality that ignores `expanded`.
pub fn structurally_equal(a: &[TreeNode], b: &[TreeNode]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.id == y.id
                && x.name == y.name
                && x.kind == y.kind
                && x.children.is_some() == y.children.is_some()
                && structurally_equal(x.children(), y.children())
        })
}

/// Depth-first map of folder id to its `expanded` flag.
pub fn expansion_map(forest: &[TreeNode]) -> FxHashMap<NodeId, bool> {
    let mut map = FxHashMap::default();
    let mut stack: Vec<&TreeNode> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        if node.is_folder() {
            map.insert(node.id.clone(), node.expanded);
        }
        stack.extend(node.children());
    }
    map
}

/// Re-applies expansion flags captured from a live tree onto a snapshot.
///
/// Folders unknown to `map` start collapsed, except the distinguished root.
pub fn restore_expansion(snapshot: &[TreeNode], map: &FxHashMap<NodeId, bool>) -> Forest {
    snapshot
        .iter()
        .map(|node| TreeNode {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind,
            children: node
                .children
                .as_deref()
                .map(|children| restore_expansion(children, map)),
            expanded: node.is_folder()
                && map
                    .get(&node.id)
                    .copied()
                    .unwrap_or_else(|| node.id.is_root()),
        })
        .collect()
}

pub fn count_nodes(forest: &[TreeNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + count_nodes(node.children()))
        .sum()
}

/// Replaces any id seen more than once with a fresh one. Returns how many
/// ids were reassigned.
pub fn repair_duplicate_ids(forest: &mut [TreeNode]) -> usize {
    fn walk(items: &mut [TreeNode], seen: &mut FxHashSet<NodeId>, fixed: &mut usize) {
        for item in items {
            if !seen.insert(item.id.clone()) {
                item.id = NodeId::generate();
                seen.insert(item.id.clone());
                *fixed += 1;
            }
            if let Some(children) = item.children.as_mut() {
                walk(children, seen, fixed);
            }
        }
    }

    let mut seen = FxHashSet::default();
    let mut fixed = 0;
    walk(forest, &mut seen, &mut fixed);
    fixed
}

#[cfg(test)]
#[path = "../../tests/unit/models/tree_node.rs"]
mod tests;
