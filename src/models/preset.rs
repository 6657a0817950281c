//! 预设结构：不带 id 的节点列表

use super::tree_node::{NodeKind, TreeNode};
use serde::{Deserialize, Serialize};

/// A node as it appears in a preset: name, kind and optional children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PresetNode>>,
}

impl PresetNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: None,
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<PresetNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children: Some(children),
        }
    }

    pub fn children(&self) -> &[PresetNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    fn from_node(node: &TreeNode) -> Self {
        Self {
            name: node.name.clone(),
            kind: node.kind,
            children: match node.kind {
                NodeKind::Folder => Some(node.children().iter().map(Self::from_node).collect()),
                NodeKind::File => None,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPreset {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub root_name: String,
    #[serde(default)]
    pub structure: Vec<PresetNode>,
}

/// Converts a forest into preset form. A single root contributes its
/// children; several roots are each kept as a top-level entry.
pub fn to_preset_nodes(forest: &[TreeNode]) -> Vec<PresetNode> {
    match forest {
        [single] if single.is_folder() => {
            single.children().iter().map(PresetNode::from_node).collect()
        }
        _ => forest.iter().map(PresetNode::from_node).collect(),
    }
}
