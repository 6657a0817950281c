//! Structural operators over a [`Forest`].
//!
//! Every operator takes the tree by reference and hands back a new one. Bad
//! input (unknown id, non-folder parent) yields an unchanged copy; validation
//! belongs to the store.

use std::cmp::Ordering;

use super::naming::{generate_incremented_name, SuffixStyle};
use super::natural::natural_cmp;
use crate::models::{Forest, NodeId, NodeKind, PresetNode, TreeNode};

/// Folders before files, then natural case-insensitive name order.
pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.kind, b.kind) {
        (NodeKind::Folder, NodeKind::File) => Ordering::Less,
        (NodeKind::File, NodeKind::Folder) => Ordering::Greater,
        _ => natural_cmp(&a.name, &b.name),
    }
}

pub fn sort(mut children: Vec<TreeNode>) -> Vec<TreeNode> {
    children.sort_by(compare_nodes);
    children
}

pub fn is_sorted(children: &[TreeNode]) -> bool {
    children
        .windows(2)
        .all(|pair| compare_nodes(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Sorts every child list in the forest, and the top level too.
pub fn sort_recursive(forest: &[TreeNode]) -> Forest {
    let nodes = forest
        .iter()
        .map(|node| TreeNode {
            children: node.children.as_deref().map(sort_recursive),
            ..node.clone()
        })
        .collect();
    sort(nodes)
}

#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub node: &'a TreeNode,
    /// `None` when the node sits at the top level.
    pub parent_id: Option<&'a NodeId>,
    pub siblings: &'a [TreeNode],
}

impl<'a> Located<'a> {
    pub fn sibling_names(&self) -> Vec<&'a str> {
        self.siblings.iter().map(|s| s.name.as_str()).collect()
    }

    /// Whether a sibling other than the node itself already uses `name`.
    pub fn sibling_has_name(&self, name: &str) -> bool {
        self.siblings
            .iter()
            .any(|s| s.id != self.node.id && s.name_matches(name))
    }
}

pub fn find_with_parent<'a>(forest: &'a [TreeNode], id: &NodeId) -> Option<Located<'a>> {
    fn walk<'a>(
        items: &'a [TreeNode],
        id: &NodeId,
        parent_id: Option<&'a NodeId>,
    ) -> Option<Located<'a>> {
        for item in items {
            if &item.id == id {
                return Some(Located {
                    node: item,
                    parent_id,
                    siblings: items,
                });
            }
            if let Some(children) = item.children.as_deref() {
                if let Some(found) = walk(children, id, Some(&item.id)) {
                    return Some(found);
                }
            }
        }
        None
    }

    walk(forest, id, None)
}

pub fn find<'a>(forest: &'a [TreeNode], id: &NodeId) -> Option<&'a TreeNode> {
    find_with_parent(forest, id).map(|located| located.node)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePatch {
    pub name: Option<String>,
    pub expanded: Option<bool>,
}

impl NodePatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            expanded: None,
        }
    }

    pub fn expanded(expanded: bool) -> Self {
        Self {
            name: None,
            expanded: Some(expanded),
        }
    }
}

/// Applies `patch` to the node with `id`. A renamed node's sibling list is
/// re-sorted.
pub fn update_node(forest: &[TreeNode], id: &NodeId, patch: &NodePatch) -> Forest {
    fn walk(items: &mut Vec<TreeNode>, id: &NodeId, patch: &NodePatch) -> bool {
        let mut renamed = false;
        let mut found = false;
        for item in items.iter_mut() {
            if &item.id == id {
                if let Some(name) = &patch.name {
                    renamed = item.name != *name;
                    item.name = name.clone();
                }
                if let Some(expanded) = patch.expanded {
                    item.expanded = expanded;
                }
                found = true;
                break;
            }
            if let Some(children) = item.children.as_mut() {
                if walk(children, id, patch) {
                    return true;
                }
            }
        }
        if renamed {
            items.sort_by(compare_nodes);
        }
        found
    }

    let mut out = forest.to_vec();
    walk(&mut out, id, patch);
    out
}

/// Appends `node` under the folder `parent_id`, re-sorts that folder and
/// expands it so the new child is visible.
pub fn insert_child(forest: &[TreeNode], parent_id: &NodeId, node: TreeNode) -> Forest {
    fn walk(items: &mut [TreeNode], parent_id: &NodeId, node: &mut Option<TreeNode>) -> bool {
        for item in items.iter_mut() {
            if &item.id == parent_id {
                if item.kind != NodeKind::Folder {
                    return true;
                }
                if let Some(node) = node.take() {
                    let children = item.children.get_or_insert_with(Vec::new);
                    children.push(node);
                    children.sort_by(compare_nodes);
                    item.expanded = true;
                }
                return true;
            }
            if let Some(children) = item.children.as_mut() {
                if walk(children, parent_id, node) {
                    return true;
                }
            }
        }
        false
    }

    let mut out = forest.to_vec();
    walk(&mut out, parent_id, &mut Some(node));
    out
}

/// Appends `node` as a new top-level entry and re-sorts the top level.
pub fn insert_root(forest: &[TreeNode], node: TreeNode) -> Forest {
    let mut out = forest.to_vec();
    out.push(node);
    sort(out)
}

pub fn delete_node(forest: &[TreeNode], id: &NodeId) -> Forest {
    forest
        .iter()
        .filter(|item| &item.id != id)
        .map(|item| TreeNode {
            children: item
                .children
                .as_deref()
                .map(|children| delete_node(children, id)),
            ..item.clone()
        })
        .collect()
}

/// Flips `expanded` on the folder `id`. Files and unknown ids are ignored.
pub fn toggle_expanded(forest: &[TreeNode], id: &NodeId) -> Forest {
    match find(forest, id) {
        Some(node) if node.is_folder() => {
            update_node(forest, id, &NodePatch::expanded(!node.expanded))
        }
        _ => forest.to_vec(),
    }
}

/// Copy of a subtree where every node gets a fresh id and starts collapsed.
pub fn deep_copy(node: &TreeNode) -> TreeNode {
    TreeNode {
        id: NodeId::generate(),
        name: node.name.clone(),
        kind: node.kind,
        children: match node.kind {
            NodeKind::Folder => Some(node.children().iter().map(deep_copy).collect()),
            NodeKind::File => None,
        },
        expanded: false,
    }
}

/// Clones the subtree `id` next to the original under a collision-free name.
///
/// Returns `None` for the distinguished root and for unknown ids.
pub fn duplicate(forest: &[TreeNode], id: &NodeId, style: SuffixStyle) -> Option<(Forest, String)> {
    if id.is_root() {
        return None;
    }
    let located = find_with_parent(forest, id)?;
    let new_name = generate_incremented_name(&located.node.name, &located.sibling_names(), style);

    let mut copy = deep_copy(located.node);
    copy.name = new_name.clone();

    let out = match located.parent_id {
        Some(parent_id) => insert_child(forest, parent_id, copy),
        None => insert_root(forest, copy),
    };
    Some((out, new_name))
}

/// Renames siblings whose names clash (case-insensitively) with an earlier
/// sibling, at every level, and sorts each level. Ids and expansion are kept.
pub fn generate_unique_siblings(items: &[TreeNode], style: SuffixStyle) -> Forest {
    let mut out: Vec<TreeNode> = Vec::with_capacity(items.len());
    for item in items {
        let mut node = TreeNode {
            children: item
                .children
                .as_deref()
                .map(|children| generate_unique_siblings(children, style)),
            ..item.clone()
        };
        if out.iter().any(|n| n.name_matches(&node.name)) {
            let names: Vec<&str> = out.iter().map(|n| n.name.as_str()).collect();
            node.name = generate_incremented_name(&node.name, &names, style);
        }
        out.push(node);
    }
    sort(out)
}

/// Turns id-less preset nodes into tree nodes with fresh ids, all collapsed.
///
/// Blank names are skipped and clashing sibling names are made unique, so
/// the result always satisfies the sibling invariants.
pub fn materialize_preset(nodes: &[PresetNode], style: SuffixStyle) -> Vec<TreeNode> {
    let mut out: Vec<TreeNode> = Vec::with_capacity(nodes.len());
    for preset in nodes {
        let trimmed = preset.name.trim();
        if trimmed.is_empty() {
            continue;
        }
        let name = if out.iter().any(|n| n.name_matches(trimmed)) {
            let names: Vec<&str> = out.iter().map(|n| n.name.as_str()).collect();
            generate_incremented_name(trimmed, &names, style)
        } else {
            trimmed.to_string()
        };
        let node = TreeNode::new(preset.kind, name);
        let node = match preset.kind {
            NodeKind::Folder => node.with_children(materialize_preset(preset.children(), style)),
            NodeKind::File => node,
        };
        out.push(node);
    }
    sort(out)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tree_ops.rs"]
mod tests;
