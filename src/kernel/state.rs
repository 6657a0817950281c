use super::naming::SuffixStyle;
use super::tree_ops::{generate_unique_siblings, sort};
use crate::kernel::services::ports::BuilderConfig;
use crate::models::{
    default_forest_named, repair_duplicate_ids, Forest, HistoryEntry, NodeId, NodeKind,
    TreeHistory, TreeNode,
};

pub struct BuilderState {
    pub(crate) forest: Forest,
    pub(crate) history: TreeHistory,
    pub(crate) config: BuilderConfig,
}

impl BuilderState {
    /// Bootstraps from a stored (possibly stale or hand-edited) tree. The
    /// normalized tree becomes the genesis history entry, so undo stops at
    /// what was loaded rather than at an empty tree.
    pub fn new(forest: Forest, config: BuilderConfig) -> Self {
        let forest = normalize_forest(forest, &config);
        let history = TreeHistory::with_limit(&forest, config.history_limit);
        Self {
            forest,
            history,
            config,
        }
    }

    pub fn forest(&self) -> &[TreeNode] {
        &self.forest
    }

    pub fn history(&self) -> &TreeHistory {
        &self.history
    }

    pub fn history_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.entries()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn suffix_style(&self) -> SuffixStyle {
        self.config.suffix_style
    }

    /// Nodes the user may not delete: the distinguished root in single-root
    /// mode, and the last remaining top-level entry in multi-root mode.
    pub fn is_protected(&self, id: &NodeId) -> bool {
        if !self.config.multi_root {
            return id.is_root();
        }
        matches!(self.forest.as_slice(), [only] if &only.id == id)
    }
}

/// Enforces the forest invariants on a tree coming from outside.
///
/// Single-root mode keeps only a leading `root` folder (anything else falls
/// back to an empty root). Multi-root mode keeps the top-level folders.
/// Folders always carry a child list and files never do. Duplicate ids get
/// fresh ones; sibling names are made unique and sorted.
pub fn normalize_forest(forest: Forest, config: &BuilderConfig) -> Forest {
    let mut forest = if config.multi_root {
        let roots: Forest = forest.into_iter().filter(TreeNode::is_folder).collect();
        if roots.is_empty() {
            default_forest_named(&config.root_name)
        } else {
            roots
        }
    } else {
        match forest.into_iter().next() {
            Some(first) if first.id.is_root() && first.is_folder() => vec![first],
            _ => {
                tracing::warn!("stored tree has no root folder, starting empty");
                default_forest_named(&config.root_name)
            }
        }
    };

    let reshaped = repair_shape(&mut forest);
    if reshaped > 0 {
        tracing::warn!(count = reshaped, "fixed folder/file children mismatch");
    }
    let repaired = repair_duplicate_ids(&mut forest);
    if repaired > 0 {
        tracing::warn!(count = repaired, "reassigned duplicate node ids");
    }
    sort(generate_unique_siblings(&forest, config.suffix_style))
}

/// Gives folders without a child list an empty one and drops children stored
/// under files. Returns how many nodes were touched.
fn repair_shape(nodes: &mut [TreeNode]) -> usize {
    let mut touched = 0;
    for node in nodes {
        match node.kind {
            NodeKind::Folder => {
                let children = node.children.get_or_insert_with(|| {
                    touched += 1;
                    Vec::new()
                });
                touched += repair_shape(children);
            }
            NodeKind::File => {
                if node.children.take().is_some() {
                    touched += 1;
                }
            }
        }
    }
    touched
}
