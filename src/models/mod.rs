//! 数据模型层

pub mod preset;
pub mod tree_history;
pub mod tree_node;

pub use preset::{to_preset_nodes, FolderPreset, PresetNode};
pub use tree_history::{HistoryEntry, TreeHistory, DEFAULT_HISTORY_LIMIT, GENESIS_LABEL};
pub use tree_node::{
    count_nodes, default_forest, default_forest_named, expansion_map, names_equal,
    repair_duplicate_ids, restore_expansion, strip_expansion, structurally_equal, Forest,
    NodeId, NodeKind, TreeNode, DEFAULT_ROOT_NAME, ROOT_ID,
};
