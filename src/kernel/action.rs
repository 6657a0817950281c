use crate::kernel::services::ports::ExportTarget;
use crate::models::{NodeId, NodeKind, PresetNode};

#[derive(Debug, Clone)]
pub enum Action {
    Rename {
        id: NodeId,
        name: String,
    },
    Delete {
        id: NodeId,
    },
    Duplicate {
        id: NodeId,
    },
    AddItem {
        parent: NodeId,
        kind: NodeKind,
        name: String,
    },
    /// Multi-root mode only.
    AddRoot {
        name: String,
    },
    ToggleExpanded {
        id: NodeId,
    },
    LoadPreset {
        structure: Vec<PresetNode>,
        root_name: String,
    },
    Undo,
    Redo,
    Export(ExportTarget),
}
