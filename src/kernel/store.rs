use super::error::TreeError;
use super::naming::generate_incremented_name;
use super::state::BuilderState;
use super::tree_ops::{
    self, delete_node, find, find_with_parent, insert_child, insert_root, materialize_preset,
    update_node, NodePatch,
};
use super::{Action, Effect};
use crate::kernel::services::ports::BuilderConfig;
use crate::models::{Forest, HistoryEntry, NodeId, NodeKind, PresetNode, TreeNode};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }
}

/// The builder facade. Owns the live tree and its history; every command
/// runs to completion before the next one starts.
pub struct Store {
    state: BuilderState,
}

impl Store {
    pub fn new(state: BuilderState) -> Self {
        Self { state }
    }

    pub fn with_forest(forest: Forest, config: BuilderConfig) -> Self {
        Self::new(BuilderState::new(forest, config))
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn forest(&self) -> &[TreeNode] {
        &self.state.forest
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    pub fn history_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.state.history_entries()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let outcome = match action {
            Action::Rename { id, name } => self.rename(&id, &name),
            Action::Delete { id } => self.delete(&id),
            Action::Duplicate { id } => self.duplicate(&id).map(|_| true),
            Action::AddItem { parent, kind, name } => {
                self.add_item(&parent, kind, &name).map(|_| true)
            }
            Action::AddRoot { name } => self.add_root(&name).map(|_| true),
            Action::ToggleExpanded { id } => self.toggle_expanded(&id),
            Action::LoadPreset {
                structure,
                root_name,
            } => {
                self.load_preset(&structure, &root_name);
                Ok(true)
            }
            Action::Undo => Ok(self.undo()),
            Action::Redo => Ok(self.redo()),
            Action::Export(target) => {
                return DispatchResult {
                    effects: vec![Effect::Export {
                        forest: self.state.forest.clone(),
                        target,
                    }],
                    state_changed: false,
                };
            }
        };

        match outcome {
            Ok(true) => DispatchResult {
                effects: vec![Effect::PersistForest(self.state.forest.clone())],
                state_changed: true,
            },
            Ok(false) => DispatchResult::unchanged(),
            Err(e) if e.is_user_facing() => {
                tracing::info!(error = %e, "command rejected");
                DispatchResult {
                    effects: vec![Effect::Notify {
                        title: e.title(),
                        message: e.to_string(),
                    }],
                    state_changed: false,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "command ignored");
                DispatchResult::unchanged()
            }
        }
    }

    /// Renames `id` to the trimmed `new_name`. `Ok(false)` when the name is
    /// unchanged.
    pub fn rename(&mut self, id: &NodeId, new_name: &str) -> Result<bool, TreeError> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        let located = find_with_parent(&self.state.forest, id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))?;
        if located.sibling_has_name(name) {
            return Err(TreeError::DuplicateSiblingName {
                name: name.to_string(),
            });
        }
        if located.node.name == name {
            return Ok(false);
        }

        let label = format!("Renamed \"{}\" to \"{}\"", located.node.name, name);
        let next = update_node(&self.state.forest, id, &NodePatch::name(name));
        self.commit(next, label);
        Ok(true)
    }

    pub fn delete(&mut self, id: &NodeId) -> Result<bool, TreeError> {
        if self.state.is_protected(id) {
            return Err(TreeError::ProtectedRoot);
        }
        let node = find(&self.state.forest, id).ok_or_else(|| TreeError::NotFound(id.clone()))?;

        let label = format!("Deleted \"{}\"", node.name);
        let next = delete_node(&self.state.forest, id);
        self.commit(next, label);
        Ok(true)
    }

    /// Duplicates `id` next to itself. Returns the copy's name.
    pub fn duplicate(&mut self, id: &NodeId) -> Result<String, TreeError> {
        if id.is_root() {
            return Err(TreeError::ProtectedRoot);
        }
        let original = find(&self.state.forest, id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))?
            .name
            .clone();
        let (next, new_name) =
            tree_ops::duplicate(&self.state.forest, id, self.state.suffix_style())
                .ok_or_else(|| TreeError::NotFound(id.clone()))?;

        self.commit(next, format!("Duplicated \"{original}\" as \"{new_name}\""));
        Ok(new_name)
    }

    /// Adds an empty file or folder under `parent` and expands the parent.
    pub fn add_item(
        &mut self,
        parent: &NodeId,
        kind: NodeKind,
        name: &str,
    ) -> Result<NodeId, TreeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        let parent_node = find(&self.state.forest, parent)
            .filter(|node| node.is_folder())
            .ok_or_else(|| TreeError::InvalidParent(parent.clone()))?;
        if parent_node.children().iter().any(|c| c.name_matches(name)) {
            return Err(TreeError::DuplicateSiblingName {
                name: name.to_string(),
            });
        }

        let node = TreeNode::new(kind, name);
        let id = node.id.clone();
        let next = insert_child(&self.state.forest, parent, node);
        self.commit(next, format!("Added {kind} \"{name}\""));
        Ok(id)
    }

    /// Adds an empty top-level folder. Only allowed in multi-root mode.
    pub fn add_root(&mut self, name: &str) -> Result<NodeId, TreeError> {
        if !self.state.config.multi_root {
            return Err(TreeError::MultiRootDisabled);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(TreeError::EmptyName);
        }
        if self.state.forest.iter().any(|root| root.name_matches(name)) {
            return Err(TreeError::DuplicateSiblingName {
                name: name.to_string(),
            });
        }

        let mut node = TreeNode::folder(name);
        node.expanded = true;
        let id = node.id.clone();
        let next = insert_root(&self.state.forest, node);
        self.commit(next, format!("Added folder \"{name}\""));
        Ok(id)
    }

    /// Flips a folder open or closed. Cosmetic: no history entry.
    pub fn toggle_expanded(&mut self, id: &NodeId) -> Result<bool, TreeError> {
        let node = find(&self.state.forest, id).ok_or_else(|| TreeError::NotFound(id.clone()))?;
        if !node.is_folder() {
            return Ok(false);
        }
        self.state.forest = tree_ops::toggle_expanded(&self.state.forest, id);
        Ok(true)
    }

    /// Replaces the whole tree with a fresh root built from `structure`.
    /// Everything starts collapsed except the root.
    pub fn load_preset(&mut self, structure: &[PresetNode], root_name: &str) {
        let root_name = match root_name.trim() {
            "" => self.state.config.root_name.clone(),
            name => name.to_string(),
        };
        let children = materialize_preset(structure, self.state.suffix_style());
        let next = vec![TreeNode::root(root_name).with_children(children)];
        self.commit(next, "Loaded preset structure".to_string());
    }

    pub fn undo(&mut self) -> bool {
        match self.state.history.undo(&self.state.forest) {
            Some(forest) => {
                self.state.forest = forest;
                tracing::debug!(cursor = self.state.history.cursor(), "undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.state.history.redo(&self.state.forest) {
            Some(forest) => {
                self.state.forest = forest;
                tracing::debug!(cursor = self.state.history.cursor(), "redo");
                true
            }
            None => false,
        }
    }

    /// A name for a new item under `parent` that does not collide with its
    /// children, starting from `base`.
    pub fn suggest_name(&self, parent: &NodeId, base: &str) -> Option<String> {
        let parent = find(&self.state.forest, parent).filter(|n| n.is_folder())?;
        if !parent.children().iter().any(|c| c.name_matches(base)) {
            return Some(base.to_string());
        }
        let names: Vec<&str> = parent.children().iter().map(|c| c.name.as_str()).collect();
        Some(generate_incremented_name(
            base,
            &names,
            self.state.suffix_style(),
        ))
    }

    fn commit(&mut self, forest: Forest, label: String) {
        tracing::info!(%label, "tree changed");
        self.state.history.commit(&forest, label);
        self.state.forest = forest;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
