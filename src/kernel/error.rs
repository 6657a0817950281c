use crate::models::NodeId;
use thiserror::Error;

/// Why a command was refused. Nothing here is fatal: the live tree is left
/// untouched whenever one of these is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Name cannot be empty.")]
    EmptyName,
    #[error("An item named \"{name}\" already exists in this folder.")]
    DuplicateSiblingName { name: String },
    #[error("no item with id {0}")]
    NotFound(NodeId),
    #[error("{0} is not a folder")]
    InvalidParent(NodeId),
    #[error("the root folder cannot be deleted or duplicated")]
    ProtectedRoot,
    #[error("top-level folders can only be added in multi-root mode")]
    MultiRootDisabled,
}

impl TreeError {
    /// Whether the host should show this to the user. Stale ids and root
    /// protection are dropped silently.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            TreeError::EmptyName | TreeError::DuplicateSiblingName { .. }
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            TreeError::EmptyName => "Invalid Name",
            TreeError::DuplicateSiblingName { .. } => "Name Conflict",
            TreeError::NotFound(_)
            | TreeError::InvalidParent(_)
            | TreeError::ProtectedRoot
            | TreeError::MultiRootDisabled => "Ignored",
        }
    }
}
