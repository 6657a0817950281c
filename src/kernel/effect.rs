use crate::kernel::services::ports::ExportTarget;
use crate::models::Forest;

#[derive(Debug, Clone)]
pub enum Effect {
    /// Hand the new tree to the persistence provider.
    PersistForest(Forest),
    /// A rejected command the user should hear about.
    Notify {
        title: &'static str,
        message: String,
    },
    /// Start an export on a copy of the tree as it is now.
    Export {
        forest: Forest,
        target: ExportTarget,
    },
}
