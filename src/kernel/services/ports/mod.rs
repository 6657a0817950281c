//! Service ports: traits + data contracts.

pub mod config;
pub mod export;
pub mod persistence;
pub mod presets;
pub mod runtime;
pub mod settings;

pub use config::BuilderConfig;
pub use export::{ExportError, ExportMessage, ExportOutcome, ExportTarget, Exporter};
pub use persistence::{ForestStore, StoreError};
pub use presets::{PresetCatalog, PresetCategories, PresetError, GENERAL_CATEGORY};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::{Settings, StorageSettings};
