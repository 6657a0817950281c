//! Service adapters: filesystem and runtime implementations (IO/async).

pub mod export;
pub mod forest_store;
pub mod paths;
pub mod presets;
pub mod runtime;
pub mod settings;

pub use export::{archive_file_name, build_archive, export_to_dir, write_archive, LocalExporter};
pub use forest_store::JsonForestStore;
pub use paths::{
    default_forest_path, default_presets_path, ensure_log_dir, get_app_data_dir, get_log_dir,
};
pub use presets::{
    builtin_preset, parse_indented_preset, preset_to_text, serialize_indented_preset,
    slugify_preset_value, BuiltinCatalog, PresetMeta, PresetStats, TemporaryPresets,
};
pub use runtime::ExportRuntime;
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from,
    resolve_forest_path, resolve_presets_path,
};
