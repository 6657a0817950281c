//! Preset sources: the built-in set, the temporary store and the text format.

mod builtin;
mod temporary;
mod text;

pub use builtin::{builtin_preset, example_temporary_preset, BUILTIN_KEYS};
pub use temporary::{PresetMap, PresetStats, TemporaryPresets};
pub use text::{
    parse_indented_preset, preset_to_text, serialize_indented_preset, slugify_preset_value,
    PresetMeta,
};

use crate::kernel::services::ports::{PresetCatalog, PresetCategories, GENERAL_CATEGORY};
use crate::models::FolderPreset;

/// Built-in presets plus an optional temporary store. Temporary presets win
/// on key clashes and are listed under `"<category> (Temporary)"`.
pub struct BuiltinCatalog {
    temporary: Option<TemporaryPresets>,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self { temporary: None }
    }

    pub fn with_temporary(temporary: TemporaryPresets) -> Self {
        Self {
            temporary: Some(temporary),
        }
    }

    pub fn temporary(&self) -> Option<&TemporaryPresets> {
        self.temporary.as_ref()
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetCatalog for BuiltinCatalog {
    fn list_presets(&self) -> PresetCategories {
        let mut categories = PresetCategories::new();

        for preset in BUILTIN_KEYS.iter().filter_map(|key| builtin_preset(key)) {
            let category = preset
                .category
                .clone()
                .unwrap_or_else(|| GENERAL_CATEGORY.to_string());
            categories.entry(category).or_default().push(preset);
        }

        if let Some(temporary) = &self.temporary {
            if let Err(e) = temporary.seed_example() {
                tracing::warn!(error = %e, "failed to seed example preset");
            }
            for preset in temporary.all().into_values() {
                let category = format!(
                    "{} (Temporary)",
                    preset.category.as_deref().unwrap_or(GENERAL_CATEGORY)
                );
                categories.entry(category).or_default().push(preset);
            }
        }

        categories
    }

    fn load_preset(&self, key: &str) -> Option<FolderPreset> {
        if let Some(preset) = self.temporary.as_ref().and_then(|t| t.get(key)) {
            return Some(preset);
        }
        let preset = builtin_preset(key);
        if preset.is_none() {
            tracing::warn!(key, "preset not found");
        }
        preset
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/presets/catalog.rs"]
mod tests;
