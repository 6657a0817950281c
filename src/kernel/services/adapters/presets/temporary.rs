//! User-saved presets, kept as one JSON object keyed by preset value.

use super::builtin::example_temporary_preset;
use crate::kernel::services::ports::PresetError;
use crate::models::FolderPreset;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub type PresetMap = BTreeMap<String, FolderPreset>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetStats {
    pub count: usize,
    pub categories: Vec<String>,
}

impl PresetStats {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub struct TemporaryPresets {
    path: PathBuf,
}

impl TemporaryPresets {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PresetMap, PresetError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PresetMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        Ok(serde_json::from_str(&data)?)
    }

    /// Like [`load`](Self::load), but an unreadable store reads as empty.
    pub fn all(&self) -> PresetMap {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load temporary presets");
            PresetMap::new()
        })
    }

    pub fn values(&self) -> Vec<String> {
        self.all().into_keys().collect()
    }

    pub fn get(&self, value: &str) -> Option<FolderPreset> {
        self.all().remove(value)
    }

    /// Inserts or replaces the preset under its `value`.
    pub fn save(&self, preset: FolderPreset) -> Result<(), PresetError> {
        let mut presets = self.load()?;
        tracing::info!(value = %preset.value, "saved temporary preset");
        presets.insert(preset.value.clone(), preset);
        self.write(&presets)
    }

    pub fn delete(&self, value: &str) -> Result<bool, PresetError> {
        let mut presets = self.load()?;
        let removed = presets.remove(value).is_some();
        if removed {
            self.write(&presets)?;
        }
        Ok(removed)
    }

    pub fn clear(&self) -> Result<(), PresetError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    pub fn export_json(&self) -> Result<String, PresetError> {
        let presets = self.load()?;
        if presets.is_empty() {
            return Err(PresetError::Empty);
        }
        Ok(serde_json::to_string_pretty(&presets)?)
    }

    /// Imports a JSON object of presets. Every entry must carry string
    /// `value`, `label` and `category` and an array `structure`, otherwise
    /// nothing is written. With `merge` the entries are layered over the
    /// existing store; without it they replace it. Returns the number of
    /// imported entries.
    pub fn import_json(&self, json: &str, merge: bool) -> Result<usize, PresetError> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(json)?;

        let mut imported = PresetMap::new();
        for (key, entry) in raw {
            if !is_valid_entry(&entry) {
                return Err(PresetError::Invalid { key });
            }
            let mut preset: FolderPreset = serde_json::from_value(entry)?;
            if preset.root_name.trim().is_empty() {
                preset.root_name = preset.label.clone();
            }
            imported.insert(key, preset);
        }

        let count = imported.len();
        let presets = if merge {
            let mut existing = self.load()?;
            existing.extend(imported);
            existing
        } else {
            imported
        };
        self.write(&presets)?;
        tracing::info!(count, merge, "imported temporary presets");
        Ok(count)
    }

    pub fn stats(&self) -> PresetStats {
        let presets = self.all();
        let categories: BTreeSet<String> = presets
            .values()
            .filter_map(|p| p.category.clone())
            .collect();
        PresetStats {
            count: presets.len(),
            categories: categories.into_iter().collect(),
        }
    }

    /// Writes the example preset when the store is empty. Returns it when
    /// it was written.
    pub fn seed_example(&self) -> Result<Option<FolderPreset>, PresetError> {
        if !self.load()?.is_empty() {
            return Ok(None);
        }
        let example = example_temporary_preset();
        self.save(example.clone())?;
        Ok(Some(example))
    }

    fn write(&self, presets: &PresetMap) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(presets)?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> PresetError {
        PresetError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn is_valid_entry(entry: &Value) -> bool {
    let Some(obj) = entry.as_object() else {
        return false;
    };
    let is_str = |field: &str| obj.get(field).is_some_and(Value::is_string);
    is_str("value")
        && is_str("label")
        && is_str("category")
        && obj.get("structure").is_some_and(Value::is_array)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/presets/temporary.rs"]
mod tests;
