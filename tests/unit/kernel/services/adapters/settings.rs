use super::*;
use crate::kernel::naming::SuffixStyle;

#[test]
fn test_settings_path_is_under_cache_dir() {
    let path = get_settings_path().unwrap();
    assert!(path.ends_with(".folder-builder/settings.json"));
}

#[test]
fn test_default_settings_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.builder.history_limit, 50);

    std::fs::write(&path, r#"{"builder":{"suffix_style":"space"}}"#).unwrap();
    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.builder.suffix_style, SuffixStyle::Space);
}

#[test]
fn test_malformed_settings_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
    assert!(load_settings_from(&dir.path().join("missing.json")).is_none());
}

#[test]
fn test_storage_overrides() {
    let mut settings = Settings::default();
    assert!(resolve_forest_path(&settings).is_some());

    settings.storage.forest_file = Some(PathBuf::from("/tmp/tree.json"));
    assert_eq!(
        resolve_forest_path(&settings),
        Some(PathBuf::from("/tmp/tree.json"))
    );
}
