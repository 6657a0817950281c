use super::*;

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(LOG_DIR));
}

#[test]
fn test_data_files_live_in_app_dir() {
    let forest = default_forest_path().unwrap();
    let presets = default_presets_path().unwrap();
    assert_eq!(forest.parent(), presets.parent());
    assert!(forest.to_string_lossy().contains(APP_NAME));
    assert!(forest.to_string_lossy().ends_with(FOREST_FILE));
}
