use super::*;
use crate::models::PresetNode;

fn store() -> (tempfile::TempDir, TemporaryPresets) {
    let dir = tempfile::tempdir().unwrap();
    let presets = TemporaryPresets::new(dir.path().join("presets.json"));
    (dir, presets)
}

fn preset(value: &str, category: &str) -> FolderPreset {
    FolderPreset {
        value: value.to_string(),
        label: value.to_string(),
        category: Some(category.to_string()),
        description: None,
        root_name: value.to_string(),
        structure: vec![PresetNode::file("a.txt")],
    }
}

#[test]
fn test_save_get_delete() {
    let (_dir, presets) = store();
    assert!(presets.all().is_empty());

    presets.save(preset("temp-a", "Web")).unwrap();
    presets.save(preset("temp-b", "Video")).unwrap();
    assert_eq!(presets.values(), ["temp-a", "temp-b"]);
    assert_eq!(presets.get("temp-a").unwrap().category.as_deref(), Some("Web"));

    assert!(presets.delete("temp-a").unwrap());
    assert!(!presets.delete("temp-a").unwrap());
    assert_eq!(presets.values(), ["temp-b"]);

    presets.clear().unwrap();
    presets.clear().unwrap();
    assert!(presets.all().is_empty());
}

#[test]
fn test_stats() {
    let (_dir, presets) = store();
    assert!(presets.stats().is_empty());
    presets.save(preset("temp-a", "Web")).unwrap();
    presets.save(preset("temp-b", "Web")).unwrap();
    presets.save(preset("temp-c", "Video")).unwrap();
    let stats = presets.stats();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.categories, ["Video", "Web"]);
}

#[test]
fn test_export_requires_presets() {
    let (_dir, presets) = store();
    assert!(matches!(presets.export_json(), Err(PresetError::Empty)));
    presets.save(preset("temp-a", "Web")).unwrap();
    let json = presets.export_json().unwrap();
    assert!(json.contains("\"rootName\": \"temp-a\""));
}

#[test]
fn test_import_replace_and_merge() {
    let (_dir, source) = store();
    source.save(preset("temp-x", "Web")).unwrap();
    let json = source.export_json().unwrap();

    let (_dir2, target) = store();
    target.save(preset("temp-old", "Web")).unwrap();
    assert_eq!(target.import_json(&json, true).unwrap(), 1);
    assert_eq!(target.values(), ["temp-old", "temp-x"]);

    assert_eq!(target.import_json(&json, false).unwrap(), 1);
    assert_eq!(target.values(), ["temp-x"]);
}

#[test]
fn test_import_rejects_bad_entries() {
    let (_dir, presets) = store();
    presets.save(preset("temp-keep", "Web")).unwrap();

    let missing_category =
        r#"{"temp-a":{"value":"temp-a","label":"A","rootName":"a","structure":[]}}"#;
    match presets.import_json(missing_category, false) {
        Err(PresetError::Invalid { key }) => assert_eq!(key, "temp-a"),
        other => panic!("expected invalid entry, got {other:?}"),
    }
    let bad_structure =
        r#"{"temp-a":{"value":"temp-a","label":"A","category":"X","structure":{}}}"#;
    assert!(presets.import_json(bad_structure, false).is_err());
    assert!(matches!(
        presets.import_json("not json", false),
        Err(PresetError::Json(_))
    ));

    assert_eq!(presets.values(), ["temp-keep"]);
}

#[test]
fn test_import_fills_missing_root_name() {
    let (_dir, presets) = store();
    let json = r#"{"temp-a":{"value":"temp-a","label":"Alpha","category":"X","structure":[]}}"#;
    presets.import_json(json, false).unwrap();
    assert_eq!(presets.get("temp-a").unwrap().root_name, "Alpha");
}

#[test]
fn test_seed_example_only_when_empty() {
    let (_dir, presets) = store();
    let seeded = presets.seed_example().unwrap().unwrap();
    assert_eq!(seeded.value, "temp-example");
    assert!(presets.seed_example().unwrap().is_none());
    assert_eq!(presets.values(), ["temp-example"]);
}

#[test]
fn test_corrupt_store_reads_empty() {
    let (_dir, presets) = store();
    std::fs::write(presets.path(), "{").unwrap();
    assert!(presets.all().is_empty());
    assert!(presets.save(preset("temp-a", "Web")).is_err());
}
