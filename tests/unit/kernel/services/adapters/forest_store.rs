use super::*;
use crate::models::{default_forest, NodeId};

#[test]
fn test_missing_file_loads_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonForestStore::new(dir.path().join("tree.json"));
    assert!(store.load().unwrap().is_none());
    assert_eq!(store.load_or_default(), default_forest());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonForestStore::new(dir.path().join("data").join("tree.json"));
    let forest = vec![TreeNode::root("project").with_children(vec![
        TreeNode::folder("src"),
        TreeNode::file("README.md"),
    ])];

    store.save(&forest).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, forest);
    assert!(loaded[0].id.is_root());
    assert!(!dir.path().join("data").join("tree.json.tmp").exists());
}

#[test]
fn test_corrupt_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.json");
    std::fs::write(&path, "[{\"oops\":").unwrap();
    let store = JsonForestStore::new(&path);

    assert!(matches!(store.load(), Err(StoreError::Json(_))));
    let forest = store.load_or_default();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].id, NodeId::root());
}

#[test]
fn test_save_best_effort_swallows_errors() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let store = JsonForestStore::new(blocker.join("tree.json"));
    store.save_best_effort(&default_forest());
    assert!(store.save(&default_forest()).is_err());
}
