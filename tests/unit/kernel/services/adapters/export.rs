use super::*;
use crate::models::TreeNode;
use chrono::NaiveDate;
use std::io::Read;

fn sample() -> Forest {
    vec![TreeNode::root("project").with_children(vec![
        TreeNode::folder("src").with_children(vec![TreeNode::file("main.rs")]),
        TreeNode::folder("empty"),
        TreeNode::file("README.md"),
    ])]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

#[test]
fn test_safe_component() {
    assert_eq!(safe_component("a/b"), "a_b");
    assert_eq!(safe_component(".."), "_");
    assert_eq!(safe_component("  "), "_");
    assert_eq!(safe_component("notes.txt"), "notes.txt");
}

fn clashing() -> Forest {
    vec![TreeNode::root("root").with_children(vec![
        TreeNode::file("a/b"),
        TreeNode::file("a_b"),
        TreeNode::folder(".."),
        TreeNode::folder("_"),
    ])]
}

#[test]
fn test_sibling_components_stay_distinct() {
    let forest = clashing();
    assert_eq!(
        sibling_components(forest[0].children()),
        ["a_b", "a_b_01", "_", "__01"]
    );
}

#[test]
fn test_archive_keeps_clashing_names_apart() {
    let bytes = build_archive(&clashing()).unwrap();
    let archive = ::zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 5);
}

#[test]
fn test_export_to_dir_keeps_clashing_names_apart() {
    let dir = tempfile::tempdir().unwrap();
    let root = runtime()
        .block_on(export_to_dir(&clashing(), dir.path()))
        .unwrap();
    assert_eq!(std::fs::read_dir(&root).unwrap().count(), 4);
    assert!(root.join("a_b_01").is_file());
    assert!(root.join("__01").is_dir());
}

#[test]
fn test_export_to_dir_creates_tree() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = runtime().block_on(LocalExporter.export(
        sample(),
        ExportTarget::Folder(Some(dir.path().to_path_buf())),
    ));

    let root = dir.path().join("project");
    assert_eq!(
        outcome,
        ExportOutcome::Completed {
            location: root.clone()
        }
    );
    assert!(root.join("src").is_dir());
    assert!(root.join("empty").is_dir());
    assert!(root.join("src/main.rs").is_file());
    assert_eq!(std::fs::read(root.join("README.md")).unwrap().len(), 0);
}

#[test]
fn test_export_keeps_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("project")).unwrap();
    std::fs::write(dir.path().join("project/README.md"), "keep me").unwrap();

    runtime()
        .block_on(export_to_dir(&sample(), dir.path()))
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("project/README.md")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_cancelled_picker_is_abort() {
    let outcome = runtime().block_on(LocalExporter.export(sample(), ExportTarget::Folder(None)));
    assert_eq!(outcome, ExportOutcome::Aborted);
}

#[test]
fn test_empty_forest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = runtime().block_on(LocalExporter.export(
        Vec::new(),
        ExportTarget::Folder(Some(dir.path().to_path_buf())),
    ));
    assert!(matches!(outcome, ExportOutcome::Failed(_)));
}

#[test]
fn test_archive_entries() {
    let bytes = build_archive(&sample()).unwrap();
    let mut archive = ::zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        [
            "project/",
            "project/README.md",
            "project/empty/",
            "project/src/",
            "project/src/main.rs",
        ]
    );

    let mut content = String::new();
    archive
        .by_name("project/src/main.rs")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert!(content.is_empty());
}

#[test]
fn test_archive_file_name() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(archive_file_name(&sample(), date), "project-2024-03-09.zip");
    assert_eq!(archive_file_name(&[], date), "root-2024-03-09.zip");
}

#[test]
fn test_zip_into_directory_uses_dated_name() {
    let dir = tempfile::tempdir().unwrap();
    let outcome =
        runtime().block_on(LocalExporter.export(sample(), ExportTarget::Zip(dir.path().to_path_buf())));
    let ExportOutcome::Completed { location } = outcome else {
        panic!("export failed: {outcome:?}");
    };
    let name = location.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("project-"));
    assert!(name.ends_with(".zip"));
    assert!(location.is_file());
}

#[test]
fn test_zip_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.zip");
    let location = runtime()
        .block_on(write_archive(sample(), &path))
        .unwrap();
    assert_eq!(location, path);

    let file = std::fs::File::open(&path).unwrap();
    let archive = ::zip::ZipArchive::new(file).unwrap();
    assert_eq!(archive.len(), 5);
}
