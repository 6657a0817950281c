use super::*;

fn sample() -> Vec<TreeNode> {
    vec![TreeNode::root("project").with_children(vec![
        TreeNode::folder("src").with_children(vec![
            TreeNode::folder("bin").with_children(vec![TreeNode::file("cli.rs")]),
            TreeNode::file("lib.rs"),
        ]),
        TreeNode::file("README.md"),
    ])]
}

#[test]
fn test_outline_connectors_and_prefixes() {
    let expected = "\
📁 project
├─ 📁 src
│   ├─ 📁 bin
│   │   └─ 📄 cli.rs
│   └─ 📄 lib.rs
└─ 📄 README.md
";
    assert_eq!(generate_outline(&sample()), expected);
}

#[test]
fn test_outline_last_folder_uses_blank_prefix() {
    let forest = vec![TreeNode::root("r").with_children(vec![
        TreeNode::folder("a").with_children(vec![TreeNode::file("x")]),
    ])];
    assert_eq!(generate_outline(&forest), "📁 r\n└─ 📁 a\n    └─ 📄 x\n");
}

#[test]
fn test_outline_of_empty_forest() {
    assert_eq!(generate_outline(&[]), "📁 root\n");
}

#[test]
fn test_outline_ignores_expansion() {
    let mut forest = sample();
    forest[0].expanded = false;
    assert_eq!(outline_lines(&forest).count(), 6);
}

#[test]
fn test_outline_several_roots() {
    let forest = vec![
        TreeNode::root("a").with_children(vec![TreeNode::file("1")]),
        TreeNode::root("b"),
    ];
    let lines: Vec<String> = outline_lines(&forest).collect();
    assert_eq!(lines, ["📁 a", "└─ 📄 1", "📁 b"]);
}

#[test]
fn test_visible_rows_follow_expansion() {
    let mut forest = sample();
    let rows = visible_rows(&forest);
    // root expanded, src collapsed
    assert_eq!(
        rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        ["project", "src", "README.md"]
    );
    assert_eq!(rows[1].depth, 1);
    assert!(rows[1].has_children);
    assert!(!rows[1].is_expanded);

    forest[0].children.as_mut().unwrap()[0].expanded = true;
    let rows = visible_rows(&forest);
    assert_eq!(
        rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        ["project", "src", "bin", "lib.rs", "README.md"]
    );
    assert_eq!(rows[2].depth, 2);
}
