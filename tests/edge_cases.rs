//! Edge case tests for canopy

mod harness;

use harness::{TestTree, run_canopy};

#[test]
fn test_empty_root_renders_single_line() {
    let tree = TestTree::new();
    tree.add_dir("proj");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n");
}

#[test]
fn test_empty_folder_kept_as_leaf() {
    let tree = TestTree::new();
    tree.add_dir("proj/empty");
    tree.add_file("proj/z.txt", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["proj/", "├── empty/", "└── z.txt"]);
}

#[test]
fn test_deep_prefix_layout() {
    let tree = TestTree::new();
    tree.add_file("proj/one/deep/x.txt", "");
    tree.add_file("proj/two.txt", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "proj/",
            "├── one/",
            "│   └── deep/",
            "│       └── x.txt",
            "└── two.txt",
        ]
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "");
    tree.add_file("proj/sub/b.txt", "");

    let (first, _, _) = run_canopy(tree.path(), &["proj"]);
    let (second, _, _) = run_canopy(tree.path(), &["proj"]);
    assert_eq!(first, second);
}

#[test]
fn test_default_limit_and_no_limit() {
    let tree = TestTree::new();
    for i in 0..60 {
        tree.add_file(&format!("proj/file{:02}.txt", i), "");
    }

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj"]);
    assert!(success);
    assert!(
        stdout.contains("... and 10 more items"),
        "default cap is 50: {}",
        stdout
    );

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj", "--no-limit"]);
    assert!(success);
    assert!(!stdout.contains("more items"));
    assert!(stdout.contains("file59.txt"));
}

#[test]
fn test_truncation_applies_per_folder() {
    let tree = TestTree::new();
    for name in ["x", "y", "z"] {
        tree.add_file(&format!("proj/early/{}.txt", name), "");
    }
    for name in ["m", "n", "o"] {
        tree.add_file(&format!("proj/{}.txt", name), "");
    }

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj", "--max-items", "2"]);
    assert!(success);
    let truncated_lines = stdout
        .lines()
        .filter(|l| l.contains("more items"))
        .count();
    assert_eq!(truncated_lines, 2, "each folder truncates its own tail");
}

#[test]
fn test_gitignore_depth_zero_skips_nested_files() {
    let tree = TestTree::new();
    tree.add_file("proj/.gitignore", "*.log\n");
    tree.add_file("proj/root.log", "");
    tree.add_file("proj/sub/.gitignore", "*.tmp\n");
    tree.add_file("proj/sub/scratch.tmp", "");

    let (stdout, _stderr, success) =
        run_canopy(tree.path(), &["proj", "--gitignore-depth", "0"]);
    assert!(success);
    assert!(!stdout.contains("root.log"), "root ignore file is collected");
    assert!(
        stdout.contains("scratch.tmp"),
        "nested ignore file is beyond the collection depth: {}",
        stdout
    );
}

#[test]
fn test_ignore_depth_escape_hatch() {
    let tree = TestTree::new();
    tree.add_file("proj/.gitignore", "*.log\n");
    tree.add_file("proj/top.log", "");
    tree.add_file("proj/.hidden-top", "");
    tree.add_file("proj/sub/deep.log", "");
    tree.add_file("proj/sub/.hidden-deep", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj", "--ignore-depth", "1"]);
    assert!(success);
    assert!(!stdout.contains("top.log"), "level 1 is still filtered");
    assert!(!stdout.contains(".hidden-top"), "level 1 is still filtered");
    assert!(stdout.contains("deep.log"), "level 2 is unfiltered");
    assert!(stdout.contains(".hidden-deep"), "level 2 is unfiltered");
}

#[test]
fn test_gitignore_directory_pattern_prunes_subtree() {
    let tree = TestTree::new();
    tree.add_file("proj/.gitignore", "build/\n");
    tree.add_file("proj/build/out.bin", "");
    tree.add_file("proj/src/main.rs", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj"]);
    assert!(success);
    assert!(!stdout.contains("build/"));
    assert!(!stdout.contains("out.bin"));
    assert!(stdout.contains("main.rs"));
}

#[test]
fn test_double_star_pattern() {
    let tree = TestTree::new();
    tree.add_file("proj/.gitignore", "**/generated.rs\n");
    tree.add_file("proj/a/generated.rs", "");
    tree.add_file("proj/a/b/generated.rs", "");
    tree.add_file("proj/a/b/kept.rs", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj"]);
    assert!(success);
    assert!(!stdout.contains("generated.rs"));
    assert!(stdout.contains("kept.rs"));
}

#[test]
fn test_multi_dot_names_render_whole() {
    let tree = TestTree::new();
    tree.add_file("proj/archive.tar.gz", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj"]);
    assert!(success);
    assert!(stdout.contains("└── archive.tar.gz"));
}

#[test]
fn test_summary_on_untruncated_tree() {
    let tree = TestTree::new();
    tree.add_file("proj/a.rs", "");
    tree.add_file("proj/b.rs", "");
    tree.add_file("proj/sub/LICENSE", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj", "-s"]);
    assert!(success);
    assert!(stdout.contains("1 directories, 3 files"));
    assert!(stdout.contains(".rs: 2"));
    assert!(stdout.contains("(no extension): 1"));
}

#[test]
fn test_git_dir_is_always_pruned() {
    let tree = TestTree::new();
    tree.add_file("proj/.git/HEAD", "ref: refs/heads/main");
    tree.add_file("proj/main.rs", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["proj", "-a"]);
    assert!(success);
    assert!(!stdout.contains(".git"), "-a must not show .git: {}", stdout);
    assert!(stdout.contains("main.rs"));
}

#[test]
fn test_truncated_node_in_json() {
    let tree = TestTree::new();
    tree.add_file("proj/a.txt", "");
    tree.add_file("proj/b.txt", "");
    tree.add_file("proj/c.txt", "");

    let (stdout, _stderr, success) =
        run_canopy(tree.path(), &["proj", "--max-items", "1", "--json"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let children = value
        .get("children")
        .and_then(|v| v.as_array())
        .expect("children array");
    assert_eq!(children.len(), 2);
    assert_eq!(
        children[1].get("type").and_then(|v| v.as_str()),
        Some("truncated")
    );
    assert_eq!(
        children[1].get("name").and_then(|v| v.as_str()),
        Some("... and 2 more items")
    );
}

/// A mirrored export must exclude exactly what the tree excludes. Exercised
/// through the library manifest boundary.
#[test]
fn test_manifest_matches_filtered_tree() {
    use std::path::Path;

    let tree = TestTree::new();
    tree.add_file("proj/.gitignore", "*.log\n");
    tree.add_file("proj/debug.log", "");
    tree.add_file("proj/kept.txt", "");
    tree.add_file("proj/sub/also.log", "");
    tree.add_file("proj/sub/kept.py", "");

    let mut builder = canopy::TreeBuilder::new(canopy::WalkerConfig::default());
    let built = builder.build(&tree.path().join("proj")).unwrap();
    let entries = canopy::manifest(&built);

    let paths: Vec<&Path> = entries.iter().map(|e| e.path.as_path()).collect();
    assert_eq!(
        paths,
        vec![
            Path::new("kept.txt"),
            Path::new("sub"),
            Path::new("sub/kept.py"),
        ]
    );
}
