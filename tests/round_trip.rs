//! Render a directory, rebuild it from the text, and compare the structures.

mod common;

use common::{create_fixture, snapshot, unfiltered_tree_config};
use std::io::Cursor;
use tempfile::TempDir;
use tgen::builder::{build, build_streaming, BuildOptions};
use tgen::tree::{render, TreeConfig};

const PROJECT: &[&str] = &[
    "Cargo.toml",
    "README.md",
    ".gitignore",
    "src/main.rs",
    "src/lib.rs",
    "src/tree/mod.rs",
    "src/tree/walk.rs",
    "src/tree/layout/deep/er/still.rs",
    "tests/common/mod.rs",
    "tests/it.rs",
    "docs/",
    "assets/img/",
    "assets/Logo.svg",
    "assets/logo.png",
];

#[test]
fn test_buffered_round_trip() {
    let src = create_fixture(PROJECT);
    let rendered = render(src.path(), &unfiltered_tree_config());

    let out = TempDir::new().unwrap();
    let report = build(
        &rendered.text,
        out.path(),
        &BuildOptions { create_files: true },
    )
    .unwrap();

    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(snapshot(out.path()), snapshot(src.path()));
}

#[test]
fn test_streaming_round_trip() {
    let src = create_fixture(PROJECT);
    let rendered = render(src.path(), &unfiltered_tree_config());

    let out = TempDir::new().unwrap();
    build_streaming(
        Cursor::new(rendered.text.clone()),
        out.path(),
        &BuildOptions { create_files: true },
        None,
    )
    .unwrap();

    assert_eq!(snapshot(out.path()), snapshot(src.path()));
}

#[test]
fn test_rebuilt_tree_renders_identically() {
    let src = create_fixture(PROJECT);
    let first = render(src.path(), &unfiltered_tree_config());

    let out = TempDir::new().unwrap();
    build(&first.text, out.path(), &BuildOptions { create_files: true }).unwrap();
    let second = render(out.path(), &unfiltered_tree_config());

    // root labels differ (temp dir names), the listing below them must not
    let body = |text: &str| text.lines().skip(1).collect::<Vec<_>>().join("\n");
    assert_eq!(body(&first.text), body(&second.text));
}

#[test]
fn test_dirs_only_round_trip_keeps_directories() {
    let src = create_fixture(PROJECT);
    let rendered = render(src.path(), &TreeConfig::default());

    let out = TempDir::new().unwrap();
    build(&rendered.text, out.path(), &BuildOptions::default()).unwrap();

    let dirs: Vec<String> = snapshot(src.path())
        .into_iter()
        .filter(|p| p.ends_with('/'))
        .collect();
    assert_eq!(snapshot(out.path()), dirs);
}
