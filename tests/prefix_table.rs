//! Expected prefixes for a four-level tree, checked against both the renderer
//! and the line decoder. Both continuation pads must count as one level.

mod common;

use tempfile::TempDir;
use tgen::grammar::{decode, Decoded};
use tgen::tree::render;

/// (line, depth, name, is_dir)
const TABLE: &[(&str, usize, &str, bool)] = &[
    ("├── a/", 0, "a", true),
    ("│   ├── b/", 1, "b", true),
    ("│   │   └── c/", 2, "c", true),
    ("│   │       └── d.txt", 3, "d.txt", false),
    ("│   └── e.txt", 1, "e.txt", false),
    ("└── f/", 0, "f", true),
    ("    ├── g/", 1, "g", true),
    ("    │   ├── h/", 2, "h", true),
    ("    │   │   └── i.txt", 3, "i.txt", false),
    ("    │   └── j.txt", 2, "j.txt", false),
    ("    └── k.txt", 1, "k.txt", false),
];

fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    common::populate(
        &tmp.path().join("root"),
        &[
            "a/b/c/d.txt",
            "a/e.txt",
            "f/g/h/i.txt",
            "f/g/j.txt",
            "f/k.txt",
        ],
    );
    tmp
}

#[test]
fn renderer_produces_table_lines() {
    let tmp = fixture();
    let rendered = render(&tmp.path().join("root"), &common::default_tree_config());
    let lines: Vec<&str> = rendered.text.lines().collect();
    assert_eq!(lines[0], "root/");
    let expected: Vec<&str> = TABLE.iter().map(|row| row.0).collect();
    assert_eq!(&lines[1..], expected.as_slice());
}

#[test]
fn renderer_depths_match_table() {
    let tmp = fixture();
    let rendered = render(&tmp.path().join("root"), &common::default_tree_config());
    let depths: Vec<usize> = rendered.lines.iter().map(|l| l.depth).collect();
    let expected: Vec<usize> = TABLE.iter().map(|row| row.1).collect();
    assert_eq!(depths, expected);
}

#[test]
fn decoder_reads_table_lines() {
    for &(line, depth, name, is_dir) in TABLE {
        match decode(line) {
            Ok(Decoded::Entry(entry)) => {
                assert_eq!(entry.depth, depth, "depth of {:?}", line);
                assert_eq!(entry.name, name, "name of {:?}", line);
                assert_eq!(entry.is_dir, is_dir, "kind of {:?}", line);
            }
            other => panic!("{:?} decoded to {:?}", line, other),
        }
    }
}
