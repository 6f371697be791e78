#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tgen::ignore::IgnoreSet;
use tgen::tree::TreeConfig;
use walkdir::WalkDir;

/// Default TreeConfig with the standard ignore list.
pub fn default_tree_config() -> TreeConfig {
    TreeConfig::default()
}

/// TreeConfig that ignores nothing.
pub fn unfiltered_tree_config() -> TreeConfig {
    TreeConfig {
        ignore: IgnoreSet::empty(),
        ..TreeConfig::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path(), paths);
    tmp
}

pub fn populate(root: &Path, paths: &[&str]) {
    for p in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "content").unwrap();
        }
    }
}

/// Relative paths under `root`, sorted, directories marked with a trailing '/'.
pub fn snapshot(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if e.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect();
    paths.sort();
    paths
}
