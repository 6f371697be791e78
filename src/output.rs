//! Where rendered trees are saved.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when `--output` names a directory.
pub const DEFAULT_TREE_FILE: &str = "tree.txt";

/// Resolve the file a rendered tree is written to.
///
/// A path with an extension is taken as the file itself; anything else is
/// treated as a directory that receives `tree.txt`.
pub fn resolve_output_path(output: &Path) -> Result<PathBuf> {
    let full = std::path::absolute(output)
        .with_context(|| format!("{}: failed to resolve output path", output.display()))?;
    if full.extension().is_some() {
        Ok(full)
    } else {
        Ok(full.join(DEFAULT_TREE_FILE))
    }
}

/// Write tree text to `path`, creating parent directories as needed.
pub fn write_tree(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("{}: failed to create directory", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("{}: failed to write tree", path.display()))
}
