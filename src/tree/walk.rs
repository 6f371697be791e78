use std::cmp::Ordering;
use std::path::Path;
use tracing::warn;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use walkdir::{DirEntry, WalkDir};

use super::{RenderWarning, TreeConfig};

/// Entry data collected during traversal, before layout computation.
#[derive(Debug, Clone)]
pub(super) struct RawEntry {
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}

/// Walk `root` depth-first in render order.
///
/// Ignored names are pruned before descending. Directories one level past
/// `max_depth` are listed but not entered.
pub(super) fn collect(
    root: &Path,
    config: &TreeConfig,
    warnings: &mut Vec<RenderWarning>,
) -> Vec<RawEntry> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .max_depth(config.max_depth.saturating_add(1))
        .sort_by(sort_cmp);

    let ignore = &config.ignore;
    let iter = walker.into_iter().filter_entry(|entry| {
        // Always allow root
        entry.depth() == 0 || !ignore.contains(&entry.file_name().to_string_lossy())
    });

    let mut raw_entries = Vec::new();
    for entry_result in iter {
        match entry_result {
            Ok(entry) => {
                let depth = entry.depth();
                if depth == 0 {
                    continue;
                }
                let is_dir = entry.file_type().is_dir();
                if is_dir && depth > config.max_depth {
                    let warning = RenderWarning::DepthLimit {
                        path: entry.path().to_path_buf(),
                        max_depth: config.max_depth,
                    };
                    warn!("{}", warning);
                    warnings.push(warning);
                }
                raw_entries.push(RawEntry {
                    depth: depth - 1,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_dir,
                });
            }
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                let message = match e.io_error() {
                    Some(io_err) => io_err.to_string(),
                    None => e.to_string(),
                };
                let warning = RenderWarning::Unreadable { path, message };
                warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }
    raw_entries
}

/// Directories first, then by [`compare_names`].
fn sort_cmp(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();

    if a_is_dir != b_is_dir {
        return if a_is_dir {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    compare_names(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy())
}

/// Dictionary order: accents and case are ignored first, then unaccented
/// names precede accented ones, then lowercase precedes uppercase.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased name with combining marks removed (`Éclair` -> `eclair`).
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
