//! Directory walking, filtering, sorting, and tree text layout.

mod layout;
pub(crate) mod walk;

use crate::ignore::IgnoreSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default limit on how deep a render descends.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// A single rendered line of the tree, below the root line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Nesting depth (0 = direct child of the listed root).
    pub depth: usize,
    /// Whether this is the last sibling in its parent group.
    pub is_last: bool,
    /// Display name (final path component only).
    pub name: String,
    pub is_dir: bool,
}

/// Configuration for a render.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Deepest directory level whose contents are listed.
    pub max_depth: usize,
    /// Names excluded from the listing.
    pub ignore: IgnoreSet,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore: IgnoreSet::default(),
        }
    }
}

/// Non-fatal problems met while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A directory could not be listed; it contributes no lines.
    Unreadable { path: PathBuf, message: String },
    /// A directory sits at the depth limit; its contents were not listed.
    DepthLimit { path: PathBuf, max_depth: usize },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::Unreadable { path, message } => {
                write!(f, "cannot read directory {}: {}", path.display(), message)
            }
            RenderWarning::DepthLimit { path, max_depth } => {
                write!(f, "max depth ({}) reached at {}", max_depth, path.display())
            }
        }
    }
}

/// Result of rendering a directory.
#[derive(Debug, Clone)]
pub struct RenderedTree {
    /// Full tree text, root line first, every line newline-terminated.
    pub text: String,
    pub lines: Vec<TreeLine>,
    pub warnings: Vec<RenderWarning>,
}

/// Render `root` as tree text.
///
/// Unreadable directories and the depth limit produce warnings, never errors.
pub fn render(root: &Path, config: &TreeConfig) -> RenderedTree {
    let mut warnings = Vec::new();
    let raw = walk::collect(root, config, &mut warnings);
    let lines = layout::compute_tree_lines(&raw);
    let text = layout::render_text(&root_label(root), &lines);
    RenderedTree {
        text,
        lines,
        warnings,
    }
}

/// Name used for the synthetic root line.
///
/// Paths such as `.` or `..` have no final component, so the resolved
/// directory name is used instead. A filesystem root has no name at all and
/// yields an empty label, so its root line is a single `/`.
pub fn root_label(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}
