//! The tree text line grammar shared by the renderer and the builders.
//!
//! A listing line is `<prefix><connector><name>[/][ #comment]`, where the
//! prefix is zero or more fixed-width units. The renderer builds prefixes from
//! the constants below and the builders decode lines against the same ones.

use std::fmt;

/// Connector for an entry that has further siblings after it.
pub const CONNECTOR_ENTRY: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
/// Connector for the final entry among its siblings.
pub const CONNECTOR_LAST: &str = "\u{2514}\u{2500}\u{2500} "; // └──
/// Prefix unit under an ancestor that still has siblings below it.
pub const PAD_SIBLING: &str = "\u{2502}   "; // │
/// Prefix unit under an ancestor that was the last of its siblings.
pub const PAD_BLANK: &str = "    ";
/// Width of every prefix unit and connector, in chars.
pub const UNIT_WIDTH: usize = 4;

const VERTICAL: char = '\u{2502}';
const COMMENT: char = '#';

/// A successfully decoded listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    /// Number of prefix units before the connector.
    pub depth: usize,
    /// Bare entry name, without the trailing `/`.
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Entry(DecodedLine),
    /// Blank line, or a line whose name is empty once the comment is removed.
    Skip,
}

/// Why a line could not be turned into a filesystem operation.
#[derive(Debug)]
pub enum LineError {
    /// No connector glyph anywhere on the line.
    NoConnector,
    /// A connector exists but is preceded by something other than prefix units.
    BadIndent,
    /// The name would not stay inside its parent directory.
    InvalidName(String),
    /// The line is deeper than the directories currently open.
    DepthJump { depth: usize, open: usize },
    /// Creating the entry on disk failed.
    Io(std::io::Error),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::NoConnector => write!(f, "no tree connector found"),
            LineError::BadIndent => write!(f, "indentation is not made of tree units"),
            LineError::InvalidName(name) => write!(f, "invalid entry name {:?}", name),
            LineError::DepthJump { depth, open } => write!(
                f,
                "depth {} skips levels ({} open), attached to the deepest open directory",
                depth, open
            ),
            LineError::Io(e) => write!(f, "{}", e),
        }
    }
}

/// Build the prefix for an entry from its ancestors' `is_last` flags,
/// outermost first. The connector is not included.
pub fn encode_prefix(ancestors_last: &[bool]) -> String {
    let mut prefix = String::with_capacity(ancestors_last.len() * PAD_SIBLING.len());
    for &last in ancestors_last {
        prefix.push_str(if last { PAD_BLANK } else { PAD_SIBLING });
    }
    prefix
}

/// Render one listing line (without the newline).
pub fn encode_line(prefix: &str, is_last: bool, name: &str, is_dir: bool) -> String {
    let connector = if is_last { CONNECTOR_LAST } else { CONNECTOR_ENTRY };
    let slash = if is_dir { "/" } else { "" };
    format!("{prefix}{connector}{name}{slash}")
}

/// Decode a listing line into depth, name and kind.
pub fn decode(line: &str) -> Result<Decoded, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(Decoded::Skip);
    }

    let mut rest = line;
    let mut depth = 0;
    let body = loop {
        if let Some(after) = strip_connector(rest) {
            break after;
        }
        match strip_unit(rest) {
            Some(after) => {
                depth += 1;
                rest = after;
            }
            // A bare connector whose trailing space was trimmed away.
            None if is_bare_connector(rest) => return Ok(Decoded::Skip),
            None if has_connector(rest) => return Err(LineError::BadIndent),
            None => return Err(LineError::NoConnector),
        }
    };

    let name = body.split(COMMENT).next().unwrap_or_default().trim();
    if name.is_empty() {
        return Ok(Decoded::Skip);
    }

    let (bare, is_dir) = match name.strip_suffix('/') {
        Some(bare) => (bare, true),
        None => (name, false),
    };
    if bare.is_empty()
        || bare == "."
        || bare == ".."
        || bare.contains('/')
        || bare.contains('\\')
    {
        return Err(LineError::InvalidName(name.to_string()));
    }

    Ok(Decoded::Entry(DecodedLine {
        depth,
        name: bare.to_string(),
        is_dir,
    }))
}

/// Whether a line carries any tree glyph (connector or vertical continuation).
pub fn is_hierarchy_line(line: &str) -> bool {
    has_connector(line) || line.contains(VERTICAL)
}

/// Whether a line looks like the root designator that precedes a listing
/// (`./`, `../x`, `name/`, `.`, `..`).
pub fn is_root_path_line(line: &str) -> bool {
    if is_hierarchy_line(line) {
        return false;
    }
    let trimmed = line.trim();
    trimmed.starts_with("./")
        || trimmed.starts_with("../")
        || trimmed.ends_with('/')
        || trimmed == "."
        || trimmed == ".."
}

fn has_connector(s: &str) -> bool {
    s.contains(connector_stem(CONNECTOR_ENTRY)) || s.contains(connector_stem(CONNECTOR_LAST))
}

fn is_bare_connector(s: &str) -> bool {
    let s = s.trim_end();
    s == connector_stem(CONNECTOR_ENTRY) || s == connector_stem(CONNECTOR_LAST)
}

/// The connector without its trailing space.
fn connector_stem(connector: &str) -> &str {
    connector.trim_end()
}

fn strip_connector(s: &str) -> Option<&str> {
    s.strip_prefix(CONNECTOR_ENTRY)
        .or_else(|| s.strip_prefix(CONNECTOR_LAST))
}

fn strip_unit(s: &str) -> Option<&str> {
    s.strip_prefix(PAD_SIBLING)
        .or_else(|| s.strip_prefix(PAD_BLANK))
}
