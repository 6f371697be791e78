//! Literal-name ignore list used while rendering.

use std::fs;
use std::path::Path;
use tracing::warn;

const DEFAULT_IGNORES: &[&str] = &["node_modules"];

/// Ordered set of bare entry names excluded from a render.
///
/// Names are compared literally against the final path component; they are
/// not globs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: Vec<String>,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::from_names(DEFAULT_IGNORES.iter().copied())
    }
}

impl IgnoreSet {
    /// An ignore set that excludes nothing.
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a set from names, keeping the first occurrence of duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::empty();
        set.extend(names);
        set
    }

    /// Parse ignore-file text: one name per line, `#` lines and blanks skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_names(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load an ignore file, falling back to the default set if it can't be read.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                warn!(
                    "ignore file {} not readable ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Add names not already present.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.names.contains(&name) {
                self.names.push(name);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
