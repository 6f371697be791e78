//! Rebuilding a directory hierarchy from tree text.
//!
//! Both entry points feed lines into one [`Builder`], which owns the
//! [`PathStack`] for the duration of the build. They differ only in where the
//! lines come from and how the lines before the listing are skipped.

use crate::grammar::{self, Decoded, DecodedLine, LineError};
use anyhow::{ensure, Context, Result};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Options shared by both builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Create empty files for file lines. Directories are always created.
    pub create_files: bool,
}

/// A filesystem change performed by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateDir(PathBuf),
    CreateFile(PathBuf),
}

/// A line that was skipped or only partly applied.
#[derive(Debug)]
pub struct LineWarning {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub line: String,
    pub error: LineError,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {:?}", self.line_number, self.error, self.line)
    }
}

/// Outcome of a build: what was created and what went wrong along the way.
#[derive(Debug)]
pub struct BuildReport {
    /// Resolved target directory.
    pub target: PathBuf,
    pub operations: Vec<Operation>,
    pub warnings: Vec<LineWarning>,
}

/// Open ancestor directories during a build, indexed by depth.
///
/// Index 0 is always the resolved target directory.
#[derive(Debug, Clone)]
pub struct PathStack {
    dirs: Vec<PathBuf>,
}

impl PathStack {
    pub fn new(root: PathBuf) -> Self {
        Self { dirs: vec![root] }
    }

    /// Close every directory deeper than `depth`, so the top is the parent
    /// for an entry at `depth`. Returns false when fewer levels were open
    /// than `depth` requires; the top is then the deepest open directory.
    pub fn enter(&mut self, depth: usize) -> bool {
        self.dirs.truncate(depth + 1);
        self.dirs.len() == depth + 1
    }

    pub fn push(&mut self, dir: PathBuf) {
        self.dirs.push(dir);
    }

    pub fn top(&self) -> &Path {
        // never empty: truncate keeps at least the root
        &self.dirs[self.dirs.len() - 1]
    }

    /// Number of open levels, root included.
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Per-build state: the path stack and the report being filled in.
struct Builder {
    stack: PathStack,
    options: BuildOptions,
    report: BuildReport,
}

impl Builder {
    /// Create and resolve the target directory. Failure here is fatal.
    fn start(target: &Path, options: &BuildOptions) -> Result<Self> {
        ensure!(
            !target.as_os_str().is_empty(),
            "target directory not specified"
        );
        debug!("creating base directory {}", target.display());
        fs::create_dir_all(target)
            .with_context(|| format!("{}: failed to create target directory", target.display()))?;
        let root = target
            .canonicalize()
            .with_context(|| format!("{}: failed to resolve target directory", target.display()))?;

        Ok(Self {
            stack: PathStack::new(root.clone()),
            options: *options,
            report: BuildReport {
                target: root,
                operations: Vec::new(),
                warnings: Vec::new(),
            },
        })
    }

    /// Apply one listing line. Problems are recorded, never returned.
    fn apply(&mut self, line_number: usize, line: &str) {
        let result = match grammar::decode(line) {
            Ok(Decoded::Entry(entry)) => self.apply_entry(line_number, line, entry),
            Ok(Decoded::Skip) => Ok(()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            self.warn(line_number, line, e);
        }
    }

    fn apply_entry(
        &mut self,
        line_number: usize,
        line: &str,
        entry: DecodedLine,
    ) -> Result<(), LineError> {
        if !entry.is_dir && !self.options.create_files {
            return Ok(());
        }

        if !self.stack.enter(entry.depth) {
            let open = self.stack.len() - 1;
            self.warn(
                line_number,
                line,
                LineError::DepthJump {
                    depth: entry.depth,
                    open,
                },
            );
        }
        let path = self.stack.top().join(&entry.name);

        if entry.is_dir {
            debug!("creating directory {}", path.display());
            fs::create_dir_all(&path).map_err(LineError::Io)?;
            self.report.operations.push(Operation::CreateDir(path.clone()));
            self.stack.push(path);
        } else {
            debug!("creating file {}", path.display());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(LineError::Io)?;
            }
            File::create(&path).map_err(LineError::Io)?;
            self.report.operations.push(Operation::CreateFile(path));
        }
        Ok(())
    }

    fn warn(&mut self, line_number: usize, line: &str, error: LineError) {
        let warning = LineWarning {
            line_number,
            line: line.to_string(),
            error,
        };
        warn!("{}", warning);
        self.report.warnings.push(warning);
    }

    fn finish(self) -> BuildReport {
        self.report
    }
}

/// Read a tree file. Bytes that are not valid UTF-8 are replaced rather than
/// failing the whole file; only the affected names change.
pub fn read_tree_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("{}: failed to read tree file", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Build from a complete tree text. The first non-blank line is taken to be
/// the root line and is never applied.
pub fn build(text: &str, target: &Path, options: &BuildOptions) -> Result<BuildReport> {
    let mut builder = Builder::start(target, options)?;
    let mut lines = text
        .lines()
        .enumerate()
        .skip_while(|(_, line)| line.trim().is_empty());
    // root line
    lines.next();
    for (index, line) in lines {
        builder.apply(index + 1, line);
    }
    Ok(builder.finish())
}

/// Build from a live line source, applying each line as it arrives.
///
/// Lines before the first one carrying tree glyphs (root designators such as
/// `./` or `project/`, stray text) are skipped. When `echo` is given, every
/// raw line is written to it before being processed. Invalid UTF-8 is
/// replaced line by line; only read errors on the source are fatal.
pub fn build_streaming<R: BufRead>(
    mut reader: R,
    target: &Path,
    options: &BuildOptions,
    mut echo: Option<&mut dyn Write>,
) -> Result<BuildReport> {
    let mut builder = Builder::start(target, options)?;
    let mut in_listing = false;

    let mut buf = Vec::new();
    let mut index = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read tree input")?;
        if read == 0 {
            break;
        }
        index += 1;
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);

        if let Some(out) = echo.as_mut() {
            writeln!(out, "{}", line).context("failed to echo tree input")?;
        }

        if line.trim().is_empty() {
            continue;
        }
        if !in_listing {
            if !grammar::is_hierarchy_line(&line) {
                if grammar::is_root_path_line(&line) {
                    debug!("skipping root line {:?}", line);
                } else {
                    debug!("skipping line before listing {:?}", line);
                }
                continue;
            }
            in_listing = true;
        }
        builder.apply(index, &line);
    }
    Ok(builder.finish())
}
