use crate::tree::DEFAULT_MAX_DEPTH;
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  tgen ./project                      Print the tree of ./project
  tgen ./project -o ./docs/tree.txt   Save the tree of ./project to a file
  tgen ./docs/tree.txt -a             Rebuild folders and empty files next to tree.txt
  tgen ./docs/tree.txt -o ./copy/     Rebuild the structure inside ./copy
  cat tree.txt | tgen -o ./copy/ -a   Rebuild from standard input";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tgen",
    version,
    about = "Render a directory as a tree listing, or rebuild a directory from one",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to render, tree file to rebuild from, or `-` for stdin
    pub path: Option<PathBuf>,

    /// Create empty files as well as directories when rebuilding
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Where to save the rendered tree, or the directory to rebuild into
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// File listing names to ignore, one per line
    #[arg(short = 'i', long = "ignore")]
    pub ignore_file: Option<PathBuf>,

    /// Extra name to ignore (repeatable)
    #[arg(short = 'I', long = "exclude", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Deepest directory level whose contents are listed
    #[arg(short = 'L', long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log every directory and file as it is created
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Print the tree before or while rebuilding, or even when saving it
    #[arg(short = 's', long = "show")]
    pub show: bool,
}

/// What an invocation does, decided from the path argument and stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Render the directory as tree text.
    Render(PathBuf),
    /// Rebuild from a tree file into `target`.
    BuildFromFile { input: PathBuf, target: PathBuf },
    /// Rebuild from lines arriving on stdin into `target`.
    BuildFromStdin { target: PathBuf },
    /// Nothing to do: show usage.
    Help,
}

impl Args {
    /// Resolve the mode. A tree file rebuilds next to itself unless
    /// `--output` is given; stdin always needs `--output`.
    pub fn mode(&self, stdin_is_terminal: bool) -> Result<Mode> {
        let path = match &self.path {
            Some(p) if p.as_os_str() == "-" => return self.stdin_mode(),
            Some(p) => p,
            None if stdin_is_terminal => return Ok(Mode::Help),
            None => return self.stdin_mode(),
        };

        if path.is_dir() {
            return Ok(Mode::Render(path.clone()));
        }
        if path.is_file() {
            let target = match &self.output {
                Some(out) => out.clone(),
                None => match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                },
            };
            return Ok(Mode::BuildFromFile {
                input: path.clone(),
                target,
            });
        }
        bail!("{}: No such file or directory", path.display())
    }

    fn stdin_mode(&self) -> Result<Mode> {
        match &self.output {
            Some(out) => Ok(Mode::BuildFromStdin {
                target: out.clone(),
            }),
            None => bail!("reading a tree from stdin requires -o <directory>"),
        }
    }
}
