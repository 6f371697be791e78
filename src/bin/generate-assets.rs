#![forbid(unsafe_code)]
//! Writes shell completions and the man page for `tgen`.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`).

use anyhow::Context;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;
use tgen::cli::Args;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let completions_dir = out_dir.join("completions");
    fs::create_dir_all(&completions_dir)
        .with_context(|| format!("{}: failed to create directory", completions_dir.display()))?;
    let mut written = Vec::new();
    for shell in Shell::value_variants() {
        let mut cmd = Args::command();
        written.push(generate_to(*shell, &mut cmd, "tgen", &completions_dir)?);
    }

    let man_dir = out_dir.join("man").join("man1");
    fs::create_dir_all(&man_dir)
        .with_context(|| format!("{}: failed to create directory", man_dir.display()))?;
    let man_path = man_dir.join("tgen.1");
    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    fs::write(&man_path, page)
        .with_context(|| format!("{}: failed to write man page", man_path.display()))?;
    written.push(man_path);

    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
