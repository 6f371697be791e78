#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, IsTerminal};
use std::path::Path;
use tgen::builder::{self, BuildOptions, BuildReport};
use tgen::cli::{Args, Mode};
use tgen::ignore::IgnoreSet;
use tgen::output;
use tgen::tree::{self, TreeConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("tgen: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    match args.mode(io::stdin().is_terminal())? {
        Mode::Help => {
            Args::command().print_help()?;
            Ok(())
        }
        Mode::Render(root) => render(&args, &root),
        Mode::BuildFromFile { input, target } => {
            let text = builder::read_tree_text(&input)?;
            if args.show {
                println!("Structure to be created:");
                println!("{text}");
            }
            let report = builder::build(&text, &target, &build_options(&args))?;
            report_build(&report);
            Ok(())
        }
        Mode::BuildFromStdin { target } => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout();
            let echo: Option<&mut dyn io::Write> = if args.show {
                Some(&mut stdout)
            } else {
                None
            };
            let report = builder::build_streaming(stdin, &target, &build_options(&args), echo)?;
            report_build(&report);
            Ok(())
        }
    }
}

/// Log to stderr; `--debug` lowers the level so every created path is shown.
/// `RUST_LOG` overrides both.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn render(args: &Args, root: &Path) -> Result<()> {
    let mut ignore = match &args.ignore_file {
        Some(file) => IgnoreSet::load(file),
        None => IgnoreSet::default(),
    };
    ignore.extend(args.exclude.iter().cloned());

    let config = TreeConfig {
        max_depth: args.max_depth,
        ignore,
    };
    let rendered = tree::render(root, &config);

    if args.output.is_none() || args.show {
        print!("{}", rendered.text);
    }
    if let Some(out) = &args.output {
        let file = output::resolve_output_path(out)?;
        output::write_tree(&file, &rendered.text)?;
        eprintln!("tree saved to {}", file.display());
    }
    Ok(())
}

fn build_options(args: &Args) -> BuildOptions {
    BuildOptions {
        create_files: args.all,
    }
}

fn report_build(report: &BuildReport) {
    println!("structure created in {}", report.target.display());
    if !report.warnings.is_empty() {
        eprintln!("tgen: {} warning(s) while rebuilding", report.warnings.len());
    }
}
