use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use viewkit::config::ResolverConfig;
use viewkit::error::Result;
use viewkit::resolver::{ResolveError, Resolver, TemplatePathStack};

mod args;
use args::{Cli, Commands};

// Exit codes: 1 = soft miss (no paths / not found), 2 = traversal rejection
const EXIT_MISS: u8 = 1;
const EXIT_REJECTED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::from(EXIT_MISS)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Resolve {
            name,
            paths,
            suffix,
            no_lfi,
            config,
        } => handle_resolve(cli.verbose, name, paths, suffix, no_lfi, config),
        Commands::Paths { paths, config } => handle_paths(paths, config),
    }
}

fn build_stack(
    paths: Vec<String>,
    suffix: Option<String>,
    no_lfi: bool,
    config: Option<PathBuf>,
) -> Result<TemplatePathStack> {
    let base = match config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };

    let mut stack = TemplatePathStack::from_config(&base);
    stack.add_paths(&paths);
    if let Some(suffix) = suffix {
        stack.set_default_suffix(&suffix);
    }
    if no_lfi {
        stack.set_lfi_protection(false);
    }
    Ok(stack)
}

fn handle_resolve(
    verbose: bool,
    name: String,
    paths: Vec<String>,
    suffix: Option<String>,
    no_lfi: bool,
    config: Option<PathBuf>,
) -> Result<ExitCode> {
    let stack = build_stack(paths, suffix, no_lfi, config)?;

    if verbose {
        for dir in stack.paths() {
            eprintln!("{} {}", "searching".dimmed(), dir);
        }
    }

    match stack.resolve(&name, None) {
        Ok(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ ResolveError::ParentTraversal) => {
            eprintln!("{} {}", "Rejected:".red(), e);
            Ok(ExitCode::from(EXIT_REJECTED))
        }
        Err(e) => {
            eprintln!("{}", e.to_string().yellow());
            Ok(ExitCode::from(EXIT_MISS))
        }
    }
}

fn handle_paths(paths: Vec<String>, config: Option<PathBuf>) -> Result<ExitCode> {
    let stack = build_stack(paths, None, false, config)?;

    for dir in stack.paths() {
        println!("{}", dir);
    }
    Ok(ExitCode::SUCCESS)
}
