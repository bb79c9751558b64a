//! stadic-export CLI
//!
//! Exports a curated subset of the STADIC source tree as a standalone,
//! buildable distribution.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise debug when verbose, warnings only by default
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} STADIC export tool", "stadic-export".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "stadic-export --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Export {
            selection,
            destination,
            git,
            boost_prefix,
        } => commands::run_export(&selection, &destination, &git, &boost_prefix),
        Commands::Plan { selection, json } => commands::run_plan(&selection, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SelectionArgs;
    use export_test_utils::SourceTree;
    use std::path::PathBuf;

    fn selection(tree: &SourceTree, profile: Option<PathBuf>) -> SelectionArgs {
        SelectionArgs {
            source: tree.source(),
            profile,
        }
    }

    #[test]
    fn test_plan_with_bundled_profile() {
        let tree = SourceTree::new();
        let result = commands::run_plan(&selection(&tree, None), true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_plan_rejects_missing_source() {
        let tree = SourceTree::new();
        let args = SelectionArgs {
            source: tree.root().join("nowhere"),
            profile: None,
        };

        let err = commands::run_plan(&args, false).unwrap_err();
        assert!(matches!(err, error::CliError::User { .. }));
    }

    #[test]
    fn test_export_with_profile_file() {
        let tree = SourceTree::new()
            .with_module("logging")
            .with_utility("dxgridmaker")
            .with_file(
                "profiles/small.toml",
                "[library]\nmodules = [\"logging\"]\n\n[utilities]\nprograms = [\"dxgridmaker\"]\n",
            );
        let profile = tree.source().join("profiles/small.toml");

        let result = commands::run_export(
            &selection(&tree, Some(profile)),
            &tree.destination(),
            &tree.root().join("no-git/git"),
            "",
        );

        assert!(result.is_ok());
        assert!(tree.destination().join("lib/logging.h").is_file());
    }

    #[test]
    fn test_export_into_existing_destination_fails() {
        let tree = SourceTree::new();
        std::fs::create_dir_all(tree.destination()).unwrap();

        let err = commands::run_export(
            &selection(&tree, None),
            &tree.destination(),
            &tree.root().join("no-git/git"),
            "",
        )
        .unwrap_err();

        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
