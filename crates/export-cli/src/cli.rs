//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use export_core::DEFAULT_DESTINATION;
use export_git::DEFAULT_GIT_PROGRAM;

/// Export a curated, standalone subset of the STADIC source tree
#[derive(Parser, Debug)]
#[command(name = "stadic-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Source tree and allow-list selection shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SelectionArgs {
    /// Root of the source tree (contains dependencies/, lib/, utilities/)
    #[arg(short, long, default_value = ".")]
    pub source: PathBuf,

    /// Profile file listing the units to export (.toml, .json, .yaml).
    /// The bundled profile is used when omitted.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Export the selected files into a new directory
    ///
    /// Refuses to run if the destination already exists.
    ///
    /// Examples:
    ///   stadic-export export
    ///   stadic-export export -d /tmp/stadic-1.0 -p profiles/release.toml
    ///   stadic-export export --git /usr/local/bin/git --boost-prefix https://mirror/boost/
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Directory to create for the export
        #[arg(short, long, env = "STADIC_EXPORT_DESTINATION", default_value = DEFAULT_DESTINATION)]
        destination: PathBuf,

        /// Revision-control client used to record the source revision
        #[arg(long, env = "STADIC_EXPORT_GIT", default_value = DEFAULT_GIT_PROGRAM)]
        git: PathBuf,

        /// Prefix for the geometry archive URL in the top-level CMakeLists.txt
        #[arg(long, default_value = "")]
        boost_prefix: String,
    },

    /// Show what an export would copy and generate, without writing
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
