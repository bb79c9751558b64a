//! Export command implementation

use std::path::Path;

use colored::Colorize;
use export_core::{ExportOptions, export};
use export_fs::NormalizedPath;
use export_git::GitClient;

use super::{profile_label, resolve_selection};
use crate::cli::SelectionArgs;
use crate::error::Result;

/// Run the export command
pub fn run_export(
    selection: &SelectionArgs,
    destination: &Path,
    git: &Path,
    boost_prefix: &str,
) -> Result<()> {
    let (source, allow) = resolve_selection(selection)?;

    println!(
        "{} Exporting {} to {}...",
        "=>".blue().bold(),
        source.as_str().cyan(),
        destination.display().to_string().cyan()
    );
    println!(
        "   Profile: {}",
        profile_label(selection.profile.as_deref()).yellow()
    );

    let options = ExportOptions {
        source,
        destination: NormalizedPath::new(destination),
        git: GitClient::new(git),
        boost_prefix: boost_prefix.to_string(),
    };
    let report = export(&options, &allow)?;

    println!(
        "   Copied {} dependency files, {} library files, {} utility files",
        report.dependencies.len(),
        report.library.len(),
        report.utilities.len()
    );
    println!("   Generated {}", report.manifests.join(", "));

    let revision = report.banner.revision.as_str();
    let revision = if report.banner.revision.is_known() {
        revision.green()
    } else {
        revision.yellow()
    };
    println!(
        "   Revision {} at {}",
        revision,
        report.banner.timestamp()
    );

    println!(
        "{} Export complete: {}",
        "OK".green().bold(),
        report.destination
    );
    Ok(())
}
