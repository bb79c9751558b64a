//! Command implementations for export-cli

pub mod export;
pub mod plan;

pub use export::run_export;
pub use plan::run_plan;

use std::path::Path;

use export_core::{AllowList, Profile};
use export_fs::NormalizedPath;

use crate::cli::SelectionArgs;
use crate::error::{CliError, Result};

/// Resolve the source root and allow-list for a command.
fn resolve_selection(selection: &SelectionArgs) -> Result<(NormalizedPath, AllowList)> {
    if !selection.source.is_dir() {
        return Err(CliError::user(format!(
            "Source tree {} is not a directory",
            selection.source.display()
        )));
    }

    let profile = match &selection.profile {
        Some(path) => Profile::load(&NormalizedPath::new(path))?,
        None => Profile::bundled()?,
    };

    Ok((NormalizedPath::new(&selection.source), profile.allow_list()?))
}

/// Human-readable origin of the allow-list.
fn profile_label(profile: Option<&Path>) -> String {
    profile
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string())
}
