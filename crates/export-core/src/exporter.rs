//! The export pipeline
//!
//! Strictly sequential: claim the destination, copy dependencies, library
//! and utilities, write the manifests, then stamp the README. Any failure
//! stops the run where it is; nothing already written is removed.

use export_fs::{NormalizedPath, TreePath, io};
use export_git::GitClient;

use crate::{
    AllowList, CopiedFiles, Copier, Destination, ProvenanceBanner, Result, manifest,
};

/// Destination used when none is given. Like every relative path here it is
/// resolved against the current directory, not the source root; run from the
/// source root, the export lands next to the tree.
pub const DEFAULT_DESTINATION: &str = "../stadic-export";

/// Where to export from and to, and how to stamp the result.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Root of the source tree
    pub source: NormalizedPath,
    /// Directory to create; must not exist
    pub destination: NormalizedPath,
    /// Client used to read the source revision
    pub git: GitClient,
    /// Prefix for the geometry archive URL in the top-level manifest
    pub boost_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            source: NormalizedPath::new("."),
            destination: NormalizedPath::new(DEFAULT_DESTINATION),
            git: GitClient::default(),
            boost_prefix: String::new(),
        }
    }
}

impl ExportOptions {
    pub fn new(source: impl Into<NormalizedPath>, destination: impl Into<NormalizedPath>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    pub fn with_git(mut self, git: GitClient) -> Self {
        self.git = git;
        self
    }

    pub fn with_boost_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.boost_prefix = prefix.into();
        self
    }
}

/// Summary of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub destination: NormalizedPath,
    pub dependencies: CopiedFiles,
    pub library: CopiedFiles,
    pub utilities: CopiedFiles,
    /// Generated manifests, relative to the export root
    pub manifests: Vec<String>,
    pub banner: ProvenanceBanner,
}

impl ExportReport {
    /// Files copied from the source tree.
    pub fn copied_files(&self) -> usize {
        self.dependencies.len() + self.library.len() + self.utilities.len()
    }
}

/// Run a full export of `allow` as described by `options`.
pub fn export(options: &ExportOptions, allow: &AllowList) -> Result<ExportReport> {
    let destination = Destination::claim(options.destination.clone())?;

    let copier = Copier::new(&options.source, &destination);
    let dependencies = copier.copy_dependencies()?;
    let library = copier.copy_library(allow)?;
    let utilities = copier.copy_utilities(allow)?;

    let mut manifests = Vec::new();
    for entry in manifest::synthesize(allow, &options.boost_prefix) {
        let relative = entry.relative_path();
        tracing::info!("Writing {}", relative);
        io::write_text(&destination.root().join(&relative), &entry.content)?;
        manifests.push(relative);
    }

    let banner = ProvenanceBanner::capture(&options.git, &options.source.to_native());
    io::write_text(
        &destination.path(TreePath::Readme),
        &banner.render_readme(),
    )?;
    tracing::info!(
        "Export complete at {} (revision {})",
        destination.root(),
        banner.revision
    );

    Ok(ExportReport {
        destination: destination.root().clone(),
        dependencies,
        library,
        utilities,
        manifests,
        banner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_destination_is_relative_to_working_directory() {
        let options = ExportOptions::new("/work/stadic", DEFAULT_DESTINATION);

        assert_eq!(options.destination.as_str(), "../stadic-export");
        assert_eq!(options.destination.to_native(), std::path::PathBuf::from("../stadic-export"));
        assert_eq!(ExportOptions::default().destination, options.destination);
    }
}
