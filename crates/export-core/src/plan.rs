//! Dry-run view of an export

use export_fs::{NormalizedPath, TreePath};
use serde::Serialize;

use crate::{AllowList, manifest};

/// Everything an export would write, resolved without touching the
/// filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    /// Source tree root
    pub source: String,
    /// Directory copied recursively, relative to both roots
    pub dependencies: String,
    /// Files copied flat into `lib/`
    pub library: Vec<String>,
    /// Files copied flat into `utilities/`
    pub utilities: Vec<String>,
    /// Generated manifests, relative to the export root
    pub manifests: Vec<String>,
    /// Description file carrying the provenance banner
    pub readme: String,
}

impl ExportPlan {
    pub fn new(source: &NormalizedPath, allow: &AllowList) -> Self {
        Self {
            source: source.to_string(),
            dependencies: TreePath::Dependencies.to_string(),
            library: allow.library_files(),
            utilities: allow.utility_sources(),
            manifests: manifest::synthesize(allow, "")
                .iter()
                .map(manifest::ManifestEntry::relative_path)
                .collect(),
            readme: TreePath::Readme.to_string(),
        }
    }

    /// Number of allow-listed files that would be copied.
    pub fn selected_files(&self) -> usize {
        self.library.len() + self.utilities.len()
    }
}
