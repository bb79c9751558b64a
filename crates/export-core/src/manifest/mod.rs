//! Build-manifest synthesis
//!
//! Each manifest is a fixed CMake template with `@NAME@` placeholders
//! filled from the [`AllowList`]. Nothing here reads the filesystem, so the
//! text is fully determined by its inputs.

mod library;
mod toplevel;
mod utilities;

pub use library::library_manifest;
pub use toplevel::top_level_manifest;
pub use utilities::utilities_manifest;

use export_fs::TreePath;

use crate::AllowList;

/// Oldest CMake accepted by every generated manifest.
pub const CMAKE_MINIMUM_VERSION: &str = "2.8.11";

/// Shared library target built from `lib/`.
pub const LIBRARY_TARGET: &str = "stadic_core";

/// External project that fetches the geometry headers.
pub const GEOMETRY_TARGET: &str = "boost-geometry";

/// A generated manifest and the directory that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Owning directory relative to the export root; `None` for the root
    pub dir: Option<TreePath>,
    pub content: String,
}

impl ManifestEntry {
    /// Manifest path relative to the export root.
    pub fn relative_path(&self) -> String {
        match self.dir {
            Some(dir) => format!("{}/{}", dir, TreePath::Manifest),
            None => TreePath::Manifest.to_string(),
        }
    }
}

/// Produce every manifest of an export: library, utilities, then top level.
pub fn synthesize(allow: &AllowList, boost_prefix: &str) -> Vec<ManifestEntry> {
    vec![
        ManifestEntry {
            dir: Some(TreePath::Library),
            content: library_manifest(allow),
        },
        ManifestEntry {
            dir: Some(TreePath::Utilities),
            content: utilities_manifest(allow),
        },
        ManifestEntry {
            dir: None,
            content: top_level_manifest(boost_prefix),
        },
    ]
}

/// Fill `@NAME@` placeholders in `template`.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("@{name}@"), value)
        })
}
