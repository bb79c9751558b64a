//! Fixed directory layout shared by the source tree and the export.

use std::path::Path;

/// Well-known entries of a source tree and of the exported distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreePath {
    /// Third-party dependency tree, copied verbatim
    Dependencies,
    /// Library sources and headers
    Library,
    /// Utility program sources
    Utilities,
    /// Build manifest file name, one per exported directory level
    Manifest,
    /// Top-level description file carrying the provenance banner
    Readme,
}

impl TreePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::Library => "lib",
            Self::Utilities => "utilities",
            Self::Manifest => "CMakeLists.txt",
            Self::Readme => "README.txt",
        }
    }
}

impl AsRef<Path> for TreePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for TreePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
