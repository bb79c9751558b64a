//! Curated copier
//!
//! Copies the dependency tree verbatim and the allow-listed library and
//! utility files into flat directories. A missing file aborts the export:
//! skipping it would leave a manifest pointing at a file that is not there.

use export_fs::{NormalizedPath, TreePath, io};

use crate::{AllowList, Destination, Result};

/// Files written into one destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFiles {
    /// Destination directory, relative to the export root
    pub dir: String,
    /// Copied files, relative to `dir`, in copy order
    pub files: Vec<String>,
    /// Total bytes copied
    pub bytes: u64,
}

impl CopiedFiles {
    fn new(dir: TreePath) -> Self {
        Self {
            dir: dir.as_str().to_string(),
            files: Vec::new(),
            bytes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Copies from a source tree into a claimed [`Destination`].
#[derive(Debug)]
pub struct Copier<'a> {
    source: &'a NormalizedPath,
    destination: &'a Destination,
}

impl<'a> Copier<'a> {
    pub fn new(source: &'a NormalizedPath, destination: &'a Destination) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Recursively copy `dependencies/` unmodified.
    pub fn copy_dependencies(&self) -> Result<CopiedFiles> {
        let from = self.source.join(TreePath::Dependencies.as_str());
        let to = self.destination.path(TreePath::Dependencies);

        tracing::info!("Copying dependency tree {}", from);
        let mut copied = CopiedFiles::new(TreePath::Dependencies);
        for (relative, bytes) in io::copy_tree(&from, &to)? {
            copied.bytes += bytes;
            copied.files.push(relative.as_str().to_string());
        }
        Ok(copied)
    }

    /// Copy the library sources and headers named by `allow` into `lib/`.
    pub fn copy_library(&self, allow: &AllowList) -> Result<CopiedFiles> {
        tracing::info!(
            "Copying {} library modules and {} header-only files",
            allow.modules().len(),
            allow.headers().len()
        );
        self.copy_flat(TreePath::Library, allow.library_files())
    }

    /// Copy the utility sources named by `allow` into `utilities/`.
    pub fn copy_utilities(&self, allow: &AllowList) -> Result<CopiedFiles> {
        tracing::info!("Copying {} utilities", allow.utilities().len());
        self.copy_flat(TreePath::Utilities, allow.utility_sources())
    }

    fn copy_flat(&self, dir: TreePath, files: Vec<String>) -> Result<CopiedFiles> {
        let from_dir = self.source.join(dir.as_str());
        let to_dir = self.destination.path(dir);
        io::create_dir_all(&to_dir)?;

        let mut copied = CopiedFiles::new(dir);
        for file in files {
            copied.bytes += io::copy_file(&from_dir.join(&file), &to_dir.join(&file))?;
            copied.files.push(file);
        }
        Ok(copied)
    }
}
