//! Destination guard
//!
//! An export only ever writes into a directory it created itself. If the
//! destination is already present the export is refused outright, before
//! anything is written.

use export_fs::{NormalizedPath, TreePath, io};

use crate::{Error, Result};

/// An export destination that this process created and owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    root: NormalizedPath,
}

impl Destination {
    /// Create the destination directory, refusing if the path exists.
    ///
    /// Missing parent directories are created. A directory that appears
    /// between the existence check and the create is also refused.
    pub fn claim(path: impl Into<NormalizedPath>) -> Result<Self> {
        let root = path.into();

        if root.exists() {
            return Err(Error::DestinationExists {
                path: root.to_native(),
            });
        }

        io::create_dir_exclusive(&root).map_err(|e| match e {
            export_fs::Error::AlreadyExists { path } => Error::DestinationExists { path },
            other => Error::Fs(other),
        })?;

        tracing::info!("Created export destination {}", root);
        Ok(Self { root })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Path of a well-known entry inside the destination.
    pub fn path(&self, entry: TreePath) -> NormalizedPath {
        self.root.join(entry.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn claim_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stadic-export");

        let destination = Destination::claim(path.as_path()).unwrap();

        assert!(path.is_dir());
        assert_eq!(
            destination.path(TreePath::Library).to_native(),
            path.join("lib")
        );
    }

    #[test]
    fn claim_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("releases/2026/stadic-export");

        Destination::claim(path.as_path()).unwrap();

        assert!(path.is_dir());
    }

    #[test]
    fn claim_refuses_existing_directory_without_writing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stadic-export");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("README.txt"), "previous export").unwrap();

        let err = Destination::claim(path.as_path()).unwrap_err();

        assert!(err.is_destination_exists());
        assert_eq!(
            fs::read_to_string(path.join("README.txt")).unwrap(),
            "previous export"
        );
        assert_eq!(fs::read_dir(&path).unwrap().count(), 1);
    }

    #[test]
    fn claim_refuses_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stadic-export");
        fs::write(&path, "").unwrap();

        let err = Destination::claim(path.as_path()).unwrap_err();
        assert!(err.is_destination_exists());
    }
}
