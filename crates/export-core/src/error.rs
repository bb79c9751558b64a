//! Error types for export-core

use std::path::PathBuf;

/// Result type for export-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during an export
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The destination is already present; nothing was written
    #[error("Destination path {path} already exists")]
    DestinationExists { path: PathBuf },

    /// An allow-list entry is not a usable file name
    #[error("Invalid {category} entry '{name}': {reason}")]
    InvalidEntry {
        category: String,
        name: String,
        reason: String,
    },

    /// Filesystem error from export-fs
    #[error(transparent)]
    Fs(#[from] export_fs::Error),
}

impl Error {
    /// True for the precondition failure that aborts before any write.
    pub fn is_destination_exists(&self) -> bool {
        matches!(self, Self::DestinationExists { .. })
    }
}
