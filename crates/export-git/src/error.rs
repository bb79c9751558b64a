//! Error types for export-git

use std::path::PathBuf;

/// Result type for export-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying the revision-control client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Revision-control client not found at {path}")]
    ClientNotFound { path: PathBuf },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with code {code}: {stderr}")]
    CommandFailed {
        program: PathBuf,
        code: i32,
        stderr: String,
    },

    #[error("{program} printed no revision")]
    EmptyOutput { program: PathBuf },
}
