//! File I/O used by the export pipeline
//!
//! Every function maps `std::io::Error` into [`Error`] with the offending
//! path attached. Copies never overwrite silently: callers create fresh
//! directories and the copy itself is a plain byte copy.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use fs2::FileExt;
use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a reader never observes a partially
/// written manifest.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create `path` and any missing parents.
pub fn create_dir_all(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Create exactly one new directory, failing if anything already occupies
/// the path.
///
/// Missing parents are created first. The final step is an exclusive
/// `create_dir`, so an entry that appears concurrently is still reported as
/// [`Error::AlreadyExists`].
pub fn create_dir_exclusive(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();

    if path.exists() {
        return Err(Error::AlreadyExists { path: native_path });
    }

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::create_dir(&native_path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => Error::AlreadyExists {
            path: native_path.clone(),
        },
        _ => Error::io(&native_path, e),
    })
}

/// Copy a single file, creating the destination's parent directory.
///
/// A missing source is reported as [`Error::SourceMissing`]. Returns the
/// number of bytes copied.
pub fn copy_file(from: &NormalizedPath, to: &NormalizedPath) -> Result<u64> {
    let source = from.to_native();
    let target = to.to_native();

    if !source.is_file() {
        return Err(Error::SourceMissing { path: source });
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let bytes = fs::copy(&source, &target).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::SourceMissing {
            path: source.clone(),
        },
        _ => Error::io(&target, e),
    })?;

    tracing::debug!("Copied {} -> {} ({} bytes)", from, to, bytes);
    Ok(bytes)
}

/// Recursively copy the directory tree at `from` into `to`.
///
/// Directory structure is reproduced exactly, including empty directories.
/// Symlinks are followed and their targets copied as regular content.
/// Returns the destination-relative path and byte count of every file
/// written, in walk order (sorted by file name within each directory).
pub fn copy_tree(
    from: &NormalizedPath,
    to: &NormalizedPath,
) -> Result<Vec<(NormalizedPath, u64)>> {
    let source_root = from.to_native();

    if !source_root.is_dir() {
        return Err(Error::SourceMissing { path: source_root });
    }

    let mut copied = Vec::new();

    for entry in WalkDir::new(&source_root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::Walk {
            path: e
                .path()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| source_root.clone()),
            message: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(&source_root)
            .map(NormalizedPath::new)
            .map_err(|e| Error::Walk {
                path: entry.path().to_path_buf(),
                message: e.to_string(),
            })?;

        let target = if relative.as_str().is_empty() {
            to.clone()
        } else {
            to.join(relative.as_str())
        };

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            let bytes = copy_file(&NormalizedPath::new(entry.path()), &target)?;
            copied.push((relative, bytes));
        }
    }

    Ok(copied)
}
