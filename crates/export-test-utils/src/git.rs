//! Fake revision-control clients.
//!
//! Each fixture writes an executable shell script that mimics the one
//! `git rev-parse --short HEAD` call the exporter makes. Unix only.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a script at `dir/name` that prints `revision` and exits 0.
///
/// # Panics
/// Panics if the script cannot be written or made executable.
pub fn fake_git_client(dir: &Path, name: &str, revision: &str) -> PathBuf {
    write_script(
        dir,
        name,
        &format!("#!/bin/sh\necho \"{revision}\"\nexit 0\n"),
    )
}

/// Write a script at `dir/name` that prints an error and exits 128, the
/// way git does outside a repository.
///
/// # Panics
/// Panics if the script cannot be written or made executable.
pub fn failing_git_client(dir: &Path, name: &str) -> PathBuf {
    write_script(
        dir,
        name,
        "#!/bin/sh\necho \"fatal: not a git repository\" >&2\nexit 128\n",
    )
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("write_script: failed to create {}: {e}", parent.display()));
    }
    fs::write(&path, body)
        .unwrap_or_else(|e| panic!("write_script: failed to write {}: {e}", path.display()));
    make_executable(&path);
    path
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("make_executable: {}: {e}", path.display()));
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
