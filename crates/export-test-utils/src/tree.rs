//! [`SourceTree`] builder for export test scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

/// A scratch workspace holding a source tree at `<tmp>/source` and leaving
/// `<tmp>/export` free as the default export destination.
///
/// The source tree always has the `dependencies/`, `lib/` and `utilities/`
/// directories; `dependencies/` starts with a small jsoncpp stand-in.
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("SourceTree::new: failed to create temp dir");
        let tree = Self { dir };
        for sub in ["dependencies", "lib", "utilities"] {
            fs::create_dir_all(tree.source().join(sub))
                .unwrap_or_else(|e| panic!("SourceTree::new: failed to create {sub}: {e}"));
        }
        tree.with_file("dependencies/jsoncpp/jsoncpp.cpp", "// jsoncpp amalgamation\n")
            .with_file("dependencies/jsoncpp/json/json.h", "// jsoncpp header\n")
    }

    /// Root of the temporary workspace.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the source tree.
    pub fn source(&self) -> PathBuf {
        self.dir.path().join("source")
    }

    /// A destination path that does not exist yet.
    pub fn destination(&self) -> PathBuf {
        self.dir.path().join("export")
    }

    /// Write an arbitrary file relative to the source root.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.source().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("with_file: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("with_file: failed to write {}: {e}", path.display()));
        self
    }

    /// Add `lib/<name>.cpp` and `lib/<name>.h`.
    pub fn with_module(self, name: &str) -> Self {
        self.with_file(&format!("lib/{name}.cpp"), &format!("#include \"{name}.h\"\n"))
            .with_file(&format!("lib/{name}.h"), &format!("// {name}\n"))
    }

    /// Add a header-only file under `lib/`.
    pub fn with_header(self, file_name: &str) -> Self {
        self.with_file(&format!("lib/{file_name}"), &format!("// {file_name}\n"))
    }

    /// Add `utilities/<name>.cpp`.
    pub fn with_utility(self, name: &str) -> Self {
        self.with_file(
            &format!("utilities/{name}.cpp"),
            "int main() { return 0; }\n",
        )
    }
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Read every file under `root` into a map keyed by forward-slash relative
/// path. Returns an empty map when `root` does not exist.
///
/// # Panics
/// Panics if a file under `root` cannot be read.
pub fn snapshot_files(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    if !root.exists() {
        return files;
    }
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|e| panic!("snapshot_files: {e}"))
            .to_string_lossy()
            .replace('\\', "/");
        let content = fs::read(entry.path())
            .unwrap_or_else(|e| panic!("snapshot_files: failed to read {}: {e}", entry.path().display()));
        files.insert(relative, content);
    }
    files
}

/// List the file names directly inside `dir`, sorted.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
