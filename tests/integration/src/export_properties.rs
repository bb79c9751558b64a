//! Export behaviour checked across the fs, git and core crates together,
//! starting from a profile file the way the CLI does.

use std::collections::BTreeSet;
use std::fs;

use export_core::{Error, ExportOptions, Profile, export};
use export_fs::NormalizedPath;
use export_git::GitClient;
use export_test_utils::{SourceTree, list_dir, snapshot_files};
use pretty_assertions::assert_eq;

const PROFILE: &str = r#"{
  "library": { "modules": ["foo"], "headers": ["api.h"] },
  "utilities": { "programs": ["tool"] }
}"#;

fn tree() -> SourceTree {
    SourceTree::new()
        .with_module("foo")
        .with_module("bar")
        .with_header("api.h")
        .with_header("internal.h")
        .with_utility("tool")
        .with_utility("other")
        .with_file("profile.json", PROFILE)
}

fn options(tree: &SourceTree) -> ExportOptions {
    ExportOptions::new(tree.source(), tree.destination())
        .with_git(GitClient::new(tree.root().join("does/not/exist/git")))
}

fn allow(tree: &SourceTree) -> export_core::AllowList {
    Profile::load(&NormalizedPath::new(tree.source().join("profile.json")))
        .unwrap()
        .allow_list()
        .unwrap()
}

fn manifest_line<'a>(text: &'a str, prefix: &str) -> Vec<&'a str> {
    text.lines().filter(|l| l.starts_with(prefix)).collect()
}

#[test]
fn library_manifest_lists_exactly_the_selected_files() {
    let tree = tree();
    export(&options(&tree), &allow(&tree)).unwrap();

    let lib = fs::read_to_string(tree.destination().join("lib/CMakeLists.txt")).unwrap();

    assert_eq!(manifest_line(&lib, "set(SRCS"), vec!["set(SRCS foo.cpp)"]);
    assert_eq!(manifest_line(&lib, "set(HDRS"), vec!["set(HDRS api.h foo.h)"]);
    assert_eq!(
        list_dir(&tree.destination().join("lib")),
        vec!["CMakeLists.txt", "api.h", "foo.cpp", "foo.h"]
    );
}

#[test]
fn utilities_manifest_declares_one_linked_executable() {
    let tree = tree();
    export(&options(&tree), &allow(&tree)).unwrap();

    let utilities =
        fs::read_to_string(tree.destination().join("utilities/CMakeLists.txt")).unwrap();

    assert_eq!(
        manifest_line(&utilities, "add_executable("),
        vec!["add_executable(tool tool.cpp)"]
    );
    assert_eq!(
        manifest_line(&utilities, "target_link_libraries("),
        vec!["target_link_libraries(tool stadic_core)"]
    );
    assert_eq!(
        list_dir(&tree.destination().join("utilities")),
        vec!["CMakeLists.txt", "tool.cpp"]
    );
}

#[test]
fn nothing_outside_the_selection_is_copied() {
    let tree = tree();
    export(&options(&tree), &allow(&tree)).unwrap();

    let exported: BTreeSet<String> = snapshot_files(&tree.destination()).into_keys().collect();
    let expected: BTreeSet<String> = [
        "CMakeLists.txt",
        "README.txt",
        "dependencies/jsoncpp/json/json.h",
        "dependencies/jsoncpp/jsoncpp.cpp",
        "lib/CMakeLists.txt",
        "lib/api.h",
        "lib/foo.cpp",
        "lib/foo.h",
        "utilities/CMakeLists.txt",
        "utilities/tool.cpp",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    assert_eq!(exported, expected);
}

#[test]
fn missing_client_yields_unknown_revision() {
    let tree = tree();
    let report = export(&options(&tree), &allow(&tree)).unwrap();

    assert_eq!(report.banner.revision.to_string(), "UNKNOWN");
    let readme = fs::read_to_string(tree.destination().join("README.txt")).unwrap();
    assert!(readme.contains("git commit UNKNOWN on "));
}

#[test]
fn existing_destination_is_refused_before_any_write() {
    let tree = tree();
    fs::create_dir_all(tree.destination()).unwrap();
    let before = snapshot_files(tree.root());

    let err = export(&options(&tree), &allow(&tree)).unwrap_err();

    assert!(matches!(err, Error::DestinationExists { .. }));
    assert_eq!(snapshot_files(tree.root()), before);
    assert!(list_dir(&tree.destination()).is_empty());
}

#[test]
fn rerun_fails_and_keeps_first_export() {
    let tree = tree();
    export(&options(&tree), &allow(&tree)).unwrap();
    let first = snapshot_files(&tree.destination());

    let err = export(&options(&tree), &allow(&tree)).unwrap_err();

    assert!(err.is_destination_exists());
    assert_eq!(snapshot_files(&tree.destination()), first);
}
