use assert_fs::prelude::*;
use export_fs::{Error, NormalizedPath, io};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("lib/CMakeLists.txt"));

    io::write_atomic(&path, b"project(lib)").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "project(lib)");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("README.txt"));

    io::write_text(&path, "STADIC").unwrap();

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["README.txt".to_string()]);
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.txt");
    let err = io::read_text(&path).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_copy_file_copies_bytes() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/lib/logging.cpp").write_str("int x;").unwrap();

    let from = NormalizedPath::new(temp.path().join("src/lib/logging.cpp"));
    let to = NormalizedPath::new(temp.path().join("out/lib/logging.cpp"));
    let bytes = io::copy_file(&from, &to).unwrap();

    assert_eq!(bytes, 6);
    temp.child("out/lib/logging.cpp").assert("int x;");
}

#[test]
fn test_copy_file_missing_source_is_source_missing() {
    let temp = TempDir::new().unwrap();
    let from = NormalizedPath::new(temp.path().join("lib/absent.cpp"));
    let to = NormalizedPath::new(temp.path().join("out/absent.cpp"));

    let err = io::copy_file(&from, &to).unwrap_err();

    assert!(matches!(err, Error::SourceMissing { .. }));
    assert!(!to.exists());
}

#[test]
fn test_copy_file_rejects_directory_source() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("lib")).unwrap();
    let from = NormalizedPath::new(temp.path().join("lib"));
    let to = NormalizedPath::new(temp.path().join("out/lib"));

    assert!(matches!(
        io::copy_file(&from, &to),
        Err(Error::SourceMissing { .. })
    ));
}

#[test]
fn test_copy_tree_preserves_structure() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/dependencies/jsoncpp/jsoncpp.cpp")
        .write_str("json")
        .unwrap();
    temp.child("src/dependencies/jsoncpp/json/json.h")
        .write_str("header")
        .unwrap();
    temp.child("src/dependencies/boost-geometry-1_57.tar.gz")
        .write_binary(&[0x1f, 0x8b, 0x08])
        .unwrap();
    temp.child("src/dependencies/empty").create_dir_all().unwrap();

    let from = NormalizedPath::new(temp.path().join("src/dependencies"));
    let to = NormalizedPath::new(temp.path().join("out/dependencies"));
    let copied = io::copy_tree(&from, &to).unwrap();

    let copied: Vec<_> = copied
        .iter()
        .map(|(p, bytes)| (p.as_str().to_string(), *bytes))
        .collect();
    assert_eq!(
        copied,
        vec![
            ("boost-geometry-1_57.tar.gz".to_string(), 3),
            ("jsoncpp/json/json.h".to_string(), 6),
            ("jsoncpp/jsoncpp.cpp".to_string(), 4),
        ]
    );

    temp.child("out/dependencies/jsoncpp/json/json.h")
        .assert("header");
    temp.child("out/dependencies/empty")
        .assert(predicate::path::is_dir());
    let archive = fs::read(temp.path().join("out/dependencies/boost-geometry-1_57.tar.gz")).unwrap();
    assert_eq!(archive, vec![0x1f, 0x8b, 0x08]);
}

#[test]
fn test_copy_tree_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    let from = NormalizedPath::new(temp.path().join("dependencies"));
    let to = NormalizedPath::new(temp.path().join("out/dependencies"));

    let err = io::copy_tree(&from, &to).unwrap_err();
    assert!(err.is_not_found());
    assert!(!to.exists());
}

#[test]
fn test_create_dir_exclusive_creates_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested/export"));

    io::create_dir_exclusive(&path).unwrap();

    assert!(path.is_dir());
}

#[test]
fn test_create_dir_exclusive_refuses_existing_dir() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path());

    let err = io::create_dir_exclusive(&path).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
}

#[test]
fn test_create_dir_exclusive_refuses_existing_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("export");
    fs::write(&file, "not a directory").unwrap();

    let err = io::create_dir_exclusive(&NormalizedPath::new(&file)).unwrap_err();

    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(fs::read_to_string(&file).unwrap(), "not a directory");
}
