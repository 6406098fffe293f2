//! Basic tests for FileSystem implementations.

use pkg_locator_fs::{FileSystem, NativeFileSystem};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_native_read() {
    let temp_dir = TempDir::new().unwrap();
    let fs = NativeFileSystem::new();

    let manifest = temp_dir.path().join("package.json");
    let contents = r#"{"name":"foo"}"#;
    fs::write(&manifest, contents).unwrap();

    assert_eq!(fs.read_to_string(&manifest).unwrap(), contents);
    assert_eq!(fs.read(&manifest).unwrap(), contents.as_bytes());
}

#[test]
fn test_native_exists() {
    let temp_dir = TempDir::new().unwrap();
    let fs = NativeFileSystem::new();

    let manifest = temp_dir.path().join("package.json");
    assert!(!fs.exists(&manifest).unwrap());

    fs::write(&manifest, "{}").unwrap();
    assert!(fs.exists(&manifest).unwrap());
}

#[test]
fn test_native_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let fs = NativeFileSystem::new();

    let manifest = temp_dir.path().join("package.json");
    let contents = "Hello, World!";
    fs::write(&manifest, contents).unwrap();

    let metadata = fs.metadata(&manifest).unwrap();
    assert!(metadata.exists);
    assert!(metadata.is_file);
    assert!(!metadata.is_dir);
    assert_eq!(metadata.size, contents.len() as u64);

    let dir = fs.metadata(temp_dir.path()).unwrap();
    assert!(dir.is_dir);
    assert_eq!(dir.size, 0);

    let missing = fs.metadata(&temp_dir.path().join("missing.json")).unwrap();
    assert!(!missing.exists);
}

#[test]
fn test_native_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let fs = NativeFileSystem::scoped(temp_dir.path()).unwrap();

    let err = fs
        .read_to_string(&temp_dir.path().join("dist/package.json"))
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_native_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let fs = NativeFileSystem::new();

    let manifest = temp_dir.path().join("package.json");
    fs::write(&manifest, [0xff, 0xfe, 0x00]).unwrap();

    let err = fs.read_to_string(&manifest).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_native_path_traversal_blocked() {
    let temp_dir = TempDir::new().unwrap();
    let fs = NativeFileSystem::scoped(temp_dir.path()).unwrap();

    let malicious_paths = vec![
        "../../../etc/passwd",
        "../../.ssh/id_rsa",
        "foo/../../bar/../../baz",
    ];

    for path in malicious_paths {
        let result = fs.read_to_string(Path::new(path));
        assert!(result.is_err(), "Path traversal not blocked: {}", path);

        if let Err(e) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied);
        }
    }
}

#[test]
fn test_native_scoped_relative_paths() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package.json"), "{}").unwrap();
    let fs = NativeFileSystem::scoped(temp_dir.path()).unwrap();

    assert!(fs.exists(Path::new("package.json")).unwrap());
    assert!(fs.exists(Path::new("dist/../package.json")).unwrap());
}

#[test]
fn test_native_scoped_root_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    assert!(NativeFileSystem::scoped(temp_dir.path().join("missing")).is_err());
}

#[cfg(feature = "memory")]
mod memory_tests {
    use super::*;
    use pkg_locator_fs::MemoryFileSystem;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn test_memory_read() {
        let mut files = HashMap::new();
        files.insert(
            PathBuf::from("/project/package.json"),
            br#"{"name":"foo"}"#.to_vec(),
        );

        let fs = MemoryFileSystem::new(files);

        let contents = fs
            .read_to_string(Path::new("/project/package.json"))
            .unwrap();
        assert_eq!(contents, r#"{"name":"foo"}"#);
    }

    #[test]
    fn test_memory_exists() {
        let fs = MemoryFileSystem::empty();
        fs.add_file("/project/package.json", "{}");

        assert!(fs.exists(Path::new("/project/package.json")).unwrap());
        assert!(!fs.exists(Path::new("/project/missing.json")).unwrap());
    }

    #[test]
    fn test_memory_missing_and_invalid_utf8() {
        let fs = MemoryFileSystem::empty();
        fs.add_file("/project/package.json", vec![0xff, 0xfe]);

        let err = fs
            .read_to_string(Path::new("/project/package.json"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

        let err = fs.read(Path::new("/project/other.json")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
