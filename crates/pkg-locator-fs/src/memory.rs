//! In-memory filesystem implementation.

use crate::{normalize_lexically, FileMetadata, FileSystem};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// In-memory filesystem implementation.
///
/// Files are supplied up front by the host (a WASM runtime, a bundler's
/// virtual filesystem, a test) and stored in memory. Directories exist
/// implicitly as ancestors of stored files.
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<HashMap>>` for interior mutability:
/// - Multiple concurrent readers (common case)
/// - Exclusive writer (rare: only during setup)
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create an in-memory filesystem from pre-loaded files.
    pub fn new(files: HashMap<PathBuf, Vec<u8>>) -> Self {
        let files = files
            .into_iter()
            .map(|(path, contents)| (normalize_lexically(&path), contents))
            .collect();

        Self {
            files: Arc::new(RwLock::new(files)),
        }
    }

    /// Create an empty in-memory filesystem.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a file (used during setup). Replaces any previous contents.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        self.files
            .write()
            .insert(normalize_lexically(path.as_ref()), contents.into());
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Whether no files are stored.
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }

    fn is_dir(&self, normalized: &Path) -> bool {
        self.files
            .read()
            .keys()
            .any(|file| file != normalized && file.starts_with(normalized))
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        let normalized = normalize_lexically(path);
        Ok(self.files.read().contains_key(&normalized) || self.is_dir(&normalized))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let normalized = normalize_lexically(path);
        if let Some(contents) = self.files.read().get(&normalized) {
            return Ok(contents.clone());
        }

        if self.is_dir(&normalized) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Is a directory: {}", normalized.display()),
            ));
        }

        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {}", normalized.display()),
        ))
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let normalized = normalize_lexically(path);
        if let Some(contents) = self.files.read().get(&normalized) {
            return Ok(FileMetadata {
                exists: true,
                is_file: true,
                is_dir: false,
                size: contents.len() as u64,
            });
        }

        if self.is_dir(&normalized) {
            return Ok(FileMetadata {
                exists: true,
                is_file: false,
                is_dir: true,
                size: 0,
            });
        }

        Ok(FileMetadata::missing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_are_implicit() {
        let fs = MemoryFileSystem::empty();
        fs.add_file("/project/node_modules/foo/package.json", "{}");

        assert!(fs.exists(Path::new("/project/node_modules")).unwrap());
        assert!(fs.metadata(Path::new("/project/node_modules/foo")).unwrap().is_dir);
        assert!(!fs.exists(Path::new("/project/node_modules/bar")).unwrap());
    }

    #[test]
    fn test_paths_are_normalized() {
        let fs = MemoryFileSystem::empty();
        fs.add_file("/project/./dist/../package.json", "{}");

        assert_eq!(fs.len(), 1);
        assert!(fs.exists(Path::new("/project/package.json")).unwrap());
        assert_eq!(
            fs.read_to_string(Path::new("/project/dist/a/../../package.json"))
                .unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_read_directory_fails() {
        let fs = MemoryFileSystem::empty();
        fs.add_file("/project/package.json", "{}");

        let err = fs.read(Path::new("/project")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
