//! FileSystem trait for platform-agnostic, read-only filesystem operations.

use std::io;
use std::path::{Component, Path, PathBuf};

/// File metadata compatible across backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Whether the path exists.
    pub exists: bool,
    /// Whether the path is a file (false if directory or doesn't exist).
    pub is_file: bool,
    /// Whether the path is a directory.
    pub is_dir: bool,
    /// File size in bytes (0 for directories or non-existent files).
    pub size: u64,
}

impl FileMetadata {
    /// Metadata for a path that does not exist.
    pub fn missing() -> Self {
        Self {
            exists: false,
            is_file: false,
            is_dir: false,
            size: 0,
        }
    }
}

/// Platform-agnostic, read-only filesystem abstraction.
///
/// Manifest lookup only ever reads, so the trait carries no write operations.
/// The loader itself only calls `read_to_string`; `exists` and `metadata` are
/// for embedders that want to check a located path before loading it.
///
/// # Error Handling
///
/// Uses `std::io::Result<T>` for compatibility:
/// - Native: Direct mapping from std::fs errors
/// - Memory: Construct io::Error with appropriate ErrorKind
pub trait FileSystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Read file contents as bytes.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::NotFound` if file doesn't exist.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read file contents as a string.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::NotFound` if file doesn't exist.
    /// Returns `io::ErrorKind::InvalidData` if file is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Get file/directory metadata.
    ///
    /// Returns metadata even if the file doesn't exist (exists=false).
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;
}

/// Normalize a path without touching the filesystem.
///
/// Removes `.` components and folds `..` into the preceding component.
/// A `..` at the root of an absolute path stays at the root, the same way
/// `path.resolve` treats it; leading `..` of a relative path are kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                normalized.push(component.as_os_str());
                depth = 0;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(name) => {
                normalized.push(name);
                depth += 1;
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}
