//! Native filesystem implementation using std::fs.

use crate::{normalize_lexically, FileMetadata, FileSystem};
use std::io;
use std::path::{Path, PathBuf};

/// Native filesystem implementation using std::fs.
///
/// An unscoped filesystem reads anywhere; a scoped one refuses paths that
/// resolve outside its root.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {
    root: Option<ScopedRoot>,
}

#[derive(Debug, Clone)]
struct ScopedRoot {
    given: PathBuf,
    canonical: PathBuf,
}

impl ScopedRoot {
    fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.canonical) || path.starts_with(&self.given)
    }
}

impl NativeFileSystem {
    /// Create a filesystem that may read any path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem scoped to a root directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the root doesn't exist or can't be canonicalized.
    pub fn scoped(root: impl AsRef<Path>) -> io::Result<Self> {
        let given = normalize_lexically(&std::path::absolute(root.as_ref())?);
        let canonical = given.canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Root does not exist: {}", root.as_ref().display()),
            )
        })?;

        Ok(Self {
            root: Some(ScopedRoot { given, canonical }),
        })
    }

    /// The canonical root this filesystem is scoped to, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_ref().map(|root| root.canonical.as_path())
    }

    /// Validate that a path is within the root.
    ///
    /// # Security
    ///
    /// Symlinks are resolved before the comparison so a link inside the root
    /// can't be used to read outside it.
    fn validate_path(&self, path: &Path) -> io::Result<PathBuf> {
        let Some(root) = &self.root else {
            return Ok(path.to_path_buf());
        };

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.canonical.join(path)
        };

        // Missing files are checked through their parent so NotFound surfaces
        // from the read rather than from validation.
        let canonical_path = match absolute.canonicalize() {
            Ok(path) => path,
            Err(_) => match (absolute.parent(), absolute.file_name()) {
                (Some(parent), Some(file_name)) => match parent.canonicalize() {
                    Ok(canonical_parent) => canonical_parent.join(file_name),
                    Err(_) => normalize_lexically(&absolute),
                },
                _ => normalize_lexically(&absolute),
            },
        };

        if !root.contains(&canonical_path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!(
                    "Path traversal detected: {} is outside root {}",
                    canonical_path.display(),
                    root.canonical.display()
                ),
            ));
        }

        Ok(canonical_path)
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        let validated = self.validate_path(path)?;
        Ok(validated.exists())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let validated = self.validate_path(path)?;
        std::fs::read(&validated)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let validated = self.validate_path(path)?;
        std::fs::read_to_string(&validated)
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let validated = self.validate_path(path)?;
        match std::fs::metadata(&validated) {
            Ok(meta) => Ok(FileMetadata {
                exists: true,
                is_file: meta.is_file(),
                is_dir: meta.is_dir(),
                size: if meta.is_file() { meta.len() } else { 0 },
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FileMetadata::missing()),
            Err(e) => Err(e),
        }
    }
}
