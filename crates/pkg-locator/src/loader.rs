//! Reading and parsing the located manifest.

use crate::manifest::PackageManifest;
use crate::{Error, Locator, ModuleLocation, Result};
use pkg_locator_fs::{DefaultFileSystem, FileSystem};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Locates a module's `package.json` and parses it.
///
/// Each call does exactly one read; nothing is cached between calls.
pub struct Loader<F: FileSystem = DefaultFileSystem> {
    fs: Arc<F>,
    locator: Locator,
}

#[cfg(feature = "native-fs")]
impl Loader {
    /// Loader over the real filesystem with the default npm configuration.
    pub fn new() -> Self {
        Self::with_filesystem(Arc::new(pkg_locator_fs::NativeFileSystem::new()), Locator::default())
    }
}

#[cfg(feature = "native-fs")]
impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Loader<F> {
    /// Loader with a custom FileSystem and locator.
    pub fn with_filesystem(fs: Arc<F>, locator: Locator) -> Self {
        Self { fs, locator }
    }

    /// The locator used to resolve manifest paths.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Resolve the manifest path without reading it.
    pub fn locate(&self, start: impl Into<ModuleLocation>, hint: Option<&str>) -> Result<PathBuf> {
        self.locator.locate(start, hint)
    }

    /// Parsed contents of the manifest governing `start`, verbatim.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `start` can't be normalized
    /// - `PackageJsonNotFound` if the manifest is missing or unreadable
    /// - `PackageJsonParse` if it isn't valid JSON
    pub fn load(&self, start: impl Into<ModuleLocation>, hint: Option<&str>) -> Result<Value> {
        self.load_as(start, hint)
    }

    /// The manifest's identity fields and the rest of its contents.
    pub fn load_manifest(
        &self,
        start: impl Into<ModuleLocation>,
        hint: Option<&str>,
    ) -> Result<PackageManifest> {
        self.load_as(start, hint)
    }

    /// Deserialize the manifest into any shape. A shape mismatch is reported
    /// as `PackageJsonParse`.
    pub fn load_as<T: DeserializeOwned>(
        &self,
        start: impl Into<ModuleLocation>,
        hint: Option<&str>,
    ) -> Result<T> {
        let path = self.locator.locate(start, hint)?;
        let contents = self.read(&path)?;
        serde_json::from_str(&contents).map_err(|source| Error::PackageJsonParse { path, source })
    }

    fn read(&self, path: &Path) -> Result<String> {
        trace!(path = %path.display(), "Reading package manifest");
        self.fs
            .read_to_string(path)
            .map_err(|source| Error::PackageJsonNotFound {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Load the manifest for `start` from disk with the default npm configuration.
///
/// ```no_run
/// let pkg = pkg_locator::load_package_json("file:///work/foo/dist/index.js", None).unwrap();
/// println!("{} {}", pkg["name"], pkg["version"]);
/// ```
#[cfg(feature = "native-fs")]
pub fn load_package_json(start: impl Into<ModuleLocation>, hint: Option<&str>) -> Result<Value> {
    Loader::new().load(start, hint)
}
