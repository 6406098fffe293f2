//! Resolution of the authoritative `package.json` for a module.
//!
//! Two layouts matter:
//!
//! - **Source mode**: the module sits in its package's own tree. The caller
//!   knows how far the file is from the manifest and says so with a hint
//!   relative to the file's directory (`./package.json` for a file in the
//!   package root, `../package.json` for `src/x.js`, `../../../package.json`
//!   for `dist/a/b/x.js`, and so on).
//! - **Installed mode**: the module sits below a `node_modules` directory.
//!   The installer always puts the package root directly under it (or under
//!   a scope directory), so the root is read off the path and the hint is
//!   ignored.
//!
//! Everything here is string analysis of path segments. Nothing touches the
//! filesystem; a missing manifest only surfaces when the loader reads it.

use crate::config::{LocatorConfig, STORE_PACKAGE_SEGMENT, STORE_SEGMENT};
use crate::{ModuleLocation, Result};
use pkg_locator_fs::normalize_lexically;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A package installed below a vendor directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// The governing vendor directory (the last one in the path).
    pub vendor_dir: PathBuf,

    /// The package root, directly below `vendor_dir`.
    pub root: PathBuf,

    /// Segments between `vendor_dir` and `root`, joined with `/`:
    /// `foo`, `@scope/foo`, or `.store/<id>/package` for store layouts.
    pub name: String,
}

/// Finds the manifest that governs a module.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    config: LocatorConfig,
}

impl Locator {
    /// Create a locator with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn new(config: LocatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Absolute path of the `package.json` that governs `start`.
    ///
    /// `hint` is the manifest's path relative to the directory of `start` when
    /// running from source; `None` uses the configured default
    /// (`../package.json`). It is ignored when `start` is an installed
    /// dependency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `start` can't be normalized to an absolute path.
    pub fn locate(
        &self,
        start: impl Into<ModuleLocation>,
        hint: Option<&str>,
    ) -> Result<PathBuf> {
        let start = start.into();
        let dir = start.directory()?;

        if let Some(installed) = self.installed_package(&dir) {
            let path = installed.root.join(&self.config.manifest_name);
            debug!(
                start = %start,
                package = %installed.name,
                path = %path.display(),
                "Resolved manifest of installed package"
            );
            return Ok(path);
        }

        if let Some(root) = self.build_root(&dir) {
            let path = root.join(&self.config.manifest_name);
            debug!(
                start = %start,
                path = %path.display(),
                "Resolved manifest above build directory"
            );
            return Ok(path);
        }

        let hint = hint.unwrap_or(&self.config.default_hint);
        let path = normalize_lexically(&dir.join(hint));
        debug!(
            start = %start,
            hint,
            path = %path.display(),
            "Resolved manifest from source hint"
        );
        Ok(path)
    }

    /// The installed package containing `dir`, if `dir` lies below a vendor
    /// directory.
    ///
    /// `dir` should already be absolute and normalized. The governing vendor
    /// directory is the last one with at least one segment below it, so a
    /// `dir` that is itself a nested vendor directory belongs to the package
    /// that contains it. Returns `None` when no such vendor directory exists.
    /// A lone scope directory (`<vendor>/@scope`) is taken as the root.
    pub fn installed_package(&self, dir: &Path) -> Option<InstalledPackage> {
        let segments: Vec<&OsStr> = dir.components().map(|c| c.as_os_str()).collect();
        let vendor = OsStr::new(&self.config.vendor_segment);
        let candidates = &segments[..segments.len().saturating_sub(1)];
        let index = candidates.iter().rposition(|segment| *segment == vendor)?;

        let below = &segments[index + 1..];
        let first = below.first()?;

        let depth = match self.store_depth(below) {
            Some(depth) => depth,
            None if first.to_string_lossy().starts_with('@') => below.len().min(2),
            None => 1,
        };

        let vendor_dir: PathBuf = segments[..=index].iter().collect();
        let package = &below[..depth];
        let root = package
            .iter()
            .fold(vendor_dir.clone(), |root, segment| root.join(segment));
        let name = package
            .iter()
            .map(|segment| segment.to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        Some(InstalledPackage {
            vendor_dir,
            root,
            name,
        })
    }

    /// Depth of a `.store/<id>/.../package` root below the vendor directory.
    fn store_depth(&self, below: &[&OsStr]) -> Option<usize> {
        if !self.config.store_layout || below.first() != Some(&OsStr::new(STORE_SEGMENT)) {
            return None;
        }
        below
            .iter()
            .skip(2)
            .position(|segment| *segment == OsStr::new(STORE_PACKAGE_SEGMENT))
            .map(|offset| offset + 3)
    }

    /// Package root for a source module inside the configured build directory.
    fn build_root(&self, dir: &Path) -> Option<PathBuf> {
        let build_dir = OsStr::new(self.config.build_dir.as_deref()?);
        let segments: Vec<&OsStr> = dir.components().map(|c| c.as_os_str()).collect();
        let index = segments.iter().rposition(|segment| *segment == build_dir)?;
        if index == 0 {
            return None;
        }
        Some(segments[..index].iter().collect())
    }
}

/// Locate the manifest for `start` with the default npm configuration.
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use pkg_locator::find_package_json;
/// use std::path::PathBuf;
///
/// let path = find_package_json("/app/node_modules/@scope/foo/dist/a/x.js", None).unwrap();
/// assert_eq!(path, PathBuf::from("/app/node_modules/@scope/foo/package.json"));
///
/// let path = find_package_json("file:///work/foo/dist/a/b/x.js", Some("../../../package.json")).unwrap();
/// assert_eq!(path, PathBuf::from("/work/foo/package.json"));
/// # }
/// ```
pub fn find_package_json(
    start: impl Into<ModuleLocation>,
    hint: Option<&str>,
) -> Result<PathBuf> {
    Locator::default().locate(start, hint)
}
