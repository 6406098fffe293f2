//! # pkg-locator
//!
//! Find and load the `package.json` that owns a module, whether the module
//! is running from its own source tree or from an installed copy inside
//! `node_modules`.
//!
//! ## Architecture
//!
//! - [`Locator`]: pure path analysis from a module path or `file:` URL to the
//!   authoritative manifest path. Never touches the filesystem.
//! - [`Loader`]: locates, reads through a [`FileSystem`](pkg_locator_fs::FileSystem)
//!   and parses the manifest as JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pkg_locator::{find_package_json, load_package_json};
//!
//! # fn example() -> pkg_locator::Result<()> {
//! // A module compiled to `dist/cli/index.js`, two directories below its manifest.
//! let module = "file:///work/foo/dist/cli/index.js";
//! let path = find_package_json(module, Some("../../package.json"))?;
//! let pkg = load_package_json(module, Some("../../package.json"))?;
//! println!("{}: {}@{}", path.display(), pkg["name"], pkg["version"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

#[cfg(not(any(feature = "native-fs", feature = "memory-fs")))]
compile_error!("enable at least one of the `native-fs` or `memory-fs` features");

pub mod config;
pub mod error;
pub mod loader;
pub mod location;
pub mod locator;
pub mod manifest;

pub use config::{LocatorConfig, DEFAULT_HINT, MANIFEST_NAME, VENDOR_SEGMENT};
pub use error::{Error, Result};
#[cfg(feature = "native-fs")]
pub use loader::load_package_json;
pub use loader::Loader;
pub use location::ModuleLocation;
pub use locator::{find_package_json, InstalledPackage, Locator};
pub use manifest::PackageManifest;
