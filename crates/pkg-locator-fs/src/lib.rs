//! Read-only filesystem abstraction for pkg-locator.
//!
//! This crate provides a `FileSystem` trait that works on native platforms
//! (using `std::fs`) and in hosts without a disk (using in-memory storage).
//!
//! # Example
//!
//! ```no_run
//! use pkg_locator_fs::{FileSystem, NativeFileSystem};
//! use std::path::Path;
//!
//! # fn main() -> std::io::Result<()> {
//! let fs = NativeFileSystem::new();
//! let contents = fs.read_to_string(Path::new("package.json"))?;
//! println!("{}", contents);
//! # Ok(())
//! # }
//! ```

mod file_system;
pub use file_system::{normalize_lexically, FileMetadata, FileSystem};

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "native")]
pub use native::NativeFileSystem;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "memory")]
pub use memory::MemoryFileSystem;

#[cfg(feature = "native")]
pub use NativeFileSystem as DefaultFileSystem;

#[cfg(all(not(feature = "native"), feature = "memory"))]
pub use MemoryFileSystem as DefaultFileSystem;
