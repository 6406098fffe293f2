//! Error types for pkg-locator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using pkg-locator Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or loading a package manifest.
#[derive(Debug, Error)]
pub enum Error {
    /// The start location can't be turned into an absolute filesystem path.
    #[error("Invalid module location '{input}': {reason}")]
    InvalidInput {
        /// The location as given by the caller.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The resolved manifest doesn't exist or can't be read.
    #[error("package.json not found at {path}: {source}")]
    PackageJsonNotFound {
        /// The resolved manifest path.
        path: PathBuf,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest exists but isn't valid JSON (or doesn't fit the requested shape).
    #[error("JSON parse error in {path}: {source}")]
    PackageJsonParse {
        /// The resolved manifest path.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Locator configuration is invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// TOML parsing error in a locator configuration fragment.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
