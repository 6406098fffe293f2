//! Normalization of module locations (paths and `file:` URLs).

use crate::{Error, Result};
use pkg_locator_fs::normalize_lexically;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Where the requesting module lives.
///
/// Accepts whatever a module usually knows about itself: its own file path,
/// or its `file:` URL (the form ESM exposes as `import.meta.url`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleLocation {
    /// A filesystem path. Relative paths are taken from the working directory.
    Path(PathBuf),
    /// A parsed URL; only the `file` scheme is accepted.
    Url(Url),
    /// Caller-supplied text, parsed as a `file:` URL or a path on use.
    Specifier(String),
}

impl ModuleLocation {
    /// Absolute, lexically normalized path of the module file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty input, malformed or non-`file` URLs,
    /// and paths that can't be made absolute.
    pub fn to_file_path(&self) -> Result<PathBuf> {
        let path = match self {
            Self::Path(path) => path.clone(),
            Self::Url(url) => url_to_path(url)?,
            Self::Specifier(text) => specifier_to_path(text)?,
        };

        if path.as_os_str().is_empty() {
            return Err(Error::invalid_input(self.to_string(), "empty path"));
        }

        let absolute = std::path::absolute(&path)
            .map_err(|e| Error::invalid_input(self.to_string(), e.to_string()))?;
        Ok(normalize_lexically(&absolute))
    }

    /// Directory containing the module file.
    pub fn directory(&self) -> Result<PathBuf> {
        let file = self.to_file_path()?;
        file.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::invalid_input(self.to_string(), "path has no parent directory"))
    }
}

fn url_to_path(url: &Url) -> Result<PathBuf> {
    if url.scheme() != "file" {
        return Err(Error::invalid_input(
            url.as_str(),
            format!("unsupported URL scheme '{}'", url.scheme()),
        ));
    }
    url.to_file_path()
        .map_err(|()| Error::invalid_input(url.as_str(), "URL does not name a local file"))
}

fn specifier_to_path(text: &str) -> Result<PathBuf> {
    let is_file_url = text
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("file:"));

    if is_file_url {
        let url = Url::parse(text)
            .map_err(|e| Error::invalid_input(text, format!("malformed file URL: {e}")))?;
        return url_to_path(&url);
    }

    if let Some((scheme, _)) = text.split_once("://") {
        return Err(Error::invalid_input(
            text,
            format!("unsupported URL scheme '{scheme}'"),
        ));
    }

    Ok(PathBuf::from(text))
}

impl fmt::Display for ModuleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url.as_str()),
            Self::Specifier(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ModuleLocation {
    fn from(text: &str) -> Self {
        Self::Specifier(text.to_string())
    }
}

impl From<String> for ModuleLocation {
    fn from(text: String) -> Self {
        Self::Specifier(text)
    }
}

impl From<&String> for ModuleLocation {
    fn from(text: &String) -> Self {
        Self::Specifier(text.clone())
    }
}

impl From<&Path> for ModuleLocation {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ModuleLocation {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&PathBuf> for ModuleLocation {
    fn from(path: &PathBuf) -> Self {
        Self::Path(path.clone())
    }
}

impl From<Url> for ModuleLocation {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<&Url> for ModuleLocation {
    fn from(url: &Url) -> Self {
        Self::Url(url.clone())
    }
}
