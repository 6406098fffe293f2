//! Locator configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Directory name the npm ecosystem installs dependencies into.
pub const VENDOR_SEGMENT: &str = "node_modules";

/// File name of a package manifest.
pub const MANIFEST_NAME: &str = "package.json";

/// Manifest path relative to the directory of a source file one level below
/// the package root (`src/index.js`).
pub const DEFAULT_HINT: &str = "../package.json";

/// Store layouts keep unpacked packages under `<vendor>/.store/<id>/package`.
pub(crate) const STORE_SEGMENT: &str = ".store";
pub(crate) const STORE_PACKAGE_SEGMENT: &str = "package";

/// Immutable settings for [`Locator`](crate::Locator).
///
/// The defaults describe the npm ecosystem. Embedding hosts can carry this in
/// their own TOML config:
///
/// ```
/// use pkg_locator::LocatorConfig;
///
/// let config = LocatorConfig::from_toml_str(r#"build_dir = "dist""#).unwrap();
/// assert_eq!(config.build_dir.as_deref(), Some("dist"));
/// assert_eq!(config.vendor_segment, "node_modules");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Directory name marking an installed-dependency subtree.
    pub vendor_segment: String,

    /// Manifest file name at a package root.
    pub manifest_name: String,

    /// Hint used when the caller passes none.
    pub default_hint: String,

    /// Recognize `<vendor>/.store/<id>/package` roots.
    pub store_layout: bool,

    /// In source mode, treat the last directory with this name as sitting
    /// directly in the package root and ignore the hint.
    pub build_dir: Option<String>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            vendor_segment: VENDOR_SEGMENT.to_string(),
            manifest_name: MANIFEST_NAME.to_string(),
            default_hint: DEFAULT_HINT.to_string(),
            store_layout: true,
            build_dir: None,
        }
    }
}

impl LocatorConfig {
    /// Parse and validate a TOML fragment. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name is a single, non-empty path segment.
    pub fn validate(&self) -> Result<()> {
        validate_segment("vendor_segment", &self.vendor_segment)?;
        validate_segment("manifest_name", &self.manifest_name)?;
        if let Some(build_dir) = &self.build_dir {
            validate_segment("build_dir", build_dir)?;
        }
        if self.default_hint.is_empty() {
            return Err(Error::InvalidConfig {
                message: "default_hint must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_segment(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(Error::InvalidConfig {
            message: format!("{field} must name a directory or file, got '{value}'"),
        });
    }
    if value.chars().any(std::path::is_separator) {
        return Err(Error::InvalidConfig {
            message: format!("{field} must be a single path segment, got '{value}'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_npm() {
        let config = LocatorConfig::default();
        assert_eq!(config.vendor_segment, "node_modules");
        assert_eq!(config.manifest_name, "package.json");
        assert_eq!(config.default_hint, "../package.json");
        assert!(config.store_layout);
        assert!(config.build_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            LocatorConfig::from_toml_str("").unwrap(),
            LocatorConfig::default()
        );
    }

    #[test]
    fn test_toml_overrides() {
        let config = LocatorConfig::from_toml_str(
            r#"
vendor_segment = "vendor"
store_layout = false
"#,
        )
        .unwrap();
        assert_eq!(config.vendor_segment, "vendor");
        assert!(!config.store_layout);
        assert_eq!(config.manifest_name, "package.json");
    }

    #[test]
    fn test_rejects_multi_segment_names() {
        let err = LocatorConfig::from_toml_str(r#"vendor_segment = "a/node_modules""#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));

        let err = LocatorConfig::from_toml_str(r#"build_dir = """#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = LocatorConfig::from_toml_str("vendor_segment = ").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }
}
