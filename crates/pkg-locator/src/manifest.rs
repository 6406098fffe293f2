//! Typed view of a loaded `package.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The identity fields of a package manifest, plus everything else verbatim.
///
/// Neither `name` nor `version` is required; nothing about the manifest's
/// schema is validated beyond their type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package name, `@scope/name` for scoped packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Package version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// All remaining top-level fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PackageManifest {
    /// `name@version`, when both are present.
    pub fn id(&self) -> Option<String> {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => Some(format!("{name}@{version}")),
            _ => None,
        }
    }

    /// Whether the package name is scoped (`@scope/name`).
    pub fn is_scoped(&self) -> bool {
        self.name.as_deref().is_some_and(|name| name.starts_with('@'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_unknown_fields() {
        let manifest: PackageManifest = serde_json::from_value(json!({
            "name": "@scoped/foo",
            "version": "3.2.1",
            "type": "module",
            "exports": { ".": "./dist/index.js" }
        }))
        .unwrap();

        assert_eq!(manifest.id().as_deref(), Some("@scoped/foo@3.2.1"));
        assert!(manifest.is_scoped());
        assert_eq!(manifest.fields["type"], json!("module"));
        assert!(!manifest.fields.contains_key("name"));
    }

    #[test]
    fn test_identity_fields_are_optional() {
        let manifest: PackageManifest = serde_json::from_value(json!({ "private": true })).unwrap();
        assert!(manifest.name.is_none());
        assert!(manifest.id().is_none());
        assert!(!manifest.is_scoped());
    }
}
