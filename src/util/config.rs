//! TOML manifest configuration.
//!
//! The built-in h3 manifest is fixed at compile time. Other extension
//! targets can describe the same two lists in a TOML file:
//!
//! ```toml
//! [extension]
//! name = "h3"
//! include_directories = ["extension/h3/include"]
//! source_files = ["extension/h3/h3-extension.cpp"]
//! ```
//!
//! Paths in the file are always `/`-delimited and go through the same
//! normalization as the built-in literals.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::manifest::{
    ExtensionManifest, EXTENSION_NAME, INCLUDE_DIRECTORY_LITERALS, SOURCE_FILE_LITERALS,
};
use crate::util::path::Separator;

/// Errors raised when turning a config into a manifest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A manifest list must hold at least one entry.
    #[error("`{field}` must list at least one path")]
    EmptyList { field: &'static str },

    /// The extension name is blank.
    #[error("extension name must not be empty")]
    MissingName,
}

/// Manifest configuration file.
///
/// [`ManifestConfig::default`] describes the h3 extension. A file on disk
/// never inherits from it: every list it leaves out is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Extension build target
    pub extension: ExtensionSection,
}

/// The `[extension]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSection {
    /// Extension target name
    #[serde(default)]
    pub name: String,

    /// Include directories, `/`-delimited
    #[serde(default)]
    pub include_directories: Vec<String>,

    /// Source files, `/`-delimited
    #[serde(default)]
    pub source_files: Vec<String>,
}

impl Default for ExtensionSection {
    fn default() -> Self {
        ExtensionSection {
            name: EXTENSION_NAME.to_string(),
            include_directories: INCLUDE_DIRECTORY_LITERALS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            source_files: SOURCE_FILE_LITERALS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ManifestConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest config: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse manifest config: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration, falling back to the h3 defaults if the file is
    /// missing or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load manifest config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize manifest config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write manifest config: {}", path.display()))?;

        Ok(())
    }

    /// Build a manifest using the host separator.
    pub fn into_manifest(self) -> Result<ExtensionManifest, ConfigError> {
        self.into_manifest_with(Separator::host())
    }

    /// Build a manifest using an explicit separator.
    pub fn into_manifest_with(
        self,
        separator: Separator,
    ) -> Result<ExtensionManifest, ConfigError> {
        let ExtensionSection {
            name,
            include_directories,
            source_files,
        } = self.extension;

        if name.trim().is_empty() {
            return Err(ConfigError::MissingName);
        }
        if include_directories.is_empty() {
            return Err(ConfigError::EmptyList {
                field: "include_directories",
            });
        }
        if source_files.is_empty() {
            return Err(ConfigError::EmptyList {
                field: "source_files",
            });
        }

        Ok(ExtensionManifest::with_separator(
            name,
            include_directories,
            source_files,
            separator,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_builtin() {
        let manifest = ManifestConfig::default().into_manifest().unwrap();
        assert_eq!(&manifest, crate::core::manifest::manifest());
    }

    #[test]
    fn test_parse_config() {
        let config = ManifestConfig::parse(
            r#"
[extension]
name = "geo"
include_directories = ["extension/geo/include", "third_party/geo"]
source_files = ["extension/geo/geo.cpp"]
"#,
        )
        .unwrap();

        assert_eq!(config.extension.name, "geo");
        assert_eq!(
            config.extension.include_directories,
            vec!["extension/geo/include", "third_party/geo"]
        );

        let manifest = config.into_manifest_with(Separator::Backslash).unwrap();
        assert_eq!(
            manifest.include_directories(),
            ["extension\\geo\\include", "third_party\\geo"]
        );
        assert_eq!(manifest.source_files(), ["extension\\geo\\geo.cpp"]);
    }

    #[test]
    fn test_missing_lists_are_not_inherited() {
        let config = ManifestConfig::parse(
            "[extension]\nname = \"geo\"\nsource_files = [\"extension/geo/geo.cpp\"]\n",
        )
        .unwrap();
        assert!(config.extension.include_directories.is_empty());
        assert_eq!(
            config.into_manifest_with(Separator::Slash).unwrap_err(),
            ConfigError::EmptyList {
                field: "include_directories"
            }
        );

        let config = ManifestConfig::parse(
            "[extension]\nname = \"geo\"\ninclude_directories = [\"extension/geo/include\"]\n",
        )
        .unwrap();
        assert!(config.extension.source_files.is_empty());
        assert_eq!(
            config.into_manifest().unwrap_err(),
            ConfigError::EmptyList {
                field: "source_files"
            }
        );
    }

    #[test]
    fn test_missing_name_rejected() {
        let config = ManifestConfig::parse(
            "[extension]\ninclude_directories = [\"a\"]\nsource_files = [\"a/b.cpp\"]\n",
        )
        .unwrap();
        assert_eq!(config.into_manifest().unwrap_err(), ConfigError::MissingName);
    }

    #[test]
    fn test_missing_extension_section() {
        assert!(ManifestConfig::parse("").is_err());
    }

    #[test]
    fn test_empty_lists_rejected() {
        let config = ManifestConfig::parse(
            "[extension]\nname = \"h3\"\ninclude_directories = []\n",
        )
        .unwrap();
        assert_eq!(
            config.into_manifest().unwrap_err(),
            ConfigError::EmptyList {
                field: "include_directories"
            }
        );

        let config = ManifestConfig::parse(
            "[extension]\nname = \"h3\"\ninclude_directories = [\"a\"]\nsource_files = []\n",
        )
        .unwrap();
        assert_eq!(
            config.into_manifest().unwrap_err(),
            ConfigError::EmptyList {
                field: "source_files"
            }
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = ManifestConfig::parse("[extension]\nname = \"  \"\n").unwrap();
        assert_eq!(config.into_manifest().unwrap_err(), ConfigError::MissingName);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ManifestConfig::parse("[extension\nname = ").is_err());
        assert!(ManifestConfig::parse("[extension]\nsource_files = 3\n").is_err());
    }
}
