//! The extension build manifest.
//!
//! A manifest names the include directories and source files of one
//! native-extension build target. Paths are stored in host-native form and
//! never change after construction.
//!
//! The h3 manifest is built from fixed literals the first time it is read
//! and lives for the rest of the process.

use std::sync::LazyLock;

use serde::Serialize;

use crate::util::path::{self, Separator};

/// Name of the built-in extension target.
pub const EXTENSION_NAME: &str = "h3";

/// Include directories of the h3 extension, `/`-delimited.
pub const INCLUDE_DIRECTORY_LITERALS: &[&str] = &["extension/h3/include"];

/// Source files of the h3 extension, `/`-delimited, in compile order.
pub const SOURCE_FILE_LITERALS: &[&str] = &[
    "extension/h3/h3-extension.cpp",
    "extension/h3/h3_common.cpp",
    "extension/h3/h3_functions/h3_cell_to_parent.cpp",
    "extension/h3/h3_functions/h3_valid.cpp",
];

static H3_MANIFEST: LazyLock<ExtensionManifest> = LazyLock::new(|| {
    let manifest = ExtensionManifest::from_literals(
        EXTENSION_NAME,
        INCLUDE_DIRECTORY_LITERALS,
        SOURCE_FILE_LITERALS,
    );
    tracing::debug!(
        name = manifest.name(),
        includes = manifest.include_directories().len(),
        sources = manifest.source_files().len(),
        separator = %manifest.separator(),
        "built extension manifest"
    );
    manifest
});

/// Include directories and source files for one extension build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionManifest {
    name: String,
    separator: Separator,
    include_directories: Vec<String>,
    source_files: Vec<String>,
}

impl ExtensionManifest {
    /// Build a manifest from `/`-delimited literals using the host separator.
    pub fn from_literals(
        name: impl Into<String>,
        includes: impl IntoIterator<Item = impl AsRef<str>>,
        sources: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self::with_separator(name, includes, sources, Separator::host())
    }

    /// Build a manifest from `/`-delimited literals using an explicit separator.
    pub fn with_separator(
        name: impl Into<String>,
        includes: impl IntoIterator<Item = impl AsRef<str>>,
        sources: impl IntoIterator<Item = impl AsRef<str>>,
        separator: Separator,
    ) -> Self {
        ExtensionManifest {
            name: name.into(),
            separator,
            include_directories: path::normalize_with(includes, separator),
            source_files: path::normalize_with(sources, separator),
        }
    }

    /// Extension target name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Separator the paths were rendered with.
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Include search-path entries, in precedence order.
    pub fn include_directories(&self) -> &[String] {
        &self.include_directories
    }

    /// Translation units, in literal order.
    pub fn source_files(&self) -> &[String] {
        &self.source_files
    }

    /// Get the include directories back in `/`-delimited form.
    pub fn portable_include_directories(&self) -> Vec<String> {
        self.include_directories
            .iter()
            .map(|p| path::to_portable(p, self.separator))
            .collect()
    }

    /// Get the source files back in `/`-delimited form.
    pub fn portable_source_files(&self) -> Vec<String> {
        self.source_files
            .iter()
            .map(|p| path::to_portable(p, self.separator))
            .collect()
    }
}

/// The h3 extension manifest.
pub fn manifest() -> &'static ExtensionManifest {
    &H3_MANIFEST
}

/// Include directories of the h3 extension in host-native form.
pub fn include_directories() -> &'static [String] {
    H3_MANIFEST.include_directories()
}

/// Source files of the h3 extension in host-native form.
pub fn source_files() -> &'static [String] {
    H3_MANIFEST.source_files()
}
