//! Check manifest paths against a source tree on disk.
//!
//! The manifest never looks at the filesystem. Orchestrators that want to
//! catch a stale manifest before the compiler does can run this first.

use std::path::{Path, PathBuf};

use crate::core::manifest::ExtensionManifest;
use crate::util::diagnostic::{
    suggestions, Diagnostic, MissingPathError, PathCheckError, WrongKindPathError,
};

/// What a listed path is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    IncludeDirectory,
    SourceFile,
}

impl PathRole {
    fn describe(&self) -> &'static str {
        match self {
            PathRole::IncludeDirectory => "include directory",
            PathRole::SourceFile => "source file",
        }
    }

    fn expected_kind(&self) -> &'static str {
        match self {
            PathRole::IncludeDirectory => "a directory",
            PathRole::SourceFile => "a regular file",
        }
    }

    fn matches(&self, path: &Path) -> bool {
        match self {
            PathRole::IncludeDirectory => path.is_dir(),
            PathRole::SourceFile => path.is_file(),
        }
    }
}

fn entries(manifest: &ExtensionManifest) -> impl Iterator<Item = (PathRole, &String)> {
    manifest
        .include_directories()
        .iter()
        .map(|p| (PathRole::IncludeDirectory, p))
        .chain(
            manifest
                .source_files()
                .iter()
                .map(|p| (PathRole::SourceFile, p)),
        )
}

/// Verify every listed path relative to `root`.
///
/// Returns one error diagnostic per missing or wrong-kind entry, include
/// directories first, each list in manifest order.
pub fn verify_paths(manifest: &ExtensionManifest, root: &Path) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (role, entry) in entries(manifest) {
        let full = root.join(entry);
        if !full.exists() {
            tracing::debug!(path = %full.display(), "missing {}", role.describe());
            diagnostics.push(
                Diagnostic::error(format!("{} `{}` does not exist", role.describe(), entry))
                    .with_location(full)
                    .with_context(format!("listed in the `{}` manifest", manifest.name()))
                    .with_suggestion(suggestions::CHECK_ROOT)
                    .with_suggestion(suggestions::UPDATE_MANIFEST),
            );
        } else if !role.matches(&full) {
            diagnostics.push(
                Diagnostic::error(format!("{} `{}` has the wrong kind", role.describe(), entry))
                    .with_location(full)
                    .with_context(format!("expected {}", role.expected_kind()))
                    .with_suggestion(suggestions::UPDATE_MANIFEST),
            );
        }
    }

    diagnostics
}

/// Fail on the first listed path that is missing or the wrong kind
/// under `root`.
pub fn require_paths(manifest: &ExtensionManifest, root: &Path) -> Result<(), PathCheckError> {
    for (role, entry) in entries(manifest) {
        let full = root.join(entry);
        if !full.exists() {
            return Err(MissingPathError {
                extension: manifest.name().to_string(),
                path: PathBuf::from(entry),
                suggestion: Some(suggestions::CHECK_ROOT.to_string()),
            }
            .into());
        }
        if !role.matches(&full) {
            return Err(WrongKindPathError {
                extension: manifest.name().to_string(),
                path: PathBuf::from(entry),
                expected: role.expected_kind(),
            }
            .into());
        }
    }
    Ok(())
}
