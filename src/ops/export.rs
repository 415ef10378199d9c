//! Write a manifest to disk for orchestrators that read files.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::manifest::ExtensionManifest;

/// Output format for an exported manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
}

impl ExportFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(ExportFormat::Json),
            "toml" => Some(ExportFormat::Toml),
            _ => None,
        }
    }
}

/// Render a manifest in the given format.
pub fn render(manifest: &ExtensionManifest, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(manifest)
            .context("failed to serialize manifest to JSON"),
        ExportFormat::Toml => {
            toml::to_string_pretty(manifest).context("failed to serialize manifest to TOML")
        }
    }
}

/// Write a manifest to `path`, choosing the format from its extension.
pub fn write_manifest(manifest: &ExtensionManifest, path: &Path) -> Result<()> {
    let Some(format) = ExportFormat::from_path(path) else {
        bail!(
            "unsupported manifest format: {} (expected .json or .toml)",
            path.display()
        );
    };

    let contents = render(manifest, format)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write manifest: {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?format, "wrote extension manifest");
    Ok(())
}
