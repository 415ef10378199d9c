//! h3ext-manifest - build manifest for the h3 native extension
//!
//! This crate tells a build orchestrator which include directories and
//! source files make up the extension. Paths are written once with `/`
//! and rendered with the separator of the host running the build.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::manifest::{include_directories, manifest, source_files, ExtensionManifest};
pub use crate::util::path::{normalize, Separator};
