//! Core data structures.
//!
//! The extension manifest and the fixed literals it is built from.

pub mod manifest;

pub use manifest::{
    ExtensionManifest, EXTENSION_NAME, INCLUDE_DIRECTORY_LITERALS, SOURCE_FILE_LITERALS,
};
