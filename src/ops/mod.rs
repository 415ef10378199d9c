//! High-level operations.
//!
//! Optional helpers for build orchestrators. None of them change what the
//! manifest holds.

pub mod export;
pub mod lint;
pub mod verify;

pub use export::{render, write_manifest, ExportFormat};
pub use lint::{lint_literals, lint_manifest_literals, require_well_formed};
pub use verify::{require_paths, verify_paths, PathRole};
