//! Shared utilities

pub mod config;
pub mod diagnostic;
pub mod path;

pub use config::ManifestConfig;
pub use diagnostic::Diagnostic;
pub use path::Separator;
