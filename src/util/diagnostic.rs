//! User-friendly diagnostic messages.
//!
//! The manifest itself never fails. Lint and verify report problems as
//! [`Diagnostic`]s so the build orchestrator can decide whether to stop.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Common suggestion messages for consistent reporting.
pub mod suggestions {
    /// Suggestion when a literal uses the wrong separator.
    pub const USE_FORWARD_SLASH: &str = "write paths with `/` between components on every host";

    /// Suggestion when a literal is absolute.
    pub const MAKE_RELATIVE: &str = "make the path relative to the repository root";

    /// Suggestion when a literal has empty segments.
    pub const REMOVE_EMPTY_SEGMENTS: &str = "remove doubled or trailing `/`";

    /// Suggestion when a listed path is missing on disk.
    pub const CHECK_ROOT: &str = "check that the build runs from the repository root";

    /// Suggestion when a listed path is stale.
    pub const UPDATE_MANIFEST: &str = "update the manifest to match the source tree";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Whether this diagnostic should fail a build.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.severity, self.message)?;
        if let Some(path) = &self.location {
            writeln!(f, "  --> {}", path.display())?;
        }
        for ctx in &self.context {
            writeln!(f, "  = {}", ctx)?;
        }
        for suggestion in &self.suggestions {
            writeln!(f, "  help: {}", suggestion)?;
        }
        Ok(())
    }
}

/// A path literal that cannot be used on the host filesystem.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("malformed path literal `{literal}`: {reason}")]
#[diagnostic(
    code(h3ext::manifest::malformed_literal),
    help("Write literals as relative paths with `/` between components")
)]
pub struct MalformedLiteralError {
    pub literal: String,
    pub reason: String,
}

/// A listed include directory or source file that does not exist.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("`{}` listed in the `{extension}` manifest does not exist", .path.display())]
#[diagnostic(code(h3ext::manifest::missing_path))]
pub struct MissingPathError {
    pub extension: String,
    pub path: PathBuf,
    #[help]
    pub suggestion: Option<String>,
}

/// A listed path that exists but is not the expected kind.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("`{}` listed in the `{extension}` manifest is not {expected}", .path.display())]
#[diagnostic(
    code(h3ext::manifest::wrong_kind),
    help("update the manifest to match the source tree")
)]
pub struct WrongKindPathError {
    pub extension: String,
    pub path: PathBuf,
    pub expected: &'static str,
}

/// First problem found when checking manifest paths on disk.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum PathCheckError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Missing(#[from] MissingPathError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    WrongKind(#[from] WrongKindPathError),
}

/// Check whether any diagnostic in the list is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
