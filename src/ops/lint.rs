//! Lint manifest path literals.
//!
//! Normalization accepts any literal. This pass reports the ones that
//! will not survive on a real host so the problem shows up before the
//! compiler sees it.

use crate::core::manifest::{INCLUDE_DIRECTORY_LITERALS, SOURCE_FILE_LITERALS};
use crate::util::diagnostic::{suggestions, Diagnostic, MalformedLiteralError, Severity};

/// Characters Windows rejects in a path component.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*', '\\'];

struct Finding {
    severity: Severity,
    reason: String,
    suggestion: &'static str,
}

impl Finding {
    fn error(reason: impl Into<String>, suggestion: &'static str) -> Self {
        Finding {
            severity: Severity::Error,
            reason: reason.into(),
            suggestion,
        }
    }

    fn warning(reason: impl Into<String>, suggestion: &'static str) -> Self {
        Finding {
            severity: Severity::Warning,
            reason: reason.into(),
            suggestion,
        }
    }

    fn into_diagnostic(self, literal: &str) -> Diagnostic {
        let diag = match self.severity {
            Severity::Error => Diagnostic::error(format!("malformed path literal `{}`", literal)),
            Severity::Warning => {
                Diagnostic::warning(format!("suspicious path literal `{}`", literal))
            }
        };
        diag.with_context(self.reason)
            .with_suggestion(self.suggestion)
    }
}

fn has_drive_prefix(literal: &str) -> bool {
    let bytes = literal.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn inspect(literal: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    if literal.is_empty() {
        findings.push(Finding::error("path is empty", suggestions::UPDATE_MANIFEST));
        return findings;
    }

    let drive = has_drive_prefix(literal);
    if literal.starts_with('/') || drive {
        findings.push(Finding::error("path is absolute", suggestions::MAKE_RELATIVE));
    }

    // The drive colon was already reported as an absolute path.
    let rest = if drive { &literal[2..] } else { literal };
    if rest.contains('\\') {
        findings.push(Finding::error(
            "contains `\\` as a separator",
            suggestions::USE_FORWARD_SLASH,
        ));
    }
    let reserved: Vec<char> = rest
        .chars()
        .filter(|c| *c != '\\' && (RESERVED_CHARS.contains(c) || c.is_control()))
        .collect();
    if !reserved.is_empty() {
        findings.push(Finding::error(
            format!("contains reserved characters {:?}", reserved),
            suggestions::UPDATE_MANIFEST,
        ));
    }

    let body = literal.strip_prefix('/').unwrap_or(literal);
    if body.split('/').any(str::is_empty) {
        findings.push(Finding::warning(
            "contains an empty path segment",
            suggestions::REMOVE_EMPTY_SEGMENTS,
        ));
    }
    if body.split('/').any(|seg| seg == "." || seg == "..") {
        findings.push(Finding::warning(
            "contains a `.` or `..` segment",
            suggestions::MAKE_RELATIVE,
        ));
    }

    findings
}

/// Lint `/`-delimited literals. Returns one diagnostic per problem, in
/// literal order.
pub fn lint_literals<I, S>(literals: I) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    literals
        .into_iter()
        .flat_map(|literal| {
            let literal = literal.as_ref();
            inspect(literal)
                .into_iter()
                .map(|f| f.into_diagnostic(literal))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lint the built-in h3 literals.
pub fn lint_manifest_literals() -> Vec<Diagnostic> {
    let diagnostics = lint_literals(
        INCLUDE_DIRECTORY_LITERALS
            .iter()
            .chain(SOURCE_FILE_LITERALS.iter()),
    );
    tracing::debug!(count = diagnostics.len(), "linted manifest literals");
    diagnostics
}

/// Fail on the first literal with an error-level problem.
pub fn require_well_formed<I, S>(literals: I) -> Result<(), MalformedLiteralError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for literal in literals {
        let literal = literal.as_ref();
        if let Some(finding) = inspect(literal)
            .into_iter()
            .find(|f| f.severity == Severity::Error)
        {
            return Err(MalformedLiteralError {
                literal: literal.to_string(),
                reason: finding.reason,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_literals_are_clean() {
        assert!(lint_manifest_literals().is_empty());
        assert!(require_well_formed(SOURCE_FILE_LITERALS).is_ok());
    }

    #[test]
    fn test_empty_literal() {
        let diags = lint_literals([""]);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_error());
        assert_eq!(diags[0].context, vec!["path is empty"]);
    }

    #[test]
    fn test_absolute_literals() {
        let diags = lint_literals(["/usr/include", "C:/h3/include"]);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.context == vec!["path is absolute"]));
    }

    #[test]
    fn test_backslash_and_reserved() {
        let diags = lint_literals(["extension\\h3", "ext/a?b"]);
        assert_eq!(diags.len(), 2);
        assert!(diags[0].message.contains("extension\\h3"));
        assert_eq!(diags[0].suggestions, vec![suggestions::USE_FORWARD_SLASH]);
        assert!(diags[1].context[0].contains("'?'"));
    }

    #[test]
    fn test_empty_segments_warn() {
        let diags = lint_literals(["extension//h3", "extension/h3/"]);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn test_dot_segments_warn() {
        let diags = lint_literals(["../h3/include", "./src"]);
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| !d.is_error()));
    }

    #[test]
    fn test_require_well_formed() {
        let err = require_well_formed(["ok/path", "/abs/path"]).unwrap_err();
        assert_eq!(err.literal, "/abs/path");
        assert_eq!(err.reason, "path is absolute");

        // Warnings alone do not fail.
        assert!(require_well_formed(["a//b"]).is_ok());
    }
}
