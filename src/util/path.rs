//! Path separator normalization.
//!
//! Manifest literals are always authored with `/` between components.
//! Before they are handed to a compiler they are rewritten with the
//! separator of the host that runs the build.
//!
//! Nothing in this module touches the filesystem.

use std::fmt;

use serde::Serialize;

/// A path component separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `/` (POSIX-like hosts)
    Slash,
    /// `\` (Windows)
    Backslash,
}

impl Separator {
    /// The separator used by the host this crate was compiled for.
    pub const fn host() -> Self {
        if std::path::MAIN_SEPARATOR == '\\' {
            Separator::Backslash
        } else {
            Separator::Slash
        }
    }

    /// Get the separator as a character.
    pub const fn as_char(&self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Backslash => '\\',
        }
    }

    /// Get the separator as a string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::Slash => "/",
            Separator::Backslash => "\\",
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::host()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite a single `/`-delimited literal with the given separator.
///
/// Empty components are kept, so `a//b` becomes `a\\b` under
/// [`Separator::Backslash`].
pub fn normalize_literal(literal: &str, separator: Separator) -> String {
    rejoin(literal, '/', separator.as_str())
}

/// Rewrite every literal with the given separator, preserving order.
pub fn normalize_with<I, S>(paths: I, separator: Separator) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .map(|p| normalize_literal(p.as_ref(), separator))
        .collect()
}

/// Rewrite every literal with the host separator, preserving order.
///
/// The output has the same length as the input. Entries are neither
/// sorted nor de-duplicated.
pub fn normalize<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    normalize_with(paths, Separator::host())
}

/// Turn a host-native path back into its `/`-delimited literal.
pub fn to_portable(path: &str, separator: Separator) -> String {
    rejoin(path, separator.as_char(), "/")
}

/// Split on `from` and rejoin with `to`. Empty components survive.
fn rejoin(path: &str, from: char, to: &str) -> String {
    path.replace(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITERALS: &[&str] = &[
        "extension/h3/h3-extension.cpp",
        "extension/h3/h3_common.cpp",
        "extension/h3/h3_functions/h3_cell_to_parent.cpp",
        "extension/h3/h3_functions/h3_valid.cpp",
    ];

    #[test]
    fn test_slash_host_is_identity() {
        assert_eq!(
            normalize_literal("extension/h3/include", Separator::Slash),
            "extension/h3/include"
        );
        assert_eq!(normalize_with(LITERALS, Separator::Slash), LITERALS);
    }

    #[test]
    fn test_backslash_host() {
        assert_eq!(
            normalize_literal("extension/h3/h3-extension.cpp", Separator::Backslash),
            "extension\\h3\\h3-extension.cpp"
        );
    }

    #[test]
    fn test_preserves_length_and_order() {
        let out = normalize_with(LITERALS, Separator::Backslash);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], "extension\\h3\\h3-extension.cpp");
        assert_eq!(out[1], "extension\\h3\\h3_common.cpp");
        assert_eq!(out[2], "extension\\h3\\h3_functions\\h3_cell_to_parent.cpp");
        assert_eq!(out[3], "extension\\h3\\h3_functions\\h3_valid.cpp");
    }

    #[test]
    fn test_duplicates_pass_through() {
        let out = normalize_with(["b/a", "a/b", "b/a"], Separator::Backslash);
        assert_eq!(out, vec!["b\\a", "a\\b", "b\\a"]);
    }

    #[test]
    fn test_empty_input() {
        let out = normalize_with(Vec::<String>::new(), Separator::Backslash);
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_segments_pass_through() {
        assert_eq!(normalize_literal("/a//b/", Separator::Backslash), "\\a\\\\b\\");
        assert_eq!(normalize_literal("", Separator::Backslash), "");
    }

    #[test]
    fn test_round_trip() {
        for sep in [Separator::Slash, Separator::Backslash] {
            for literal in LITERALS.iter().copied().chain(["a//b/", "/x", "single"]) {
                let native = normalize_literal(literal, sep);
                assert_eq!(to_portable(&native, sep), literal);
            }
        }
    }

    #[test]
    fn test_host_matches_std() {
        assert_eq!(Separator::host().as_char(), std::path::MAIN_SEPARATOR);
        assert_eq!(normalize(["a/b"]), vec![format!("a{}b", std::path::MAIN_SEPARATOR)]);
    }
}
