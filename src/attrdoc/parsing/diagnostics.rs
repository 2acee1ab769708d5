//! Strict-mode diagnostics
//!
//! The parser never rejects input. While building the tree it also records the
//! places where a document silently degraded, so tooling can point at them.
//! Collecting diagnostics does not change the tree.

use std::fmt;

/// What degraded at a diagnostic location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A body line is indented less than the node's established indent; the
    /// missing width could not be stripped
    UnderIndented { expected: usize, found: usize },
    /// An escaped tag inside body text without the closing `=`; it was kept
    /// as text
    UnterminatedMarker { tag: String },
    /// Body text before the first tag, folded into the document root
    DetachedText,
}

/// A located diagnostic. Lines and columns are 1-based, columns count chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: ", self.line, self.column)?;
        match &self.kind {
            DiagnosticKind::UnderIndented { expected, found } => write!(
                f,
                "body indented by {found}, expected at least {expected}"
            ),
            DiagnosticKind::UnterminatedMarker { tag } => {
                write!(f, "inline marker '{tag}' is missing '='")
            }
            DiagnosticKind::DetachedText => write!(f, "text before the first tag"),
        }
    }
}

/// Error returned by strict parsing when any diagnostic was recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} diagnostic(s)", self.diagnostics.len())?;
        if let Some(first) = self.diagnostics.first() {
            write!(f, ", first at {first}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic {
            line: 3,
            column: 2,
            kind: DiagnosticKind::UnderIndented {
                expected: 4,
                found: 1,
            },
        };
        assert_eq!(
            diagnostic.to_string(),
            "3:2: body indented by 1, expected at least 4"
        );

        let diagnostic = Diagnostic {
            line: 1,
            column: 5,
            kind: DiagnosticKind::UnterminatedMarker {
                tag: "ref".to_string(),
            },
        };
        assert_eq!(diagnostic.to_string(), "1:5: inline marker 'ref' is missing '='");
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParseError {
            diagnostics: vec![Diagnostic {
                line: 1,
                column: 1,
                kind: DiagnosticKind::DetachedText,
            }],
        };
        assert_eq!(
            error.to_string(),
            "1 diagnostic(s), first at 1:1: text before the first tag"
        );
    }
}
