//! Parsing attrdoc sources into an attribute tree
//!
//! Parsing is lenient: every input produces a tree. Malformed documents
//! degrade into a best-effort shape instead of failing, and the places where
//! that happened are available as [`Diagnostic`]s for callers that want a
//! strict mode.
//!
//! ```text
//! \h1 Containers
//! \fn get
//!     \arg key \type= const Key&
//!     \desc
//!         Looks up an entry.
//! ```
//!
//! parses into a root with an `h1` and an `fn` child; `fn` has `arg` and
//! `desc` children, and `arg` has a `type` child opened by the inline marker.
//!
//! Modules:
//! - [`tree_builder`]: the indentation stack
//! - `value`: body text accumulation (indent stripping, escapes, blank lines)
//! - [`diagnostics`]: strict-mode reporting

pub mod diagnostics;
pub mod tree_builder;
mod value;

pub use diagnostics::{Diagnostic, DiagnosticKind, ParseError};
pub use tree_builder::TreeBuilder;

use crate::attrdoc::ast::Node;
use crate::attrdoc::lexing::{split_lines, ReaderLines};
use std::io::{self, BufRead};

/// The tree together with everything that degraded while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub root: Node,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a sequence of lines (without terminators)
pub fn parse_lines<I, S>(lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    for line in lines {
        builder.push_line(line.as_ref());
    }
    builder.finish()
}

/// Parse a source string. Never fails.
pub fn parse_document(source: &str) -> Node {
    parse_lines(split_lines(source)).root
}

/// Parse a source string and keep the diagnostics
pub fn parse_with_diagnostics(source: &str) -> ParseOutcome {
    parse_lines(split_lines(source))
}

/// Parse a source string, failing if anything degraded
pub fn parse_strict(source: &str) -> Result<Node, ParseError> {
    let outcome = parse_with_diagnostics(source);
    if outcome.diagnostics.is_empty() {
        Ok(outcome.root)
    } else {
        Err(ParseError {
            diagnostics: outcome.diagnostics,
        })
    }
}

/// Report everything that would degrade silently
pub fn check(source: &str) -> Vec<Diagnostic> {
    parse_with_diagnostics(source).diagnostics
}

/// Parse from a reader, reading it to exhaustion.
///
/// Only reading can fail (I/O errors, invalid UTF-8); the reader itself is
/// left to the caller.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Node> {
    let mut builder = TreeBuilder::new();
    for line in ReaderLines::new(reader) {
        builder.push_line(&line?);
    }
    Ok(builder.finish().root)
}
