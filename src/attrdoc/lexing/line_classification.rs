//! Line Classification
//!
//! Decides whether a raw line declares a new node (an attribute line) or
//! carries body text (a value line).
//!
//! An attribute line is, in order:
//! 1. optional leading whitespace
//! 2. the escape character
//! 3. a run of word characters (the tag)
//! 4. `=`, whitespace, or the end of the line
//!
//! Any other shape is a value line. A tag followed directly by anything else
//! (`\tag:` or `\tag\`) is body text, not a declaration.

use super::tokens::{tokenize, whitespace_width, Token};

/// What closed the tag token of an attribute line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `\tag=` - an explicit, possibly empty, value follows
    Equals,
    /// `\tag value`
    Whitespace,
    /// `\tag` alone
    EndOfLine,
}

/// A classified attribute line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeLine<'a> {
    /// Leading whitespace width in characters
    pub indent: usize,
    pub tag: &'a str,
    pub terminator: Terminator,
    /// Text after the tag token, trimmed on both ends
    pub rest: &'a str,
    /// Byte offset of `rest` within the line
    pub rest_offset: usize,
}

impl AttributeLine<'_> {
    /// Whether the declaration carries an inline value
    ///
    /// `\tag=` with nothing after it still counts. Folding the empty text
    /// leaves the value unset.
    pub fn has_inline_value(&self) -> bool {
        !self.rest.is_empty() || self.terminator == Terminator::Equals
    }
}

/// Line type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Attribute(AttributeLine<'a>),
    Value,
}

/// Classify a single line (without its terminator)
pub fn classify_line(line: &str) -> LineKind<'_> {
    let tokens = tokenize(line);
    let mut i = 0;
    let mut indent = 0;

    if let Some((Token::Whitespace, span)) = tokens.first() {
        indent = whitespace_width(&line[span.clone()]);
        i = 1;
    }

    if !matches!(tokens.get(i), Some((Token::Escape, _))) {
        return LineKind::Value;
    }
    let tag_span = match tokens.get(i + 1) {
        Some((Token::Word, span)) => span.clone(),
        _ => return LineKind::Value,
    };

    let (terminator, head_end) = match tokens.get(i + 2) {
        None => (Terminator::EndOfLine, tag_span.end),
        Some((Token::Equals, span)) => (Terminator::Equals, span.end),
        Some((Token::Whitespace, _)) => (Terminator::Whitespace, tag_span.end),
        Some(_) => return LineKind::Value,
    };

    let after_head = &line[head_end..];
    let rest = after_head.trim();
    let rest_offset = head_end + (after_head.len() - after_head.trim_start().len());

    LineKind::Attribute(AttributeLine {
        indent,
        tag: &line[tag_span],
        terminator,
        rest,
        rest_offset,
    })
}
