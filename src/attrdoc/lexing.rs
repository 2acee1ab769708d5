//! Lexing for attrdoc lines
//!
//! The format is line oriented, so lexing happens one line at a time:
//! - [`tokens`]: the logos token set (escape, `=`, whitespace, words, text)
//! - [`line_classification`]: attribute line vs. value line
//! - [`inline_markers`]: mid-line tag declarations and their escaping
//! - [`source`]: splitting strings and readers into lines

pub mod inline_markers;
pub mod line_classification;
pub mod source;
pub mod tokens;

pub use inline_markers::{scan_markers, unescape_markers, InlineMarker, MarkerScan};
pub use line_classification::{classify_line, AttributeLine, LineKind, Terminator};
pub use source::{split_lines, ReaderLines};
pub use tokens::{tokenize, Token, ESCAPE};
