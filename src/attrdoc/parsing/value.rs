//! Body text accumulation
//!
//! Folds a piece of body text into the tree. A piece is either a whole value
//! line or the inline value that follows a tag on its attribute line. The
//! piece is first cut at its inline markers; every cut opens a new child of
//! the parent node, and the text after the cut is folded into that child.
//!
//! For each segment:
//! 1. trailing whitespace is dropped
//! 2. (value lines only, first segment only) the node's indent is stripped,
//!    or established if the node has none yet. One escape before the first
//!    non-blank character is removed so that `\\tag` can be written as
//!    literal body text at any depth
//! 3. doubled-escape markers are reduced to their literal form
//! 4. the result is appended, separated by one newline plus one per blank
//!    line seen since the last appended text. Blank text only counts blank
//!    lines; it never sets an absent value.

use super::diagnostics::{Diagnostic, DiagnosticKind};
use crate::attrdoc::ast::Node;
use crate::attrdoc::lexing::{scan_markers, tokens::whitespace_width, unescape_markers, ESCAPE};

/// Where a piece of body text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FoldMode {
    /// A value line: indentation is stripped relative to the node
    BodyLine,
    /// The value after a tag on its attribute line, already trimmed
    Inline,
}

/// Per-line folding state borrowed from the tree builder
pub(crate) struct Folder<'a> {
    pub line: &'a str,
    pub line_number: usize,
    pub pending_blank_lines: &'a mut usize,
    pub diagnostics: &'a mut Vec<Diagnostic>,
    /// The parent passed to [`Folder::fold`] is the synthetic root
    pub at_root: bool,
}

/// The node body text goes to: the parent itself, or its newest child once
/// an inline marker has opened one.
fn accumulation_target(parent: &mut Node, into_last_child: bool) -> &mut Node {
    match parent.children().len().checked_sub(1) {
        Some(last) if into_last_child => &mut parent.children_mut()[last],
        _ => parent,
    }
}

/// Skip `count` characters of `text`, clamping at its end
fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[index..],
        None => "",
    }
}

impl Folder<'_> {
    /// Fold `text` (found at byte `text_offset` of the line) into `parent`.
    ///
    /// Returns `true` if an inline marker opened a new child, meaning later
    /// body text belongs to `parent`'s newest child.
    pub fn fold(
        &mut self,
        parent: &mut Node,
        into_last_child: bool,
        text: &str,
        text_offset: usize,
        mode: FoldMode,
    ) -> bool {
        let scan = scan_markers(text);
        for marker in &scan.unterminated {
            self.report(
                text_offset + marker.start,
                DiagnosticKind::UnterminatedMarker {
                    tag: marker.tag.to_string(),
                },
            );
        }

        let mut into_last_child = into_last_child;
        let mut strip_indent = mode == FoldMode::BodyLine;
        let mut pos = 0;

        for marker in &scan.markers {
            let detached = self.at_root && !into_last_child;
            let target = accumulation_target(parent, into_last_child);
            self.append_segment(
                target,
                &text[pos..marker.start],
                text_offset + pos,
                strip_indent,
                detached,
            );

            log::trace!(
                "line {}: inline marker \\{} opens a child of \\{}",
                self.line_number,
                marker.tag,
                parent.tag()
            );
            parent.push_child(Node::new(marker.tag));
            into_last_child = true;
            strip_indent = false;
            pos = marker.end;
        }

        let detached = self.at_root && !into_last_child;
        let target = accumulation_target(parent, into_last_child);
        self.append_segment(target, &text[pos..], text_offset + pos, strip_indent, detached);

        !scan.markers.is_empty()
    }

    fn append_segment(
        &mut self,
        target: &mut Node,
        segment: &str,
        segment_offset: usize,
        strip_indent: bool,
        detached: bool,
    ) {
        let segment = segment.trim_end();
        let mut indent = None;

        let (text, has_content) = if strip_indent {
            let body = segment.trim_start();
            let leading = &segment[..segment.len() - body.len()];
            let width = whitespace_width(leading);

            let kept = match target.indent() {
                Some(established) => {
                    if width < established && !body.is_empty() {
                        self.report(
                            segment_offset + leading.len(),
                            DiagnosticKind::UnderIndented {
                                expected: established,
                                found: width,
                            },
                        );
                    }
                    skip_chars(leading, established)
                }
                None => {
                    indent = Some(width);
                    ""
                }
            };

            // A lone escape still counts as content: it writes an empty line
            let has_content = !kept.is_empty() || !body.is_empty();
            let body = body.strip_prefix(ESCAPE).unwrap_or(body);
            (format!("{kept}{body}"), has_content)
        } else {
            (segment.to_string(), !segment.is_empty())
        };

        if !has_content {
            if target.has_value() {
                *self.pending_blank_lines += 1;
            }
            return;
        }

        if detached {
            let body_start = segment.len() - segment.trim_start().len();
            self.report(segment_offset + body_start, DiagnosticKind::DetachedText);
        }

        let text = unescape_markers(&text);
        match target.value_mut() {
            Some(value) => {
                value.push_str(&"\n".repeat(*self.pending_blank_lines + 1));
                value.push_str(&text);
            }
            None => target.set_value(text.into_owned()),
        }
        if let Some(indent) = indent {
            target.set_indent(indent);
        }
        *self.pending_blank_lines = 0;
    }

    fn report(&mut self, byte_offset: usize, kind: DiagnosticKind) {
        let column = self.line[..byte_offset].chars().count() + 1;
        self.diagnostics.push(Diagnostic {
            line: self.line_number,
            column,
            kind,
        });
    }
}
