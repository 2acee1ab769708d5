//! Indentation-stack tree builder
//!
//! Builds the attribute tree one line at a time. Open nodes form a stack,
//! bottom to top, from the synthetic root to the most recently declared node.
//! Each entry records the indent level of its declaration, where a level is
//! the leading whitespace width plus one, so that the root (level 0) is
//! shallower than any declared tag.
//!
//! # Nesting
//!
//! For a new attribute line at level `n`:
//! 1. close every open node whose level is greater than `n`
//! 2. if the top is now at level `n`, close it too: the new node is its
//!    sibling
//! 3. open the new node on top; it becomes a child of the node below it
//!
//! A node is attached to its parent when it is closed. Nodes are closed in
//! source order, so children end up in document order. The stack is always
//! the rightmost path of the tree being built.
//!
//! # Accumulation target
//!
//! Body text goes to the top of the stack until an inline marker opens a
//! child there; from then on it goes to the top's newest child, until the
//! next attribute line.

use super::diagnostics::Diagnostic;
use super::value::{FoldMode, Folder};
use super::ParseOutcome;
use crate::attrdoc::ast::Node;
use crate::attrdoc::lexing::{classify_line, AttributeLine, LineKind};

struct OpenNode {
    node: Node,
    level: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// The top of the open stack
    Open,
    /// The newest child of the top, opened by an inline marker
    LastChild,
}

/// Incremental parser state
pub struct TreeBuilder {
    open: Vec<OpenNode>,
    target: Target,
    pending_blank_lines: usize,
    line_number: usize,
    diagnostics: Vec<Diagnostic>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            open: vec![OpenNode {
                node: Node::root(),
                level: 0,
            }],
            target: Target::Open,
            pending_blank_lines: 0,
            line_number: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Feed the next line, without its terminator
    pub fn push_line(&mut self, line: &str) {
        self.line_number += 1;
        match classify_line(line) {
            LineKind::Attribute(attr) => self.push_attribute(line, &attr),
            LineKind::Value => self.push_value(line),
        }
    }

    /// Close every open node and return the root with the diagnostics
    pub fn finish(mut self) -> ParseOutcome {
        while self.open.len() > 1 {
            self.close_top();
        }
        let root = self.open.pop().map(|open| open.node).unwrap_or_else(Node::root);
        ParseOutcome {
            root,
            diagnostics: self.diagnostics,
        }
    }

    fn top_level(&self) -> usize {
        self.open.last().map_or(0, |open| open.level)
    }

    fn push_attribute(&mut self, line: &str, attr: &AttributeLine<'_>) {
        let level = attr.indent + 1;
        let mut node = Node::new(attr.tag);

        let mut split = false;
        if attr.has_inline_value() {
            // Blank-line bookkeeping of the inline value never leaks out
            let mut pending = 0;
            let mut folder = Folder {
                line,
                line_number: self.line_number,
                pending_blank_lines: &mut pending,
                diagnostics: &mut self.diagnostics,
                at_root: false,
            };
            split = folder.fold(&mut node, false, attr.rest, attr.rest_offset, FoldMode::Inline);
        }

        while self.top_level() > level {
            self.close_top();
        }
        if self.top_level() == level {
            self.close_top();
        }

        log::debug!(
            "line {}: \\{} at level {} opens under level {}",
            self.line_number,
            attr.tag,
            level,
            self.top_level()
        );
        self.open.push(OpenNode { node, level });
        self.target = if split { Target::LastChild } else { Target::Open };
        self.pending_blank_lines = 0;
    }

    fn push_value(&mut self, line: &str) {
        let at_root = self.open.len() == 1;
        let into_last_child = self.target == Target::LastChild;
        let Some(top) = self.open.last_mut() else {
            return;
        };

        let mut folder = Folder {
            line,
            line_number: self.line_number,
            pending_blank_lines: &mut self.pending_blank_lines,
            diagnostics: &mut self.diagnostics,
            at_root,
        };
        if folder.fold(&mut top.node, into_last_child, line.trim_end(), 0, FoldMode::BodyLine) {
            self.target = Target::LastChild;
        }
    }

    /// Pop the top node and attach it to the node below. The root stays.
    fn close_top(&mut self) {
        if self.open.len() < 2 {
            return;
        }
        let Some(closed) = self.open.pop() else {
            return;
        };
        if let Some(parent) = self.open.last_mut() {
            parent.node.push_child(closed.node);
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
