//! The attribute tree node
//!
//! Every tagged declaration in a document becomes a [`Node`]. A node owns its
//! children outright (there are no parent links), and children are kept in
//! source order because the dispatch engine groups them by that order.

use serde::Serialize;

/// A tagged node of the attribute tree.
///
/// The value is `None` until body text is first folded into the node, which
/// keeps "declared without a body" apart from "declared with an empty body".
/// The latter is written as a body line holding only the escape character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip)]
    indent: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        Node {
            tag: tag.into(),
            value: None,
            indent: None,
            children: Vec::new(),
        }
    }

    /// The synthetic document root. Its tag is empty and never matches a
    /// declared tag, since declared tags are at least one word character.
    pub(crate) fn root() -> Self {
        Node::new("")
    }

    /// The tag name this node was declared with
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The body text, or `None` if the node never received any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the node was given an explicit body (possibly empty)
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The body text, or an empty string when absent
    pub fn get_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Leading whitespace width established by the first body line, if any
    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    /// Child nodes in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// First child with the given tag, by document order
    pub fn get_attribute(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// All children with the given tag, in document order
    pub fn get_attributes(&self, tag: &str) -> Vec<&Node> {
        self.children.iter().filter(|child| child.tag == tag).collect()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = Some(value);
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut String> {
        self.value.as_mut()
    }

    pub(crate) fn set_indent(&mut self, indent: usize) {
        if self.indent.is_none() {
            self.indent = Some(indent);
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    #[cfg(test)]
    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    #[cfg(test)]
    pub(crate) fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}
