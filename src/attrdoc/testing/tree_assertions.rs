//! Fluent assertion API for nodes

use crate::attrdoc::ast::Node;

/// Create an assertion builder for a tree
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.node.tag(),
            expected,
            "{}: expected tag '{}', found '{}'",
            self.context,
            expected,
            self.node.tag()
        );
        self
    }

    /// Assert the node has exactly this value
    pub fn value(self, expected: &str) -> Self {
        assert_eq!(
            self.node.value(),
            Some(expected),
            "{}: unexpected value",
            self.context
        );
        self
    }

    /// Assert the node never received a value
    pub fn no_value(self) -> Self {
        assert_eq!(
            self.node.value(),
            None,
            "{}: expected no value",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {} [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    /// Assert the node has no children
    pub fn leaf(self) -> Self {
        self.child_count(0)
    }

    /// Assert the tags of all children, in order
    pub fn child_tags(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.node.children().iter().map(Node::tag).collect();
        assert_eq!(actual, expected, "{}: unexpected child tags", self.context);
        self
    }

    /// Assert on the child at `index`
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> R,
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}/{}[{}]", self.context, children[index].tag(), index),
        });
        self
    }

    /// Assert on the first child tagged `tag`
    pub fn attribute<F, R>(self, tag: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> R,
    {
        let found = self.node.get_attribute(tag);
        assert!(
            found.is_some(),
            "{}: no child tagged '{}' [{}]",
            self.context,
            tag,
            summarize(self.node.children())
        );
        if let Some(node) = found {
            assertion(NodeAssertion {
                node,
                context: format!("{}/{}", self.context, tag),
            });
        }
        self
    }

    pub fn no_attribute(self, tag: &str) -> Self {
        assert!(
            self.node.get_attribute(tag).is_none(),
            "{}: unexpected child tagged '{}'",
            self.context,
            tag
        );
        self
    }
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(|child| match child.value() {
            Some(value) => format!("{}={:?}", child.tag(), value),
            None => child.tag().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
