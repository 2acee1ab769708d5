//! Debug tree view
//!
//! One line per node, two spaces of indentation per depth:
//!
//! ```text
//! Node()
//!   Node(fn,"get")
//!     Node(arg,"key")
//!     Node(static)
//! ```
//!
//! Values are printed quoted and escaped, so multi-line values stay on their
//! node's line. The synthetic root prints with an empty tag.

use super::registry::{FormatError, Formatter};
use crate::attrdoc::ast::Node;

pub fn to_tree_str(root: &Node) -> String {
    let mut result = String::new();
    append_node(&mut result, root, 0);
    result
}

fn append_node(result: &mut String, node: &Node, depth: usize) {
    result.push_str(&"  ".repeat(depth));
    result.push_str("Node(");
    result.push_str(node.tag());
    if let Some(value) = node.value() {
        result.push_str(&format!(",{value:?}"));
    }
    result.push_str(")\n");

    for child in node.children() {
        append_node(result, child, depth + 1);
    }
}

pub struct TreeFormatter;

impl Formatter for TreeFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(to_tree_str(root))
    }

    fn description(&self) -> &str {
        "One line per node, indented by depth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrdoc::parsing::parse_document;

    #[test]
    fn test_empty_document() {
        assert_eq!(to_tree_str(&parse_document("")), "Node()\n");
    }

    #[test]
    fn test_nested_document() {
        let root = parse_document(
            "\\h1 Containers\n\\fn get\n    \\arg key \\type= const Key&\n    \\static\n    \\desc\n        Looks up\n\n        an entry.\n",
        );
        insta::assert_snapshot!(to_tree_str(&root), @r###"
        Node()
          Node(h1,"Containers")
          Node(fn,"get")
            Node(arg,"key")
              Node(type,"const Key&")
            Node(static)
            Node(desc,"Looks up\n\nan entry.")
        "###);
    }

    #[test]
    fn test_quotes_are_escaped() {
        let root = parse_document("\\p say \"hi\"\n");
        assert_eq!(to_tree_str(&root), "Node()\n  Node(p,\"say \\\"hi\\\"\")\n");
    }
}
