//! XML-like tag serialization
//!
//! Every node becomes an element named after its tag, with its value as
//! text content and its children as nested elements:
//!
//! ```text
//! <document>
//!   <fn>get
//!     <arg>key</arg>
//!     <static></static>
//!   </fn>
//! </document>
//! ```
//!
//! The synthetic root is written as `<document>`. Text is XML-escaped;
//! tags are word characters and need no escaping.

use super::registry::{FormatError, Formatter};
use crate::attrdoc::ast::Node;

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
    }

    fn visit(&mut self, node: &Node) {
        self.push_indent(&format!("<{}>", node.tag()));
        if let Some(value) = node.value() {
            self.output.push_str(&escape_xml(value));
        }

        if node.children().is_empty() {
            self.output.push_str(&format!("</{}>\n", node.tag()));
            return;
        }

        self.output.push('\n');
        self.indent_level += 1;
        for child in node.children() {
            self.visit(child);
        }
        self.indent_level -= 1;
        self.push_indent(&format!("</{}>\n", node.tag()));
    }
}

/// Serialize a tree to the tag format
pub fn serialize_node(root: &Node) -> String {
    let mut serializer = TagSerializer {
        output: String::new(),
        indent_level: 1,
    };
    for child in root.children() {
        serializer.visit(child);
    }

    let mut result = String::from("<document>");
    if let Some(value) = root.value() {
        result.push_str(&escape_xml(value));
    }
    result.push('\n');
    result.push_str(&serializer.output);
    result.push_str("</document>\n");
    result
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(serialize_node(root))
    }

    fn description(&self) -> &str {
        "XML-like dump of tags and values"
    }
}
