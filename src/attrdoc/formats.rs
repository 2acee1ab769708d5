//! Output formats for attribute trees
//!
//! Serializers for inspecting a parsed tree:
//! - `tree`: one line per node, indented by depth
//! - `tag`: XML-like dump of tags, values and nesting
//! - `json` / `yaml`: serde encodings of the node structure

pub mod registry;
pub mod serialized;
pub mod tag;
pub mod tree;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_node as serialize_tag, TagFormatter};
pub use tree::{to_tree_str, TreeFormatter};
